use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path
};

use crate::{
    error::ScrapeError,
    format::Formatter,
    model::PaperRecord
};

// Utils to store search results on local device.
pub struct LocalSaver;

impl LocalSaver {
    pub fn save_records_as_readme(path: &Path, data: &[PaperRecord]) -> Result<(), ScrapeError> {
        let mut file = BufWriter::new(File::create(path)?);
        data.iter().try_for_each(|record| -> Result<(), ScrapeError> {
            file.write_all(Formatter::to_readme(record).as_bytes())?;
            Ok(())
        })?;
        file.flush()?;
        Ok(())
    }

    pub fn save_records_as_jsonl(path: &Path, data: &[PaperRecord]) -> Result<(), ScrapeError> {
        let mut file = BufWriter::new(File::create(path)?);
        data.iter().try_for_each(|record| -> Result<(), ScrapeError> {
            file.write_all(Formatter::to_jsonl(record)?.as_bytes())?;
            Ok(())
        })?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn records() -> Vec<PaperRecord> {
        (1..=3)
            .map(|i| PaperRecord::new(
                format!("arXiv:2410.0000{}", i),
                format!("Title {}", i),
                String::new(),
                String::from("N/A")
            ))
            .collect()
    }

    #[test]
    fn test_save_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.jsonl");
        LocalSaver::save_records_as_jsonl(&path, &records()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed = contents.lines()
            .map(|line| serde_json::from_str::<PaperRecord>(line).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(parsed, records());
    }

    #[test]
    fn test_save_readme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        LocalSaver::save_records_as_readme(&path, &records()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("### Title").count(), 3);
        assert!(contents.starts_with("### Title 1\n"));
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("papers.jsonl");
        let result = LocalSaver::save_records_as_jsonl(&path, &records());
        assert!(matches!(result, Err(ScrapeError::Io(_))));
    }
}
