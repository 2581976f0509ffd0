use crate::model::PaperRecord;

pub struct Formatter;

impl Formatter {
    pub fn to_readme(data: &PaperRecord) -> String {
        let link = data.abs_link()
            .map(|link| format!("[{}]({})", data.id, link))
            .unwrap_or_else(|| data.id.clone());
        format!("### {}\n_{}_<br/>\n{}<br/>\n{}\n\n",
            data.title,
            data.authors,
            data.summary,
            link
        )
    }

    pub fn to_jsonl(data: &PaperRecord) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(data)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NOT_AVAILABLE;

    fn record(id: &str) -> PaperRecord {
        PaperRecord::new(
            id.to_string(),
            String::from("A \"quoted\" title"),
            String::from("Jane Doe, John Roe"),
            String::from("Line one.")
        )
    }

    #[test]
    fn test_readme() {
        assert_eq!(
            Formatter::to_readme(&record("arXiv:2410.00001")),
            concat!(
                "### A \"quoted\" title\n_Jane Doe, John Roe_<br/>\nLine one.<br/>\n",
                "[arXiv:2410.00001](https://arxiv.org/abs/2410.00001)\n\n"
            )
        );
    }

    #[test]
    fn test_readme_without_id() {
        let readme = Formatter::to_readme(&record(NOT_AVAILABLE));
        assert!(readme.ends_with("<br/>\nN/A\n\n"), "got {:?}", readme);
    }

    #[test]
    fn test_jsonl_escapes() {
        let line = Formatter::to_jsonl(&record("arXiv:1")).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        let parsed: PaperRecord = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed, record("arXiv:1"));
    }
}
