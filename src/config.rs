use std::{env, path::Path, str::FromStr};
use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_ENV_FILE: &str = "paperscraper.env";
pub const PAGE_SIZES: [u32; 4] = [25, 50, 100, 200];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub page_size: u32,
    // days between today and the end of the range.
    pub date_offset: u32,
    pub window_days: u32,
    pub classifications: Vec<String>,
    pub physics_archives: String,
    pub include_cross_list: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            page_size: 200,
            date_offset: 0,
            window_days: 1,
            classifications: vec![String::from("computer_science")],
            physics_archives: String::from("all"),
            include_cross_list: true,
        }
    }
}

impl SearchConfig {
    /// Loads `env_file` into the process environment if it exists, then reads
    /// overrides from the environment. Unset keys keep their defaults.
    pub fn from_env(env_file: &Path) -> Result<Self, ConfigError> {
        match dotenvy::from_path(env_file) {
            Ok(()) => debug!(path = %env_file.display(), "loaded env file"),
            Err(e) => debug!(path = %env_file.display(), error = %e, "env file not loaded"),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let page_size = parse_or(&lookup, "PAGE_SIZE", default.page_size)?;
        let date_offset = parse_or(&lookup, "DATE_OFFSET", default.date_offset)?;
        let window_days = parse_or(&lookup, "WINDOW_DAYS", default.window_days)?;
        let classifications = lookup("CLASSIFICATIONS")
            .map(|v| v.split_whitespace().map(String::from).collect::<Vec<_>>())
            .unwrap_or(default.classifications);
        let physics_archives = lookup("PHYSICS_ARCHIVES").unwrap_or(default.physics_archives);
        let include_cross_list = parse_or(&lookup, "INCLUDE_CROSS_LIST", default.include_cross_list)?;

        let config = SearchConfig {
            page_size,
            date_offset,
            window_days,
            classifications,
            physics_archives,
            include_cross_list,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }
        if self.window_days == 0 {
            return Err(ConfigError::NotPositive(String::from("WINDOW_DAYS")));
        }
        Ok(())
    }

    /// The submitted-date range ending `date_offset` days before `today`.
    pub fn date_range(&self, today: NaiveDate) -> Result<DateRange, ConfigError> {
        let end = days_before(today, self.date_offset, "DATE_OFFSET")?;
        self.window_ending(end)
    }

    /// `window_days` worth of dates up to and including `end`.
    pub fn window_ending(&self, end: NaiveDate) -> Result<DateRange, ConfigError> {
        let start = days_before(end, self.window_days, "WINDOW_DAYS")?;
        Ok(DateRange { start, end })
    }
}

fn days_before(date: NaiveDate, days: u32, key: &str) -> Result<NaiveDate, ConfigError> {
    date.checked_sub_days(Days::new(days as u64))
        .ok_or_else(|| ConfigError::DateOutOfRange { key: key.to_string(), days })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(key, &raw)),
        None => Ok(default),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SearchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = SearchConfig::from_lookup(lookup(&[
            ("PAGE_SIZE", "50"),
            ("DATE_OFFSET", "2"),
            ("WINDOW_DAYS", " 7 "),
            ("CLASSIFICATIONS", "computer_science  mathematics"),
            ("INCLUDE_CROSS_LIST", "false"),
        ])).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.date_offset, 2);
        assert_eq!(config.window_days, 7);
        assert_eq!(config.classifications, vec!["computer_science", "mathematics"]);
        assert!(!config.include_cross_list);
        assert_eq!(config.physics_archives, "all");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            SearchConfig::from_lookup(lookup(&[("DATE_OFFSET", "-1")])),
            Err(ConfigError::invalid_value("DATE_OFFSET", "-1"))
        );
        assert_eq!(
            SearchConfig::from_lookup(lookup(&[("PAGE_SIZE", "75")])),
            Err(ConfigError::InvalidPageSize(75))
        );
        assert_eq!(
            SearchConfig::from_lookup(lookup(&[("WINDOW_DAYS", "0")])),
            Err(ConfigError::NotPositive(String::from("WINDOW_DAYS")))
        );
    }

    #[test]
    fn test_missing_env_file_uses_defaults() {
        let config = SearchConfig::from_env(Path::new("definitely-not-here.env"));
        assert!(config.is_ok());
    }

    #[test]
    fn test_date_range() {
        let today = date(2025, 1, 1);
        let range = SearchConfig::default().date_range(today).unwrap();
        assert_eq!(range, DateRange { start: date(2024, 12, 31), end: today });

        let config = SearchConfig { date_offset: 1, window_days: 3, ..SearchConfig::default() };
        assert_eq!(
            config.date_range(today),
            Ok(DateRange { start: date(2024, 12, 28), end: date(2024, 12, 31) })
        );
    }

    #[test]
    fn test_date_range_out_of_calendar() {
        let today = date(2026, 10, 19);
        let config = SearchConfig::from_lookup(lookup(&[("DATE_OFFSET", "4000000000")])).unwrap();
        assert_eq!(
            config.date_range(today),
            Err(ConfigError::DateOutOfRange { key: String::from("DATE_OFFSET"), days: 4_000_000_000 })
        );

        let config = SearchConfig::from_lookup(lookup(&[("WINDOW_DAYS", "4000000000")])).unwrap();
        assert_eq!(
            config.date_range(today),
            Err(ConfigError::DateOutOfRange { key: String::from("WINDOW_DAYS"), days: 4_000_000_000 })
        );
        assert!(config.window_ending(today).is_err(), "explicit end date must not panic either");
    }

    #[test]
    fn test_date_range_order() {
        assert!(DateRange::new(date(2025, 1, 1), date(2025, 1, 1)).is_ok());
        assert_eq!(
            DateRange::new(date(2025, 1, 2), date(2025, 1, 1)),
            Err(ConfigError::InvalidDateRange { start: date(2025, 1, 2), end: date(2025, 1, 1) })
        );
    }
}
