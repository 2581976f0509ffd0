pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod model;
pub mod parser;
pub mod storage;

pub use error::{ConfigError, ScrapeError};
pub use extract::{extract_records, extract_search_page, extract_total_count};
pub use model::{PaperRecord, SearchPage, TotalCount};
