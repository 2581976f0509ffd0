use std::fmt;
use serde::{Deserialize, Serialize};

// placeholder for any field whose source node is missing from an entry.
pub const NOT_AVAILABLE: &str = "N/A";

const ABS_URL_PREFIX: &str = "https://arxiv.org/abs/";

// one listing on an arXiv search results page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    // comma-joined, in page order.
    pub authors: String,
    #[serde(rename = "abstract")]
    pub summary: String
}

impl PaperRecord {
    pub fn new(id: String, title: String, authors: String, summary: String) -> Self {
        PaperRecord {
            id,
            title,
            authors,
            summary
        }
    }

    // "arXiv:2410.01234" -> "https://arxiv.org/abs/2410.01234"
    pub fn abs_link(&self) -> Option<String> {
        if self.id == NOT_AVAILABLE || self.id.is_empty() {
            return None;
        }
        let bare = self.id.strip_prefix("arXiv:").unwrap_or(&self.id);
        Some(format!("{}{}", ABS_URL_PREFIX, bare))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalCount {
    Found(u64),
    NotFound
}

impl TotalCount {
    pub fn found(&self) -> Option<u64> {
        match self {
            TotalCount::Found(n) => Some(*n),
            TotalCount::NotFound => None
        }
    }
}

impl fmt::Display for TotalCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalCount::Found(n) => write!(f, "{}", n),
            TotalCount::NotFound => f.write_str("Total results not found")
        }
    }
}

// everything pulled out of a single fetched results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub records: Vec<PaperRecord>,
    pub total: TotalCount
}
