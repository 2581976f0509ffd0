use std::sync::OnceLock;
use regex::Regex;

use crate::{
    document::{Document, Matcher, Node, Query},
    model::{PaperRecord, SearchPage, TotalCount, NOT_AVAILABLE}
};

// arXiv results page structure.
const RESULT_HEADING: Query = Query::class("h1", "title");
const ENTRY: Query = Query::class("li", "arxiv-result");
const LIST_TITLE: Query = Query::class("p", "list-title");
const TITLE: Query = Query::class("p", "title");
const AUTHORS: Query = Query::class("p", "authors");
const ABSTRACT_FULL: Query = Query::class("span", "abstract-full");
const LINK: Query = Query::tag("a");

// the "More"/"Less" toggles inside an abstract.
const CLICK_TRIGGER: Matcher = Matcher::HasAttr("onclick");

fn total_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)of ([0-9]+) results").expect("total regex is valid"))
}

/// Extracts the "of N results" count from the page heading.
pub fn extract_total_count(html: &str) -> TotalCount {
    total_from(&Document::parse(html))
}

/// Extracts one record per result entry, in page order.
pub fn extract_records(html: &str) -> Vec<PaperRecord> {
    records_from(&Document::parse(html))
}

/// Both extractions over a single parse of `html`.
pub fn extract_search_page(html: &str) -> SearchPage {
    let document = Document::parse(html);
    SearchPage {
        records: records_from(&document),
        total: total_from(&document)
    }
}

fn total_from(document: &Document) -> TotalCount {
    let heading = match document.find_first(RESULT_HEADING) {
        Some(heading) => heading.flattened_text(),
        None => return TotalCount::NotFound
    };
    total_regex()
        .captures(&heading)
        .and_then(|caps| caps.get(1))
        // ASCII digits only; an overflowing run is treated like a missing count.
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
        .map_or(TotalCount::NotFound, TotalCount::Found)
}

fn records_from(document: &Document) -> Vec<PaperRecord> {
    document.find_all(ENTRY)
        .map(record_from_entry)
        .collect()
}

fn record_from_entry(entry: Node<'_>) -> PaperRecord {
    let id = entry.find_first(LIST_TITLE)
        .and_then(|list_title| list_title.find_first(LINK))
        .map(|link| link.text(true));

    let title = entry.find_first(TITLE)
        .map(|title| title.text(true));

    // NOTE: inherited quirk, a missing authors paragraph gives "" not "N/A".
    let authors = entry.find_first(AUTHORS)
        .map(|authors| authors.find_all(LINK)
            .map(|link| link.text(true))
            .collect::<Vec<_>>()
            .join(", "))
        .unwrap_or_default();

    let summary = entry.find_first(ABSTRACT_FULL)
        .map(|abs| abs.remove_matching_descendants(CLICK_TRIGGER).flattened_text());

    PaperRecord::new(
        or_not_available(id),
        or_not_available(title),
        authors,
        or_not_available(summary)
    )
}

fn or_not_available(field: Option<String>) -> String {
    field.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
