use std::path::Path;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{
    config::{DateRange, SearchConfig},
    error::ScrapeError,
    extract::extract_search_page,
    model::SearchPage
};

macro_rules! arxiv_url {
    () => { concat!(
        "https://arxiv.org/search/advanced?advanced=&terms-0-operator=AND",
        "&terms-0-term=&terms-0-field=title&{}",
        "classification-physics_archives={}&classification-include_cross_list={}",
        "&date-year=&date-filter_by=date_range&date-from_date={}&date-to_date={}",
        "&date-date_type=submitted_date&abstracts=show&size={}",
        "&order=-announced_date_first&start={}"
    ) }
}

#[derive(Debug)]
pub struct ArxivParser {
    config: SearchConfig
}

impl ArxivParser {
    pub fn new(config: SearchConfig) -> Self {
        ArxivParser {
            config
        }
    }

    pub fn from_env(env_file: &Path) -> Result<Self, ScrapeError> {
        Ok(Self::new(SearchConfig::from_env(env_file)?))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // explicit dates win over the configured window.
    pub fn resolve_range(
        &self,
        today: NaiveDate,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>
    ) -> Result<DateRange, ScrapeError> {
        let end = match end {
            Some(end) => end,
            None => self.config.date_range(today)?.end
        };
        let start = match start {
            Some(start) => start,
            None => self.config.window_ending(end)?.start
        };
        Ok(DateRange::new(start, end)?)
    }

    fn create_query_url(&self, range: &DateRange) -> String {
        // search classifications.
        let classifications = self.config.classifications.iter()
            .map(|c| format!("classification-{}=y&", c))
            .collect::<String>();

        let cross_list = if self.config.include_cross_list { "include" } else { "exclude" };

        // first page only.
        format!(arxiv_url!(),
            classifications,
            self.config.physics_archives,
            cross_list,
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d"),
            self.config.page_size,
            0
        )
    }

    pub fn get_raw_html(&self, range: &DateRange) -> Result<String, ScrapeError> {
        let url = self.create_query_url(range);
        debug!(%url, "fetching search page");
        let body = reqwest::blocking::get(url)?
            .error_for_status()?
            .text()?;
        debug!(bytes = body.len(), "received search page");
        Ok(body)
    }

    pub fn get_search_page(&self, range: &DateRange) -> Result<SearchPage, ScrapeError> {
        let html = self.get_raw_html(range)?;
        let page = extract_search_page(&html);
        info!(
            start = %range.start,
            end = %range.end,
            records = page.records.len(),
            "parsed search page"
        );
        Ok(page)
    }
}
