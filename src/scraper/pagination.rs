// pagination.rs
use crate::domain::ListingRecord;
use crate::scraper::{ListingScraper, PageSource};
use scraper::Html;
use std::collections::HashSet;
use tracing::{info, warn};

enum WalkState {
    Fetching(String),
    Done,
}

impl<S: PageSource> ListingScraper<S> {
    /// Follows the forward-pagination link from `start_url` until a page has
    /// none, collecting records in page order and document order within a page.
    ///
    /// A failed page fetch ends the walk; whatever was gathered so far is kept.
    pub fn scrape_all(&self, start_url: &str) -> Vec<ListingRecord> {
        let mut records = Vec::new();
        let mut visited = HashSet::new();
        let mut page = 0;
        let mut state = WalkState::Fetching(start_url.to_string());

        while let WalkState::Fetching(url) = state {
            page += 1;
            info!(page, %url, "📄 Scraping results page");
            visited.insert(url.clone());
            state = self.walk_page(&url, page, &visited, &mut records);
        }

        info!(pages = page, listings = records.len(), "🏁 Pagination finished");
        records
    }

    fn walk_page(
        &self,
        url: &str,
        page: usize,
        visited: &HashSet<String>,
        records: &mut Vec<ListingRecord>,
    ) -> WalkState {
        let Some(document) = self.fetch_document(url) else {
            return WalkState::Done;
        };

        let before = records.len();
        records.extend(
            document
                .select(&self.selectors.listing)
                .filter_map(|listing| self.extract_summary(listing)),
        );
        info!(page, listings = records.len() - before, "✅ Page parsed");

        let Some(next_url) = self.next_page_url(&document) else {
            return WalkState::Done;
        };

        if visited.contains(&next_url) {
            warn!(%next_url, "🔁 Next page already visited, stopping");
            return WalkState::Done;
        }

        let delay = self.config.page_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        WalkState::Fetching(next_url)
    }

    fn next_page_url(&self, document: &Html) -> Option<String> {
        let link = document.select(&self.selectors.next_page).next()?;
        let href = link.value().attr("href")?;
        self.resolve_href(href)
    }
}
