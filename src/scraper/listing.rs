// listing.rs
use super::scraper::first_text;
use crate::domain::{location_from, ListingRecord};
use crate::scraper::{ListingScraper, PageSource};
use scraper::ElementRef;
use tracing::debug;

impl<S: PageSource> ListingScraper<S> {
    /// Builds a full record from one summary block on a results page,
    /// fetching the listing's detail page on the way.
    ///
    /// A block without a usable detail link has no identity and yields `None`.
    pub fn extract_summary(&self, listing: ElementRef<'_>) -> Option<ListingRecord> {
        let Some(detail_url) = self.detail_url(listing) else {
            debug!("Listing without a detail link, skipping");
            return None;
        };

        let sel = &self.selectors;
        let sentinels = &self.config.sentinels;

        let title = first_text(listing, &sel.title).unwrap_or_else(|| sentinels.title.clone());
        let price = first_text(listing, &sel.price).unwrap_or_else(|| sentinels.price.clone());
        let location = first_text(listing, &sel.location_date)
            .map(|text| location_from(&text).to_string())
            .filter(|location| !location.is_empty())
            .unwrap_or_else(|| sentinels.location.clone());

        let detail = self.extract_detail(&detail_url);

        Some(ListingRecord::new(title, price, location, detail))
    }

    /// An anchor without `href` counts as no link, so the listing is dropped.
    fn detail_url(&self, listing: ElementRef<'_>) -> Option<String> {
        let anchor = listing.select(&self.selectors.detail_link).next()?;
        let href = anchor.value().attr("href")?;
        self.resolve_href(href)
    }
}
