// scraper.rs
use crate::config::{PageSelectors, ScrapeConfig};
use crate::scraper::{HttpPageSource, PageSource, ScraperError};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

/// Compiled form of `PageSelectors`.
pub(crate) struct Selectors {
    pub listing: Selector,
    pub title: Selector,
    pub price: Selector,
    pub location_date: Selector,
    pub detail_link: Selector,
    pub paragraph: Selector,
    pub next_page: Selector,
}

impl Selectors {
    fn compile(css: &PageSelectors) -> Result<Self, ScraperError> {
        Ok(Self {
            listing: parse_selector(&css.listing)?,
            title: parse_selector(&css.title)?,
            price: parse_selector(&css.price)?,
            location_date: parse_selector(&css.location_date)?,
            detail_link: parse_selector(&css.detail_link)?,
            paragraph: parse_selector(&css.paragraph)?,
            next_page: parse_selector(&css.next_page)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("selector '{css}': {e}")))
}

/// Walks the search results of one classifieds site and turns every
/// listing into a `ListingRecord`.
///
/// The page source is generic so the whole walk can run against canned HTML.
pub struct ListingScraper<S: PageSource = HttpPageSource> {
    pub(crate) source: S,
    pub(crate) config: ScrapeConfig,
    pub(crate) base_url: Url,
    pub(crate) selectors: Selectors,
}

impl ListingScraper<HttpPageSource> {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScraperError> {
        Self::with_source(config, HttpPageSource::new()?)
    }
}

impl<S: PageSource> ListingScraper<S> {
    pub fn with_source(config: ScrapeConfig, source: S) -> Result<Self, ScraperError> {
        let base_url = config
            .base()
            .map_err(|e| ScraperError::InvalidUrl(e.to_string()))?;
        let selectors = Selectors::compile(&config.selectors)?;

        Ok(Self {
            source,
            config,
            base_url,
            selectors,
        })
    }

    /// Fetches and parses a page. Failures are logged and reported as `None`.
    pub fn fetch_document(&self, url: &str) -> Option<Html> {
        match self.source.fetch_html(url) {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                warn!(%url, error = %e, "Failed to retrieve page");
                None
            }
        }
    }

    /// Absolute hrefs are kept as they are, anything else is joined onto the
    /// site base URL.
    pub fn resolve_href(&self, href: &str) -> Option<String> {
        match self.base_url.join(href.trim()) {
            Ok(url) => Some(url.into()),
            Err(e) => {
                debug!(%href, error = %e, "Unresolvable link");
                None
            }
        }
    }
}

/// Trimmed text of an element and all of its descendants.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first match inside `scope`, if there is one and it isn't blank.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}
