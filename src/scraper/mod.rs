mod detail;
mod listing;
mod pagination;
mod scraper;
mod scraper_error;
mod source;

pub use self::scraper::ListingScraper;
pub use scraper_error::ScraperError;
pub use source::{HttpPageSource, PageSource};
