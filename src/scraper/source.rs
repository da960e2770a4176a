// source.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Anything that can hand back the HTML body behind a URL.
pub trait PageSource {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError>;
}

/// Plain blocking HTTP GET. No custom headers, transport defaults for
/// timeouts and redirects.
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.text()?)
    }
}
