// config.rs
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

const DEFAULT_OUTPUT_STEM: &str = "listings";

/// Everything the scraper needs to know about the target site and the export.
/// Any subset can be overridden from a TOML file; the rest keeps its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub start_path: String,
    /// Unset means `listings.<ext>` for the chosen export format.
    pub output_path: Option<String>,
    pub page_delay_ms: u64,
    pub field_markers: FieldMarkers,
    pub selectors: PageSelectors,
    pub sentinels: Sentinels,
}

/// Keyword looked up (case-insensitively) in the detail page paragraphs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldMarkers {
    pub rent: String,
    pub furnishings: String,
    pub floor: String,
    pub room_number: String,
    pub area: String,
}

/// CSS selectors for the search-results and detail pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageSelectors {
    pub listing: String,
    pub title: String,
    pub price: String,
    pub location_date: String,
    pub detail_link: String,
    pub paragraph: String,
    pub next_page: String,
}

/// Placeholders written when a field cannot be located.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Sentinels {
    pub title: String,
    pub price: String,
    pub location: String,
    pub rent: String,
    pub furnishings: String,
    pub floor: String,
    pub room_number: String,
    pub area: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.olx.pl".to_string(),
            start_path: "/nieruchomosci/mieszkania/wynajem/wroclaw/".to_string(),
            output_path: None,
            page_delay_ms: 1000,
            field_markers: FieldMarkers::default(),
            selectors: PageSelectors::default(),
            sentinels: Sentinels::default(),
        }
    }
}

impl Default for FieldMarkers {
    fn default() -> Self {
        Self {
            rent: "rent".to_string(),
            furnishings: "umeblowanie".to_string(),
            floor: "piętro".to_string(),
            room_number: "pokoi".to_string(),
            area: "powierzchnia".to_string(),
        }
    }
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            listing: "div.css-1sw7q4x".to_string(),
            title: "h6".to_string(),
            price: r#"p[data-testid="ad-price"]"#.to_string(),
            location_date: r#"p[data-testid="location-date"]"#.to_string(),
            detail_link: "a".to_string(),
            paragraph: "p".to_string(),
            next_page: r#"a[data-testid="pagination-forward"]"#.to_string(),
        }
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            title: "Brak tytułu".to_string(),
            price: "Brak ceny".to_string(),
            location: "Brak lokalizacji".to_string(),
            rent: "Brak czynszu".to_string(),
            furnishings: "Brak umeblowania".to_string(),
            floor: "Brak piętra".to_string(),
            room_number: "Brak liczby pokoi".to_string(),
            area: "Brak powierzchni".to_string(),
        }
    }
}

impl ScrapeConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn base(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    pub fn start_url(&self) -> Result<Url, ConfigError> {
        self.base()?
            .join(&self.start_path)
            .map_err(|source| ConfigError::InvalidUrl {
                url: self.start_path.clone(),
                source,
            })
    }

    /// Configured destination, or `listings.<extension>` when none was given.
    pub fn output_path_or_default(&self, extension: &str) -> String {
        match &self.output_path {
            Some(path) => path.clone(),
            None => Path::new(DEFAULT_OUTPUT_STEM)
                .with_extension(extension)
                .to_string_lossy()
                .into_owned(),
        }
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}
