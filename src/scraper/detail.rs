// detail.rs
use super::scraper::element_text;
use crate::domain::DetailFields;
use crate::scraper::{ListingScraper, PageSource};
use scraper::Html;

/// A paragraph of the detail page along with its lowercased form.
struct Paragraph {
    text: String,
    folded: String,
}

impl<S: PageSource> ListingScraper<S> {
    /// Always returns all five fields. A failed fetch gives the full set of
    /// sentinels.
    pub fn extract_detail(&self, url: &str) -> DetailFields {
        match self.fetch_document(url) {
            Some(document) => self.detail_from_document(&document),
            None => DetailFields::not_found(&self.config.sentinels),
        }
    }

    /// Each field takes the first paragraph containing its marker. Fields are
    /// looked up independently, so one paragraph may fill several of them.
    pub fn detail_from_document(&self, document: &Html) -> DetailFields {
        let paragraphs: Vec<Paragraph> = document
            .select(&self.selectors.paragraph)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .map(|text| Paragraph {
                folded: text.to_lowercase(),
                text,
            })
            .collect();

        let markers = &self.config.field_markers;
        let sentinels = &self.config.sentinels;
        let lookup = |marker: &str, sentinel: &str| {
            first_containing(&paragraphs, marker).unwrap_or_else(|| sentinel.to_string())
        };

        DetailFields {
            rent: lookup(&markers.rent, &sentinels.rent),
            furnishings: lookup(&markers.furnishings, &sentinels.furnishings),
            floor: lookup(&markers.floor, &sentinels.floor),
            room_number: lookup(&markers.room_number, &sentinels.room_number),
            area: lookup(&markers.area, &sentinels.area),
        }
    }
}

fn first_containing(paragraphs: &[Paragraph], marker: &str) -> Option<String> {
    let marker = marker.to_lowercase();
    paragraphs
        .iter()
        .find(|p| p.folded.contains(&marker))
        .map(|p| p.text.clone())
}
