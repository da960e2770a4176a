use crate::config::Sentinels;
use serde::Serialize;

/// Column order of every export.
pub const HEADERS: [&str; 8] = [
    "title",
    "price",
    "location",
    "rent",
    "furnishings",
    "floor",
    "room_number",
    "area",
];

/// Supplementary attributes pulled from a listing's own page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub rent: String,
    pub furnishings: String,
    pub floor: String,
    pub room_number: String,
    pub area: String,
}

impl DetailFields {
    /// All five fields set to their "not found" placeholder.
    pub fn not_found(sentinels: &Sentinels) -> Self {
        Self {
            rent: sentinels.rent.clone(),
            furnishings: sentinels.furnishings.clone(),
            floor: sentinels.floor.clone(),
            room_number: sentinels.room_number.clone(),
            area: sentinels.area.clone(),
        }
    }
}

/// One output row. Every field holds either a value or its sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub title: String,
    pub price: String,
    pub location: String,
    pub rent: String,
    pub furnishings: String,
    pub floor: String,
    pub room_number: String,
    pub area: String,
}

impl ListingRecord {
    pub fn new(title: String, price: String, location: String, detail: DetailFields) -> Self {
        Self {
            title,
            price,
            location,
            rent: detail.rent,
            furnishings: detail.furnishings,
            floor: detail.floor,
            room_number: detail.room_number,
            area: detail.area,
        }
    }

    /// Field values in `HEADERS` order.
    pub fn as_row(&self) -> [&str; 8] {
        [
            &self.title,
            &self.price,
            &self.location,
            &self.rent,
            &self.furnishings,
            &self.floor,
            &self.room_number,
            &self.area,
        ]
    }
}

/// Keeps the part of a "location, date" string before the first comma.
pub fn location_from(location_date: &str) -> &str {
    match location_date.split_once(',') {
        Some((location, _)) => location.trim(),
        None => location_date,
    }
}
