pub mod listing;

pub use listing::{location_from, DetailFields, ListingRecord, HEADERS};
