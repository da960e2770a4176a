pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::export_listings_csv;
pub use export_xlsx::export_listings_xlsx;

use crate::domain::ListingRecord;
use crate::errors::ExportError;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Writes all records to `path` in the chosen format, replacing whatever was there.
pub fn export(
    records: &[ListingRecord],
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => export_listings_csv(records, path),
        ExportFormat::Xlsx => export_listings_xlsx(records, path),
    }
}
