use crate::domain::{ListingRecord, HEADERS};
use crate::errors::ExportError;
use std::path::Path;

/// Header row plus one row per record, UTF-8, standard CSV quoting.
pub fn export_listings_csv(
    records: &[ListingRecord],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADERS)?;
    for record in records {
        writer.write_record(record.as_row())?;
    }

    writer.flush()?;
    Ok(())
}
