use crate::domain::{ListingRecord, HEADERS};
use crate::errors::ExportError;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Same columns as the CSV export, in a single worksheet.
pub fn export_listings_xlsx(
    records: &[ListingRecord],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in record.as_row().iter().enumerate() {
            worksheet.write_string(r, col as u16, *value)?;
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
