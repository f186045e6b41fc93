use csv::{QuoteStyle, WriterBuilder};

use crate::errors::Result;

use super::{DateRange, SigningRecord};

pub const CSV_HEADER: [&str; 5] = ["Date", "Personnel Number", "Drug Name", "Quantity", "Confirmed"];

/// Lets spreadsheet tools detect UTF-8.
const BOM: &str = "\u{feff}";

/// Field quoting for exported CSV.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Quoting {
    /// Fields written verbatim. Matches files already downloaded by users,
    /// even when a drug name contains a comma.
    #[default]
    Raw,
    /// Quote fields containing delimiters, quotes or line breaks.
    Rfc4180,
}

impl Quoting {
    fn style(self) -> QuoteStyle {
        match self {
            Quoting::Raw => QuoteStyle::Never,
            Quoting::Rfc4180 => QuoteStyle::Necessary,
        }
    }
}

/// One CSV line per drug line, in record order, after a BOM and header.
pub fn export_csv(records: &[SigningRecord], quoting: Quoting) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(quoting.style())
        .from_writer(BOM.as_bytes().to_vec());

    writer.write_record(CSV_HEADER)?;

    for row in records.iter().flat_map(SigningRecord::rows) {
        let confirmed = if row.drug.confirmed { "true" } else { "false" };
        writer.write_record([
            row.date,
            row.personnel_number,
            row.drug.name.as_str(),
            row.drug.quantity.as_str(),
            confirmed,
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    Ok(bytes)
}

pub fn attachment_filename(range: &DateRange) -> String {
    format!("records_{}_to_{}.csv", range.start, range.end)
}
