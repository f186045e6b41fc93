use crate::errors::{Error, Result};

use super::{CatalogEntry, DrugItem};

/// Number of non-drug columns at the right edge of the catalog sheet.
const TRAILING_COLUMNS: usize = 3;

/// How catalog columns map onto drugs and the pharmacist.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ColumnLayout {
    /// Column 0 is the date, the last three columns are bookkeeping, and the
    /// pharmacist sits in the first of those three. Everything in between is
    /// a drug. This is the layout of the sheet the clinic uses today; adding
    /// or removing a trailing column silently shifts both fields.
    #[default]
    FixedTrailing,
    /// Columns resolved by header text.
    Named {
        pharmacist: String,
        /// Further non-drug headers besides the date and pharmacist.
        ignored: Vec<String>,
    },
}

impl ColumnLayout {
    /// Builds a drug list from a header row and the data row that matched.
    pub fn project(&self, header: &[String], row: &[String]) -> Result<CatalogEntry> {
        let (drug_columns, pharmacist_column) = match self {
            ColumnLayout::FixedTrailing => {
                let drug_end = header.len().saturating_sub(TRAILING_COLUMNS);
                let drugs: Vec<usize> = (1..drug_end).collect();
                (drugs, header.len().checked_sub(TRAILING_COLUMNS))
            }
            ColumnLayout::Named {
                pharmacist,
                ignored,
            } => {
                let index = header
                    .iter()
                    .position(|h| h == pharmacist)
                    .ok_or_else(|| Error::Upstream {
                        message: format!("catalog header has no {pharmacist:?} column"),
                    })?;
                let drugs = header
                    .iter()
                    .enumerate()
                    .skip(1)
                    .filter(|(i, h)| *i != index && !ignored.contains(*h))
                    .map(|(i, _)| i)
                    .collect();
                (drugs, Some(index))
            }
        };

        let drug_list = drug_columns
            .into_iter()
            .map(|i| DrugItem::new(header[i].as_str(), cell(row, i)))
            .collect();

        let pharmacist = pharmacist_column
            .map(|i| cell(row, i))
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(CatalogEntry {
            drug_list,
            pharmacist,
        })
    }
}

/// Sheets drops trailing empty cells, so short rows read as blank.
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

/// Finds the row whose first cell equals `date` exactly and projects it.
///
/// The first row is the header and is never matched.
pub fn find_entry(rows: &[Vec<String>], date: &str, layout: &ColumnLayout) -> Result<CatalogEntry> {
    let not_found = || Error::NotFound {
        date: date.to_string(),
    };

    let (header, data) = rows.split_first().ok_or_else(not_found)?;
    let row = data
        .iter()
        .find(|row| row.first().map(String::as_str) == Some(date))
        .ok_or_else(not_found)?;

    layout.project(header, row)
}
