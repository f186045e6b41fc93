use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::text;

/// A confirmed receipt of drugs by one staff member on one date.
///
/// Duplicates on `(personnel_number, date)` are allowed; the store keeps
/// every submission in arrival order.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct SigningRecord {
    #[new(into)]
    #[serde(deserialize_with = "text::lenient")]
    pub personnel_number: String,
    #[new(into)]
    pub date: String,
    #[serde(default)]
    pub drugs: Vec<DrugLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct DrugLine {
    #[new(into)]
    #[serde(deserialize_with = "text::lenient")]
    pub name: String,
    /// Free text; never parsed as a number.
    #[new(into)]
    #[serde(deserialize_with = "text::lenient")]
    pub quantity: String,
    #[serde(default)]
    pub confirmed: bool,
}

/// One drug line of a record, flattened for tabular output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordRow<'a> {
    pub date: &'a str,
    pub personnel_number: &'a str,
    pub drug: &'a DrugLine,
}

impl SigningRecord {
    pub fn rows(&self) -> impl Iterator<Item = RecordRow<'_>> {
        self.drugs.iter().map(move |drug| RecordRow {
            date: &self.date,
            personnel_number: &self.personnel_number,
            drug,
        })
    }
}
