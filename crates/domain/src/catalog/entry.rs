use derive_new::new;
use serde::{Deserialize, Serialize};

/// Drugs scheduled for one date and who dispenses them.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub drug_list: Vec<DrugItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacist: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct DrugItem {
    #[new(into)]
    pub name: String,
    #[new(into)]
    pub quantity: String,
}
