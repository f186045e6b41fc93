//! Minimal Google Sheets v4 REST client.
//!
//! Reads use an API key (`values.get`); appends need an OAuth bearer token
//! (`values.append`). Neither retries nor times out beyond reqwest defaults.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::{SheetRows, SheetSource};
use crate::errors::{Error, Result};
use crate::records::SigningRecord;
use crate::store::RecordMirror;
use crate::text::cell_text;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

fn values_url(base_url: &str, spreadsheet_id: &str, range: &str) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| Error::Upstream {
        message: format!("invalid Sheets base URL {base_url:?}: {e}"),
    })?;

    url.path_segments_mut()
        .map_err(|_| Error::Upstream {
            message: format!("Sheets base URL {base_url:?} cannot carry a path"),
        })?
        .pop_if_empty()
        .extend(["spreadsheets", spreadsheet_id, "values", range]);

    Ok(url)
}

fn rows_from_values(values: Vec<Vec<Value>>) -> SheetRows {
    values
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

/// Catalog reader for one range of one spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetsCatalogClient {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    range: String,
    api_key: String,
}

impl SheetsCatalogClient {
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl SheetSource for SheetsCatalogClient {
    async fn fetch_rows(&self) -> Result<SheetRows> {
        let url = values_url(&self.base_url, &self.spreadsheet_id, &self.range)?;

        tracing::debug!("Fetching catalog range {}", self.range);

        let body: ValueRange = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(rows_from_values(body.values))
    }
}

/// Appends each record to a worksheet, one row per drug line.
#[derive(Debug, Clone)]
pub struct SheetsRecordMirror {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    range: String,
    access_token: String,
}

impl SheetsRecordMirror {
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            access_token: access_token.into(),
        }
    }
}

fn append_body(record: &SigningRecord) -> Value {
    let values: Vec<Value> = record
        .rows()
        .map(|row| {
            json!([
                row.date,
                row.personnel_number,
                row.drug.name,
                row.drug.quantity,
                row.drug.confirmed
            ])
        })
        .collect();

    json!({ "values": values })
}

#[async_trait]
impl RecordMirror for SheetsRecordMirror {
    async fn mirror(&self, record: &SigningRecord) -> Result<()> {
        let target = format!("{}:append", self.range);
        let url = values_url(&self.base_url, &self.spreadsheet_id, &target)?;

        self.client
            .post(url)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&append_body(record))
            .send()
            .await?
            .error_for_status()?;

        tracing::info!(
            "Mirrored {} drug lines to sheet range {}",
            record.drugs.len(),
            self.range
        );
        Ok(())
    }
}
