use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use domain::{
    catalog::CatalogEntry,
    records::{attachment_filename, export_csv, DateRange, Quoting, SigningRecord},
    Error, IsoDate,
};
use serde::Deserialize;

use crate::{error::ApiError, AppState};

const CATALOG_FAILED: &str = "獲取數據時出現錯誤";
const STORE_FAILED: &str = "儲存記錄時發生錯誤";
const EXPORT_FAILED: &str = "生成 CSV 時出現錯誤";
const QUERY_FAILED: &str = "查詢記錄時出現錯誤";

#[derive(Debug, Deserialize)]
pub struct DrugDataQuery {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadQuery {
    start_date: Option<String>,
    end_date: Option<String>,
    /// Opt into RFC 4180 quoting; the default output is unquoted.
    #[serde(default)]
    quoted: bool,
}

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    start_date: Option<String>,
    end_date: Option<String>,
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> domain::Result<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| Error::Validation {
            message: rejection.body_text(),
        })
}

fn required_date(field: &str, value: Option<&str>) -> domain::Result<IsoDate> {
    let value = value.ok_or_else(|| Error::Validation {
        message: format!("missing {field}"),
    })?;
    IsoDate::parse(field, value)
}

fn date_range(
    (start_field, start): (&str, Option<&str>),
    (end_field, end): (&str, Option<&str>),
) -> domain::Result<DateRange> {
    Ok(DateRange::new(
        required_date(start_field, start)?,
        required_date(end_field, end)?,
    ))
}

// Drug list scheduled for a date
pub async fn drug_data(
    State(state): State<AppState>,
    query: Result<Query<DrugDataQuery>, QueryRejection>,
) -> Result<Json<CatalogEntry>, ApiError> {
    let fail = |e| ApiError::from_domain(e, CATALOG_FAILED);
    let query = query_params(query).map_err(fail)?;

    let date = required_date("date", query.date.as_deref()).map_err(fail)?;
    tracing::info!("Requesting drug data for {}", date);

    let entry = state.catalog.lookup(&date).await.map_err(fail)?;
    tracing::info!(
        "Found {} drugs for {}, pharmacist: {}",
        entry.drug_list.len(),
        date,
        entry.pharmacist.as_deref().unwrap_or("-")
    );

    Ok(Json(entry))
}

// Store a signed record
pub async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<SigningRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let fail = |e| ApiError::from_domain(e, STORE_FAILED);

    let Json(record) = payload.map_err(|rejection| {
        fail(Error::Validation {
            message: rejection.body_text(),
        })
    })?;
    IsoDate::parse("date", &record.date).map_err(fail)?;

    state.store.append(&record).await.map_err(fail)?;

    if let Some(mirror) = &state.mirror {
        if let Err(e) = mirror.mirror(&record).await {
            tracing::warn!("Record stored locally but sheet mirror failed: {}", e);
        }
    }

    Ok(Json(serde_json::json!({ "message": "記錄已儲存" })))
}

// CSV export over a date range
pub async fn download(
    State(state): State<AppState>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let fail = |e| ApiError::from_domain(e, EXPORT_FAILED);
    let query = query_params(query).map_err(fail)?;

    let range = date_range(
        ("startDate", query.start_date.as_deref()),
        ("endDate", query.end_date.as_deref()),
    )
    .map_err(fail)?;
    tracing::info!("Downloading records from {} to {}", range.start, range.end);

    let records = range.filter(state.store.read_all().await.map_err(fail)?);
    let quoting = if query.quoted {
        Quoting::Rfc4180
    } else {
        Quoting::Raw
    };
    let body = export_csv(&records, quoting).map_err(fail)?;

    tracing::info!("CSV generated with {} records", records.len());

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", attachment_filename(&range)),
        ),
    ];

    Ok((headers, body))
}

// Records within a date range
pub async fn list_records(
    State(state): State<AppState>,
    query: Result<Query<RecordsQuery>, QueryRejection>,
) -> Result<Json<Vec<SigningRecord>>, ApiError> {
    let fail = |e| ApiError::from_domain(e, QUERY_FAILED);
    let query = query_params(query).map_err(fail)?;

    let range = date_range(
        ("start_date", query.start_date.as_deref()),
        ("end_date", query.end_date.as_deref()),
    )
    .map_err(fail)?;
    tracing::info!("Querying records from {} to {}", range.start, range.end);

    let records = range.filter(state.store.read_all().await.map_err(fail)?);
    tracing::info!("Found {} records", records.len());

    Ok(Json(records))
}
