//! HTTP surface for drug receipt signing.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use domain::{
    catalog::{Catalog, SheetRows, SheetSource},
    sheets::{SheetsCatalogClient, SheetsRecordMirror},
    store::{JsonFileStore, RecordMirror, RecordStore},
    Error,
};

pub mod config;
pub mod error;
pub mod handlers;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<Box<dyn RecordStore>>,
    pub mirror: Option<Arc<Box<dyn RecordMirror>>>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: Box<dyn RecordStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(store),
            mirror: None,
        }
    }

    pub fn with_mirror(mut self, mirror: Box<dyn RecordMirror>) -> Self {
        self.mirror = Some(Arc::new(mirror));
        self
    }
}

/// Stands in for the catalog when no spreadsheet is configured.
struct UnconfiguredCatalog;

#[async_trait]
impl SheetSource for UnconfiguredCatalog {
    async fn fetch_rows(&self) -> domain::Result<SheetRows> {
        Err(Error::Upstream {
            message: "catalog spreadsheet is not configured".to_string(),
        })
    }
}

/// Wires the file store, the catalog client and the optional mirror.
pub async fn build_state(config: &Config) -> domain::Result<AppState> {
    let store = JsonFileStore::new(&config.records_file);
    store.ensure_initialized().await?;

    let source: Box<dyn SheetSource> = match &config.catalog {
        Some(catalog) => Box::new(SheetsCatalogClient::new(
            &config.sheets_base_url,
            &catalog.spreadsheet_id,
            &catalog.range,
            &catalog.api_key,
        )),
        None => {
            tracing::warn!("GOOGLE_SHEET_ID or GOOGLE_SHEETS_API_KEY not set, drug data unavailable");
            Box::new(UnconfiguredCatalog)
        }
    };

    let state = AppState::new(
        Catalog::new(source, config.layout.clone()),
        Box::new(store),
    );

    Ok(match &config.mirror {
        Some(mirror) => state.with_mirror(Box::new(SheetsRecordMirror::new(
            &config.sheets_base_url,
            &mirror.spreadsheet_id,
            &mirror.range,
            &mirror.access_token,
        ))),
        None => {
            tracing::info!("Record mirror disabled, storing to {}", config.records_file.display());
            state
        }
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/app.js", get(script))
        .route("/health", get(|| async { "ok" }))
        .route("/api/drug-data", get(handlers::drug_data))
        .route("/api/record", post(handlers::create_record))
        .route("/api/download", get(handlers::download))
        .route("/api/records", get(handlers::list_records))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../static/app.js"),
    )
}
