use std::path::PathBuf;

use anyhow::Context;
use domain::catalog::ColumnLayout;
use domain::sheets::DEFAULT_BASE_URL;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogConfig {
    pub spreadsheet_id: String,
    pub api_key: String,
    pub range: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MirrorConfig {
    pub spreadsheet_id: String,
    pub access_token: String,
    pub range: String,
}

/// Process configuration, read from the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub port: u16,
    pub records_file: PathBuf,
    pub sheets_base_url: String,
    /// `None` when the catalog spreadsheet id or API key is missing.
    pub catalog: Option<CatalogConfig>,
    pub layout: ColumnLayout,
    /// `None` unless both a spreadsheet id and an access token are set.
    pub mirror: Option<MirrorConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        let catalog = match (var("GOOGLE_SHEET_ID"), var("GOOGLE_SHEETS_API_KEY")) {
            (Some(spreadsheet_id), Some(api_key)) => Some(CatalogConfig {
                spreadsheet_id,
                api_key,
                range: var("CATALOG_RANGE").unwrap_or("Sheet1!A:N".to_string()),
            }),
            _ => None,
        };

        let layout = match var("CATALOG_PHARMACIST_COLUMN") {
            Some(pharmacist) => ColumnLayout::Named {
                pharmacist,
                ignored: var("CATALOG_IGNORED_COLUMNS")
                    .map(|raw| {
                        raw.split(',')
                            .map(str::trim)
                            .filter(|h| !h.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            None => ColumnLayout::FixedTrailing,
        };

        let mirror = match (var("SPREADSHEET_ID"), var("GOOGLE_SHEETS_ACCESS_TOKEN")) {
            (Some(spreadsheet_id), Some(access_token)) => Some(MirrorConfig {
                spreadsheet_id,
                access_token,
                range: var("RECORDS_SHEET_RANGE").unwrap_or("簽收紀錄".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            port,
            records_file: var("RECORDS_FILE")
                .unwrap_or("records.json".to_string())
                .into(),
            sheets_base_url: var("GOOGLE_SHEETS_BASE_URL").unwrap_or(DEFAULT_BASE_URL.to_string()),
            catalog,
            layout,
            mirror,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.records_file, PathBuf::from("records.json"));
        assert_eq!(config.sheets_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog, None);
        assert_eq!(config.layout, ColumnLayout::FixedTrailing);
        assert_eq!(config.mirror, None);
    }

    #[test]
    fn catalog_needs_both_id_and_key() {
        assert_eq!(config(&[("GOOGLE_SHEET_ID", "abc")]).unwrap().catalog, None);

        let config = config(&[("GOOGLE_SHEET_ID", "abc"), ("GOOGLE_SHEETS_API_KEY", "k")]).unwrap();
        assert_eq!(
            config.catalog,
            Some(CatalogConfig {
                spreadsheet_id: "abc".to_string(),
                api_key: "k".to_string(),
                range: "Sheet1!A:N".to_string(),
            })
        );
    }

    #[test]
    fn pharmacist_column_selects_named_layout() {
        let config = config(&[
            ("CATALOG_PHARMACIST_COLUMN", "Pharmacist"),
            ("CATALOG_IGNORED_COLUMNS", "Note, Checked,"),
        ])
        .unwrap();

        assert_eq!(
            config.layout,
            ColumnLayout::Named {
                pharmacist: "Pharmacist".to_string(),
                ignored: vec!["Note".to_string(), "Checked".to_string()],
            }
        );
    }

    #[test]
    fn mirror_uses_default_worksheet() {
        let config = config(&[("SPREADSHEET_ID", "s"), ("GOOGLE_SHEETS_ACCESS_TOKEN", "t")]).unwrap();
        assert_eq!(config.mirror.map(|m| m.range), Some("簽收紀錄".to_string()));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(config(&[("PORT", "eighty")]).is_err());
    }
}
