use async_trait::async_trait;

use crate::dates::IsoDate;
use crate::errors::Result;

use super::{find_entry, CatalogEntry, ColumnLayout};

/// Rows of a sheet as cell text, header first.
pub type SheetRows = Vec<Vec<String>>;

/// Anything that can hand back the whole catalog table.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_rows(&self) -> Result<SheetRows>;
}

/// A fixed table, for tests and local runs without a spreadsheet.
#[derive(Clone, Debug, Default)]
pub struct StaticSheet {
    rows: SheetRows,
}

impl StaticSheet {
    pub fn new(rows: SheetRows) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl SheetSource for StaticSheet {
    async fn fetch_rows(&self) -> Result<SheetRows> {
        Ok(self.rows.clone())
    }
}

/// Date lookup over a [`SheetSource`].
pub struct Catalog {
    source: Box<dyn SheetSource>,
    layout: ColumnLayout,
}

impl Catalog {
    pub fn new(source: Box<dyn SheetSource>, layout: ColumnLayout) -> Self {
        Self { source, layout }
    }

    /// Fetches the table and projects the row keyed by `date`.
    ///
    /// The whole table is read on every call; there is no caching.
    pub async fn lookup(&self, date: &IsoDate) -> Result<CatalogEntry> {
        let rows = self.source.fetch_rows().await?;
        tracing::debug!("Catalog returned {} rows", rows.len());
        find_entry(&rows, date.as_str(), &self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    struct Unreachable;

    #[async_trait]
    impl SheetSource for Unreachable {
        async fn fetch_rows(&self) -> Result<SheetRows> {
            Err(Error::Upstream {
                message: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn lookup_projects_matching_row() {
        let sheet = StaticSheet::new(vec![
            vec!["Date".into(), "Aspirin".into(), "Ph".into(), "X".into(), "Y".into()],
            vec!["2024-01-10".into(), "5".into(), "Chen".into()],
        ]);
        let catalog = Catalog::new(Box::new(sheet), ColumnLayout::FixedTrailing);

        let date = IsoDate::parse("date", "2024-01-10").unwrap();
        let entry = catalog.lookup(&date).await.unwrap();
        assert_eq!(entry.drug_list.len(), 1);
        assert_eq!(entry.pharmacist.as_deref(), Some("Chen"));
    }

    #[tokio::test]
    async fn upstream_failure_is_not_not_found() {
        let catalog = Catalog::new(Box::new(Unreachable), ColumnLayout::default());
        let date = IsoDate::parse("date", "2024-01-10").unwrap();

        let result = catalog.lookup(&date).await;
        assert!(matches!(result, Err(Error::Upstream { .. })));
    }
}
