use folio_types::PortfolioSnapshot;
use serde_json::Value;

use crate::error::SheetError;

/// The spreadsheet macro service, as seen by the API.
#[async_trait::async_trait]
pub trait SheetClient: Send + Sync {
    /// Full snapshot, including blockchain categories, as raw JSON.
    async fn fetch_snapshot(&self) -> Result<Value, SheetError>;

    /// Asks the sheet to recompute prices and returns its reply as raw JSON.
    async fn trigger_refresh(&self) -> Result<Value, SheetError>;

    /// Snapshot decoded into the display model.
    async fn snapshot(&self) -> Result<PortfolioSnapshot, SheetError> {
        let raw = self.fetch_snapshot().await?;
        Ok(serde_json::from_value(raw)?)
    }
}
