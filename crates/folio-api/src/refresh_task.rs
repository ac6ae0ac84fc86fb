use std::{sync::Arc, time::Duration};

use folio_sheets::SheetClient;
use pragma_common::services::{Service, ServiceRunner};
use tokio::time::{MissedTickBehavior, interval};

/// Asks the spreadsheet to recompute its prices on a fixed interval.
pub struct RefreshTask {
    sheets: Arc<dyn SheetClient>,
    every: Duration,
}

impl RefreshTask {
    pub fn new(sheets: Arc<dyn SheetClient>, every: Duration) -> Self {
        Self { sheets, every }
    }

    pub async fn run_forever(&self) -> anyhow::Result<()> {
        tracing::info!(
            "[RefreshTask] ⏱️ Refreshing sheet prices every {}s",
            self.every.as_secs()
        );

        let mut ticker = interval(self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately; the page load already fetched fresh data
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.refresh_once().await;
        }
    }

    /// One refresh. Failures are logged and left for the next tick.
    pub async fn refresh_once(&self) -> bool {
        match self.sheets.trigger_refresh().await {
            Ok(_) => {
                tracing::info!("[RefreshTask] 🔄 Scheduled price refresh done");
                true
            }
            Err(e) => {
                tracing::error!("[RefreshTask] 🔴 Scheduled price refresh failed: {}", e);
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl Service for RefreshTask {
    async fn start<'a>(&mut self, mut runner: ServiceRunner<'a>) -> anyhow::Result<()> {
        let task = Self::new(Arc::clone(&self.sheets), self.every);

        runner.spawn_loop(move |ctx| async move {
            if let Some(result) = ctx.run_until_cancelled(task.run_forever()).await {
                result?;
            }

            anyhow::Ok(())
        });

        Ok(())
    }
}
