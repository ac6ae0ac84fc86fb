mod cli;

use std::{sync::Arc, time::Duration};

use crate::cli::FolioCli;
use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use pragma_common::{services::ServiceGroup, telemetry::init_telemetry};

use folio_api::{ApiService, AppState, PageConfig, RefreshTask};
use folio_metrics::MetricsRegistry;
use folio_sheets::{MacroSheetClient, SheetClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let FolioCli {
        sheet_macro_url,
        sheet_macro_token,
        otel_collector_endpoint,
        api_port,
        upstream_timeout_secs,
        poll_interval_secs,
        fund_label,
        auto_refresh_interval_secs,
    } = FolioCli::parse();

    let app_name = "folio_dashboard";
    if let Err(e) = init_telemetry(app_name, otel_collector_endpoint) {
        anyhow::bail!("Could not init telemetry: {e}");
    }

    let metrics = MetricsRegistry::new();
    let sheets: Arc<dyn SheetClient> = Arc::new(
        MacroSheetClient::new(
            &sheet_macro_url,
            &sheet_macro_token,
            Duration::from_secs(upstream_timeout_secs),
        )?
        .with_metrics(metrics.clone()),
    );

    let app_state = AppState {
        sheets: sheets.clone(),
        metrics,
        pages: Arc::new(PageConfig {
            fund_label,
            poll_interval: Duration::from_secs(poll_interval_secs),
        }),
    };

    let api_service = ApiService::new(app_state, "0.0.0.0", api_port);
    let mut services = ServiceGroup::default().with(api_service);

    match auto_refresh_interval_secs.filter(|secs| *secs > 0) {
        Some(secs) => {
            services = services.with(RefreshTask::new(sheets, Duration::from_secs(secs)));
        }
        None => tracing::info!("AUTO_REFRESH_INTERVAL_SECS not set; scheduled refresh disabled"),
    }

    services.start_and_drive_to_end().await?;

    Ok(())
}
