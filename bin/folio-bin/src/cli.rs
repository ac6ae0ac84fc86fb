use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct FolioCli {
    /// Web app URL of the spreadsheet macro
    #[arg(long = "sheet-url", env = "SHEET_MACRO_URL")]
    pub sheet_macro_url: String,

    /// Static token sent with every call to the spreadsheet macro
    #[arg(long = "sheet-token", env = "SHEET_MACRO_TOKEN", hide_env_values = true)]
    pub sheet_macro_token: String,

    /// OTEL collector endpoint
    #[arg(long, env = "OTEL_COLLECTOR_ENDPOINT")]
    pub otel_collector_endpoint: Option<String>,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "8080")]
    pub api_port: u16,

    /// Timeout of a single call to the spreadsheet, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "30")]
    pub upstream_timeout_secs: u64,

    /// How often the dashboard pages reload themselves, in seconds
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "60")]
    pub poll_interval_secs: u64,

    /// Label of the whole-fund view
    #[arg(long, env = "FUND_LABEL", default_value = "Fund")]
    pub fund_label: String,

    /// Trigger a price refresh every N seconds. Disabled when unset or 0.
    #[arg(long, env = "AUTO_REFRESH_INTERVAL_SECS")]
    pub auto_refresh_interval_secs: Option<u64>,
}
