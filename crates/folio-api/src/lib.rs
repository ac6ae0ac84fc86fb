pub mod docs;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod refresh_task;
pub mod router;
pub mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
use std::{env, time::Duration};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use folio_metrics::MetricsRegistry;
use folio_sheets::SheetClient;
use pragma_common::services::{Service, ServiceRunner};

use docs::ApiDoc;
use router::api_router;

pub use refresh_task::RefreshTask;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<dyn SheetClient>,
    pub metrics: Arc<MetricsRegistry>,
    pub pages: Arc<PageConfig>,
}

/// Settings of the server-rendered dashboard.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Label of the whole-fund view in the portfolio selector.
    pub fund_label: String,
    /// How often the browser reloads the page.
    pub poll_interval: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fund_label: "Fund".to_string(),
            poll_interval: Duration::from_secs(60),
        }
    }
}

pub struct ApiService {
    state: AppState,
    host: String,
    port: u16,
}

impl ApiService {
    pub fn new(state: AppState, host: &str, port: u16) -> Self {
        Self {
            state,
            host: host.to_owned(),
            port,
        }
    }
}

fn cors_layer_from_env() -> CorsLayer {
    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|origin| {
                    let trimmed = origin.trim();
                    if trimmed.is_empty() {
                        return None;
                    }
                    match HeaderValue::from_str(trimmed) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            tracing::warn!(
                                origin = trimmed,
                                error = %err,
                                "Invalid origin in CORS_ALLOWED_ORIGINS, skipping",
                            );
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS_ALLOWED_ORIGINS was set but no valid origins were parsed; falling back to permissive CORS",
                );
                return CorsLayer::permissive();
            }

            tracing::info!(
                allowed = %origins,
                "Configured restricted CORS origins from environment",
            );

            CorsLayer::new()
                .allow_headers(AllowHeaders::mirror_request())
                .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
                .allow_origin(AllowOrigin::list(allowed_origins))
        }
        Err(_) => {
            tracing::info!("CORS_ALLOWED_ORIGINS not set; using permissive CORS configuration");
            CorsLayer::permissive()
        }
    }
}

fn request_timeout_from_env() -> Duration {
    let timeout_secs: u64 = env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

    tracing::info!(timeout_secs = timeout_secs, "Request timeout configured");
    Duration::from_secs(timeout_secs)
}

#[async_trait::async_trait]
impl Service for ApiService {
    async fn start<'a>(&mut self, mut runner: ServiceRunner<'a>) -> anyhow::Result<()> {
        let host = self.host.clone();
        let port = self.port;
        let state = self.state.clone();

        runner.spawn_loop(move |ctx| async move {
            let address = format!("{host}:{port}");
            let socket_addr: SocketAddr = address.parse()?;
            let listener = TcpListener::bind(socket_addr).await?;

            #[allow(clippy::default_constructed_unit_structs)]
            let app = api_router::<ApiDoc>(state.clone())
                .with_state(state)
                // include trace context as header into the response
                //start OpenTelemetry trace on incoming request
                .layer(OtelAxumLayer::default())
                .layer(OtelInResponseLayer::default())
                .layer(TimeoutLayer::new(request_timeout_from_env()))
                .layer(cors_layer_from_env());

            tracing::info!("🧩 Dashboard started at http://{}", socket_addr);

            // Create a shutdown signal from our context
            let token = ctx.token.clone();
            let shutdown = async move { token.cancelled().await };

            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(shutdown)
            .await
            .context("😱 Dashboard server stopped!")
        });

        Ok(())
    }
}
