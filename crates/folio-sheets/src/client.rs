use std::{sync::Arc, time::Duration};

use folio_metrics::{MetricsRegistry, Outcome, UpstreamOperation};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::{error::SheetError, traits::SheetClient};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Talks to the Apps Script web app that publishes the portfolio sheet.
///
/// Both operations are plain GETs against the same URL; the static `token`
/// query parameter authenticates every call.
pub struct MacroSheetClient {
    http_client: Client,
    endpoint: Url,
    token: String,
    metrics: Option<Arc<MetricsRegistry>>,
}

impl MacroSheetClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self, SheetError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| SheetError::Config(format!("invalid sheet URL {endpoint:?}: {e}")))?;
        if token.trim().is_empty() {
            return Err(SheetError::Config("sheet token is empty".to_string()));
        }

        Ok(Self {
            http_client: http_client(timeout)?,
            endpoint,
            token: token.to_string(),
            metrics: None,
        })
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("token", &self.token)
            .extend_pairs(params);
        url
    }

    async fn get_json(
        &self,
        operation: UpstreamOperation,
        params: &[(&str, &str)],
    ) -> Result<Value, SheetError> {
        let result = self.send(self.url(params)).await;
        if let Some(metrics) = &self.metrics {
            metrics.upstream.record(operation, Outcome::of(&result));
        }
        result
    }

    async fn send(&self, url: Url) -> Result<Value, SheetError> {
        // `without_url` keeps the token out of error messages and logs
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        if !status.is_success() {
            return Err(SheetError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl SheetClient for MacroSheetClient {
    async fn fetch_snapshot(&self) -> Result<Value, SheetError> {
        let data = self
            .get_json(
                UpstreamOperation::Fetch,
                &[("includeBlockchainCategories", "true")],
            )
            .await?;

        let count = |key: &str| data.get(key).and_then(Value::as_array).map_or(0, Vec::len);
        tracing::info!(
            investments = count("investments"),
            blockchain_categories = count("blockchainCategories"),
            "Fetched portfolio snapshot"
        );
        Ok(data)
    }

    async fn trigger_refresh(&self) -> Result<Value, SheetError> {
        let data = self
            .get_json(UpstreamOperation::Refresh, &[("refresh", "true")])
            .await?;
        tracing::info!("Sheet prices refreshed");
        Ok(data)
    }
}

pub fn http_client(timeout: Duration) -> Result<Client, SheetError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        SheetError::Http(e)
    })
}
