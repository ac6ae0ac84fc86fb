use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, handlers};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();

    let api_router = Router::new()
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/refresh", post(handlers::refresh_prices));

    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/analytics", get(handlers::analytics_page))
        .route("/health", get(health))
        .nest("/api", api_router)
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", open_api))
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request},
        response::Response,
    };
    use folio_metrics::MetricsRegistry;
    use folio_sheets::{SheetClient, SheetError};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::{PageConfig, docs::ApiDoc};

    /// Serves canned replies instead of calling the spreadsheet.
    struct FakeSheet {
        snapshot: Option<Value>,
        refresh: Option<Value>,
    }

    fn upstream_failure() -> SheetError {
        SheetError::Upstream {
            status: 502,
            body: "Bad Gateway".to_string(),
        }
    }

    #[async_trait::async_trait]
    impl SheetClient for FakeSheet {
        async fn fetch_snapshot(&self) -> Result<Value, SheetError> {
            self.snapshot.clone().ok_or_else(upstream_failure)
        }

        async fn trigger_refresh(&self) -> Result<Value, SheetError> {
            self.refresh.clone().ok_or_else(upstream_failure)
        }
    }

    fn sample_snapshot() -> Value {
        json!({
            "overview": {"totalValue": "$200,000", "roi": "1.5x"},
            "investments": [
                {"name": "Hatom", "totalValue": "$150,000", "liquidValue": 1200},
                {"name": "Peaq", "totalValue": "$50,000", "liquidValue": null}
            ],
            "individualPortfolios": {
                "matthias": {
                    "name": "Matthias",
                    "investments": [{"name": "Hatom", "totalInvested": "$1,000", "share": 0.5}]
                }
            },
            "blockchainCategories": [
                {"category": "DeFi", "totalInvested": "$1,000", "roi": "1.2x"}
            ]
        })
    }

    fn app(sheet: FakeSheet) -> Router {
        let state = AppState {
            sheets: Arc::new(sheet),
            metrics: MetricsRegistry::new(),
            pages: Arc::new(PageConfig::default()),
        };
        api_router::<ApiDoc>(state.clone()).with_state(state)
    }

    fn healthy() -> Router {
        app(FakeSheet {
            snapshot: Some(sample_snapshot()),
            refresh: Some(json!({"updated": 3})),
        })
    }

    fn broken() -> Router {
        app(FakeSheet {
            snapshot: None,
            refresh: None,
        })
    }

    async fn send(app: Router, method: Method, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// The sortable table, skipping the top-N lists above it.
    fn investments_table(html: &str) -> &str {
        &html[html.find("<h2>Investments</h2>").unwrap()..]
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_portfolio_returns_upstream_body() {
        let response = send(healthy(), Method::GET, "/api/portfolio").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, sample_snapshot());
    }

    #[tokio::test]
    async fn test_portfolio_upstream_failure() {
        let response = send(broken(), Method::GET, "/api/portfolio").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Upstream error 502: Bad Gateway"})
        );
    }

    #[tokio::test]
    async fn test_refresh_envelopes() {
        let response = send(healthy(), Method::POST, "/api/refresh").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "message": "Prices refreshed successfully",
                "data": {"updated": 3}
            })
        );

        let response = send(broken(), Method::POST, "/api/refresh").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "error": "Failed to refresh prices",
                "details": "Upstream error 502: Bad Gateway"
            })
        );
    }

    #[tokio::test]
    async fn test_refresh_requires_post() {
        let response = send(healthy(), Method::GET, "/api/refresh").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_fund_page() {
        let response = send(healthy(), Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("1.50x"));
        assert!(html.contains(r#"<a href="/?portfolio=matthias">Matthias</a>"#));
        assert!(html.contains("Hatom: $1,200"));
        let table = investments_table(&html);
        assert!(table.find("<td>Hatom</td>").unwrap() < table.find("<td>Peaq</td>").unwrap());
    }

    #[tokio::test]
    async fn test_header_links_toggle_sort() {
        let html = body_text(send(healthy(), Method::GET, "/?sort=totalValue&dir=desc").await).await;
        assert!(html.contains(r#"href="/?portfolio=fund&amp;sort=totalValue&amp;dir=asc""#));

        let html = body_text(send(healthy(), Method::GET, "/?sort=totalValue&dir=asc").await).await;
        assert!(html.contains(r#"href="/?portfolio=fund&amp;sort=totalValue&amp;dir=desc""#));
        let table = investments_table(&html);
        assert!(
            table.find("<td>Peaq</td>").unwrap() < table.find("<td>Hatom</td>").unwrap(),
            "ascending order puts the smaller position first"
        );
    }

    #[tokio::test]
    async fn test_individual_page() {
        let response = send(healthy(), Method::GET, "/?portfolio=matthias").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Matthias</h1>"));
        assert!(html.contains("<td>50.0%</td>"));
    }

    #[tokio::test]
    async fn test_unknown_portfolio() {
        let response = send(healthy(), Method::GET, "/?portfolio=nobody").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains("No portfolio named &quot;nobody&quot;."));
    }

    #[tokio::test]
    async fn test_pages_show_banner_on_upstream_failure() {
        for uri in ["/", "/analytics", "/?portfolio=matthias"] {
            let response = send(broken(), Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
            let html = body_text(response).await;
            assert!(html.contains(r#"<div class="banner">Failed to load.</div>"#));
            assert!(!html.contains("Bad Gateway"));
        }
    }

    #[tokio::test]
    async fn test_analytics_page() {
        let response = send(healthy(), Method::GET, "/analytics").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"<a href="/analytics" class="active">Analytics</a>"#));
        assert!(html.contains("<circle"));
        assert!(html.contains("<td>DeFi</td>"));
    }

    #[tokio::test]
    async fn test_health_docs_and_fallback() {
        let response = send(healthy(), Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let docs = body_json(send(healthy(), Method::GET, "/docs/openapi.json").await).await;
        assert!(docs["paths"]["/api/portfolio"]["get"].is_object());
        assert!(docs["paths"]["/api/refresh"]["post"].is_object());

        let response = send(healthy(), Method::GET, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response).await,
            "The requested resource was not found"
        );
    }
}
