use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use folio_display::SortState;
use folio_metrics::Outcome;
use folio_types::PortfolioSnapshot;

use crate::{
    AppState,
    dto::DashboardQuery,
    errors::PageError,
    views::{
        PageContext, View, analytics::analytics_view, error_page, fund::fund_view,
        individual::individual_view, page,
    },
};

const DASHBOARD_PAGE: &str = "dashboard";
const ANALYTICS_PAGE: &str = "analytics";

fn render_error(
    state: &AppState,
    page_name: &'static str,
    view: View,
    snapshot: Option<&PortfolioSnapshot>,
    err: &PageError,
) -> Response {
    state.metrics.pages.record_render(page_name, Outcome::Failure);
    let ctx = PageContext::new(&state.pages, view, snapshot);
    (err.status(), Html(error_page(&ctx, err))).into_response()
}

async fn load_snapshot(state: &AppState) -> Result<PortfolioSnapshot, PageError> {
    state.sheets.snapshot().await.map_err(|e| {
        tracing::error!("Failed to load portfolio data: {}", e);
        PageError::from(e)
    })
}

/// Fund or individual dashboard, picked by `?portfolio=`.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let view = View::from_query(query.portfolio.as_deref());
    let sort = SortState::from_query(query.sort.as_deref(), query.dir.as_deref());

    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(err) => return render_error(&state, DASHBOARD_PAGE, view, None, &err),
    };

    let (title, body) = match &view {
        View::Portfolio(key) => {
            let Some(portfolio) = snapshot.portfolio(key) else {
                tracing::warn!(portfolio = %key, "Unknown portfolio requested");
                let err = PageError::UnknownPortfolio(key.clone());
                return render_error(&state, DASHBOARD_PAGE, view.clone(), Some(&snapshot), &err);
            };
            let title = if portfolio.name.trim().is_empty() {
                key.clone()
            } else {
                portfolio.name.clone()
            };
            (title, individual_view(key, portfolio, &snapshot, sort))
        }
        View::Fund | View::Analytics => (state.pages.fund_label.clone(), fund_view(&snapshot, sort)),
    };

    state.metrics.pages.record_render(DASHBOARD_PAGE, Outcome::Success);
    let ctx = PageContext::new(&state.pages, view, Some(&snapshot));
    Html(page(&ctx, &title, &body)).into_response()
}

/// Category breakdown of the whole fund.
pub async fn analytics_page(State(state): State<AppState>) -> Response {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(err) => return render_error(&state, ANALYTICS_PAGE, View::Analytics, None, &err),
    };

    state.metrics.pages.record_render(ANALYTICS_PAGE, Outcome::Success);
    let ctx = PageContext::new(&state.pages, View::Analytics, Some(&snapshot));
    Html(page(&ctx, "Analytics", &analytics_view(&snapshot))).into_response()
}
