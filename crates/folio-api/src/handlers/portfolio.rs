use axum::{Json, extract::State, response::IntoResponse};

use folio_types::PortfolioSnapshot;

use crate::{AppState, dto::ErrorResponse, errors::ApiError};

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "Portfolio",
    responses(
        (status = 200, description = "Snapshot exactly as served by the spreadsheet", body = PortfolioSnapshot),
        (status = 500, description = "Upstream failure", body = ErrorResponse)
    )
)]
pub async fn get_portfolio(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let data = state.sheets.fetch_snapshot().await.map_err(|e| {
        tracing::error!("Failed to fetch portfolio data: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(data))
}
