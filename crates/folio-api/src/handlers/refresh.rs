use axum::{Json, extract::State, response::IntoResponse};

use crate::{AppState, dto::RefreshResponse, errors::ApiError};

#[utoipa::path(
    post,
    path = "/api/refresh",
    tag = "Portfolio",
    responses(
        (status = 200, description = "Spreadsheet recomputed its prices", body = RefreshResponse),
        (status = 500, description = "Refresh failed", body = RefreshResponse)
    )
)]
pub async fn refresh_prices(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let data = state.sheets.trigger_refresh().await.map_err(|e| {
        tracing::error!("Failed to refresh prices: {}", e);
        ApiError::RefreshFailed(e.to_string())
    })?;

    Ok(Json(RefreshResponse::ok(data)))
}
