use axum::{Json, http::StatusCode, response::IntoResponse};
use folio_sheets::SheetError;
use thiserror::Error;

use crate::dto::{ErrorResponse, RefreshResponse};

/// Errors of the JSON routes.
///
/// Upstream failures are not classified: whatever went wrong, the caller gets
/// a 500 with the error text.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Upstream(String),
    #[error("Failed to refresh prices: {0}")]
    RefreshFailed(String),
}

impl From<SheetError> for ApiError {
    fn from(err: SheetError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(msg)),
            )
                .into_response(),
            Self::RefreshFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RefreshResponse::failed(details)),
            )
                .into_response(),
        }
    }
}

/// Errors of the HTML routes, rendered as a page by the handlers.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to load portfolio data: {0}")]
    Upstream(#[from] SheetError),
    #[error("Unknown portfolio: {0}")]
    UnknownPortfolio(String),
}

impl PageError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::UnknownPortfolio(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Text shown to the visitor. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Upstream(_) => "Failed to load.".to_string(),
            Self::UnknownPortfolio(key) => format!("No portfolio named \"{key}\"."),
        }
    }
}
