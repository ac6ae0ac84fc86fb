#![allow(clippy::option_if_let_else)]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const REFRESH_SUCCESS_MESSAGE: &str = "Prices refreshed successfully";
pub const REFRESH_FAILURE_MESSAGE: &str = "Failed to refresh prices";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Envelope of `POST /api/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Reply of the spreadsheet, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RefreshResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            message: Some(REFRESH_SUCCESS_MESSAGE.to_string()),
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn failed(details: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(REFRESH_FAILURE_MESSAGE.to_string()),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refresh_envelopes() {
        let ok = serde_json::to_value(RefreshResponse::ok(json!({"updated": 12}))).unwrap();
        assert_eq!(
            ok,
            json!({
                "success": true,
                "message": "Prices refreshed successfully",
                "data": {"updated": 12}
            })
        );

        let failed = serde_json::to_value(RefreshResponse::failed("Upstream error 500: boom")).unwrap();
        assert_eq!(
            failed,
            json!({
                "success": false,
                "error": "Failed to refresh prices",
                "details": "Upstream error 500: boom"
            })
        );
    }
}
