use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sheet configuration: {0}")]
    Config(String),
}
