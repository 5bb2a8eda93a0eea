use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("InvalidData: {0}")]
    InvalidData(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Config: {0}")]
    Config(String),
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        // Request input is checked by the extractors; anything reaching here
        // is a server-side fault.
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        tracing::error!(error = %self, "request failed");
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
