use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the collection store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("recipe name is required")]
    Validation,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to encode recipe lists: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Failures surfaced by the collection HTTP routes. Every variant maps to a 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Recipe validation failed")]
    Validation,

    #[error("{0}")]
    Storage(StoreError),

    #[error("{}", .0.body_text())]
    Rejection(#[from] JsonRejection),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation => ApiError::Validation,
            other => ApiError::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Failures talking to the recipe provider or the collection API.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode response: {0}")]
    Decode(String),
}
