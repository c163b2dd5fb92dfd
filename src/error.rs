use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::envelope::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("email delivery failed: {0}")]
    Mail(String),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::Database(_) | AppError::Migration(_) => "persistence",
            AppError::Mail(_) => "dependency",
            AppError::Config(_) => "config",
            AppError::Io(_) | AppError::Other(_) => "internal",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Mail(err.to_string())
    }
}

// Callers only ever see a 400; the variant survives in the logs.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(kind = self.kind(), error = %self, "request failed");
        Envelope::bad_request(self.to_string()).into_response()
    }
}
