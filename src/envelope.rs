use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::AppError;

/// What every controller hands back to the route layer: a status code and
/// an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status_code: StatusCode,
    pub body: Option<Value>,
}

impl Envelope {
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: Some(body),
        }
    }

    pub fn created(body: Value) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            body: Some(body),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT,
            body: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body: Some(json!({
                "error": "Bad Request",
                "message": message.into(),
            })),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status_code, Json(body)).into_response(),
            None => self.status_code.into_response(),
        }
    }
}

/// JSON request body whose rejections become `AppError::Validation`, so a
/// missing key answers with the same 400 envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
