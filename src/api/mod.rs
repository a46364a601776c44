//! REST API module.
//!
//! Read endpoints for both records plus the admin editor surface. Every
//! response uses the `{ success, data, revisionId }` envelope.

mod collections;
mod content_editor;
mod records;
mod settings_editor;

pub use collections::*;
pub use content_editor::*;
pub use records::*;
pub use settings_editor::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Acknowledgment returned by every committed save or delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAck<T: Serialize> {
    pub message: String,
    pub record: T,
}

impl<T: Serialize> SaveAck<T> {
    pub fn new(message: impl Into<String>, record: T) -> Self {
        Self {
            message: message.into(),
            record,
        }
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError, revision_id: i64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision_id,
    })
}

/// Capitalize the first letter of an editor kind for messages.
fn capitalized(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Attach the current revision to an error.
async fn with_revision(
    state: &crate::AppState,
    error: crate::errors::AppError,
) -> crate::errors::AppErrorWithRevision {
    let revision_id = state.store.revision_id().await.unwrap_or(0);
    crate::errors::AppErrorWithRevision { error, revision_id }
}
