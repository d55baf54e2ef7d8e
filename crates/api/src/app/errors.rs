use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_infra::StoreError;

pub const FETCH_DASHBOARD: &str = "Failed to load dashboard data";
pub const FETCH_PRODUCTS: &str = "Failed to load products";
pub const FETCH_PRODUCT: &str = "Failed to load product data";
pub const FETCH_CATEGORIES: &str = "Failed to load categories";
pub const SAVE_PRODUCT: &str = "Failed to save product";
pub const DELETE_PRODUCT: &str = "Failed to delete product";
pub const SAVE_CATEGORY: &str = "Failed to save category";
pub const DELETE_CATEGORY: &str = "Failed to delete category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTone {
    Success,
    Error,
}

/// One-shot message the client shows as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub tone: NotificationTone,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tone: NotificationTone::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: NotificationTone::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Failure of a view action.
///
/// Store failures carry only the generic message of the action that triggered
/// them; the underlying cause is logged when the error is built.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidId(String),

    #[error("deletion must be confirmed with ?confirm=true")]
    ConfirmationRequired,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Fetch(&'static str),

    #[error("{0}")]
    Mutation(&'static str),
}

impl ViewError {
    pub fn fetch(message: &'static str, err: StoreError) -> Self {
        tracing::error!(error = %err, "{message}");
        match err {
            StoreError::NotFound => ViewError::NotFound(message),
            _ => ViewError::Fetch(message),
        }
    }

    pub fn mutation(message: &'static str, err: StoreError) -> Self {
        tracing::error!(error = %err, "{message}");
        match err {
            StoreError::NotFound => ViewError::NotFound(message),
            _ => ViewError::Mutation(message),
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ViewError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ViewError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_id"),
            ViewError::ConfirmationRequired => {
                (StatusCode::PRECONDITION_REQUIRED, "confirmation_required")
            }
            ViewError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ViewError::Fetch(_) => (StatusCode::BAD_GATEWAY, "fetch_failed"),
            ViewError::Mutation(_) => (StatusCode::BAD_GATEWAY, "mutation_failed"),
        }
    }
}

impl From<DomainError> for ViewError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ViewError::Validation(msg),
            DomainError::InvalidId(msg) => ViewError::InvalidId(msg),
            DomainError::NotFound => ViewError::NotFound("not found"),
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();
        json_error(status, code, self.to_string())
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let message = message.into();
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.clone(),
            "notification": Notification::error(message),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_collapse_to_the_action_message() {
        let err = ViewError::fetch(FETCH_PRODUCTS, StoreError::Transport("refused".into()));
        assert_eq!(err, ViewError::Fetch(FETCH_PRODUCTS));
        assert_eq!(err.to_string(), FETCH_PRODUCTS);

        let err = ViewError::mutation(
            SAVE_PRODUCT,
            StoreError::Rejected {
                status: 409,
                message: "duplicate sku".into(),
            },
        );
        assert_eq!(err.to_string(), SAVE_PRODUCT);
    }

    #[test]
    fn statuses_by_kind() {
        assert_eq!(
            ViewError::Validation("x".into()).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ViewError::fetch(FETCH_PRODUCT, StoreError::NotFound).status_and_code(),
            (StatusCode::NOT_FOUND, "not_found")
        );
        assert_eq!(
            ViewError::Mutation(DELETE_PRODUCT).status_and_code().0,
            StatusCode::BAD_GATEWAY
        );
    }
}
