use std::str::FromStr;

use axum::{extract::rejection::JsonRejection, Json};
use stockroom_core::DomainError;

use crate::app::errors::ViewError;

/// Parse a path id, mapping failures to a 400.
pub fn parse_id<T>(raw: &str) -> Result<T, ViewError>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse::<T>().map_err(ViewError::from)
}

/// Unwrap a JSON body. Axum's rejection becomes the same 400 validation error
/// the views raise.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ViewError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(status = %rejection.status(), "rejected request body");
            Err(ViewError::Validation(rejection.body_text()))
        }
    }
}
