use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};

use crate::app::services::AppServices;
use crate::app::views;

pub fn router() -> Router {
    Router::new().route("/", get(get_dashboard))
}

pub async fn get_dashboard(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match views::dashboard(services.store.as_ref()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => e.into_response(),
    }
}
