use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::app::services::AppServices;
use crate::navigation::NavigationCommand;
use crate::settings::Theme;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub fn settings_router() -> Router {
    Router::new()
        .route("/", get(get_settings).put(put_settings))
        .route("/theme/toggle", post(toggle_theme))
}

#[derive(Debug, Deserialize)]
pub struct SettingsUpdate {
    pub theme: Theme,
}

pub async fn get_settings(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.settings.view()).into_response()
}

pub async fn put_settings(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<SettingsUpdate>,
) -> axum::response::Response {
    services.settings.set_theme(body.theme);
    Json(serde_json::json!({
        "settings": services.settings.view(),
        "notification": crate::app::errors::Notification::success(
            "Saved",
            "Settings saved successfully",
        ),
    }))
    .into_response()
}

pub async fn toggle_theme(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    services.settings.toggle_theme();
    Json(services.settings.view()).into_response()
}

pub async fn navigation(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.navigation()).into_response()
}

pub async fn navigate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(command): Json<NavigationCommand>,
) -> axum::response::Response {
    Json(services.navigate(command)).into_response()
}
