use axum::{routing::get, Router};

pub mod categories;
pub mod common;
pub mod dashboard;
pub mod products;
pub mod reports;
pub mod system;

/// Router for every endpoint behind the shared services extension.
pub fn router() -> Router {
    Router::new()
        .route("/navigation", get(system::navigation).post(system::navigate))
        .nest("/settings", system::settings_router())
        .nest("/dashboard", dashboard::router())
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/reports", reports::router())
}
