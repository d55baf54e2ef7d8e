//! HTTP application wiring (Axum router + shared services).
//!
//! - `services.rs`: the store handle, settings and navigation coordinator
//! - `views.rs`: view actions over the store and the domain rules
//! - `routes/`: HTTP routes + handlers (one file per page)
//! - `dto.rs`: request/response shapes
//! - `errors.rs`: error responses and notifications

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

pub use services::{build_services, AppServices};

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
