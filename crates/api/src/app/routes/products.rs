use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_catalog::ProductFields;
use stockroom_core::ProductId;

use crate::app::dto::{DeleteQuery, FormOptions, ListQuery};
use crate::app::routes::common::{json_body, parse_id};
use crate::app::services::AppServices;
use crate::app::views;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/form-options", get(form_options))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListQuery>,
) -> axum::response::Response {
    match views::list_products(services.store.as_ref(), &query).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn form_options() -> axum::response::Response {
    Json(FormOptions::default()).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match parse_id(&id) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::product_details(services.store.as_ref(), id).await {
        Ok(details) => Json(details).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> axum::response::Response {
    let body = match json_body(payload) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::create_product(services.store.as_ref(), &body).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<ProductFields>, JsonRejection>,
) -> axum::response::Response {
    let id: ProductId = match parse_id(&id) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    let body = match json_body(payload) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::update_product(services.store.as_ref(), id, &body).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> axum::response::Response {
    let id: ProductId = match parse_id(&id) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::delete_product(services.store.as_ref(), id, query.confirm).await {
        Ok(deleted) => Json(deleted).into_response(),
        Err(e) => e.into_response(),
    }
}
