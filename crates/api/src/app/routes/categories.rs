use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use stockroom_catalog::CategoryFields;
use stockroom_core::CategoryId;

use crate::app::dto::{DeleteQuery, ListQuery};
use crate::app::routes::common::{json_body, parse_id};
use crate::app::services::AppServices;
use crate::app::views;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", put(update_category).delete(delete_category))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListQuery>,
) -> axum::response::Response {
    match views::list_categories(services.store.as_ref(), &query).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<CategoryFields>, JsonRejection>,
) -> axum::response::Response {
    let body = match json_body(payload) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::create_category(services.store.as_ref(), &body).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryFields>, JsonRejection>,
) -> axum::response::Response {
    let id: CategoryId = match parse_id(&id) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    let body = match json_body(payload) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::update_category(services.store.as_ref(), id, &body).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> axum::response::Response {
    let id: CategoryId = match parse_id(&id) {
        Ok(v) => v,
        Err(e) => return e.into_response(),
    };

    match views::delete_category(services.store.as_ref(), id, query.confirm).await {
        Ok(deleted) => Json(deleted).into_response(),
        Err(e) => e.into_response(),
    }
}
