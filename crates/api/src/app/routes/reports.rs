use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::app::errors::json_error;
use crate::reports::{self, ReportKind};

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_reports))
        .route("/export/:kind", get(export_report))
}

pub async fn get_reports() -> axum::response::Response {
    Json(reports::view()).into_response()
}

pub async fn export_report(Path(kind): Path<String>) -> axum::response::Response {
    let kind: ReportKind = match kind.parse() {
        Ok(k) => k,
        Err(msg) => return json_error(StatusCode::BAD_REQUEST, "invalid_report_kind", msg),
    };

    let doc = reports::export(kind, Utc::now().date_naive());
    let body = match serde_json::to_string_pretty(&doc) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize report export");
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "export_failed",
                "Failed to export report",
            );
        }
    };
    tracing::info!(kind = kind.as_str(), "report exported");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.file_name()),
            ),
        ],
        body,
    )
        .into_response()
}
