//! Audit endpoint HTTP handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{info, warn};
use serde::Serialize;

use super::types::{AuditQuery, ErrorBody, ServerState};
use crate::error_handling::AuditError;

/// Message returned for every 500; fetch details stay in the log.
const AUDIT_FAILED_MESSAGE: &str = "Failed to audit the page";

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(json) => (status, [("content-type", "application/json")], json).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize response: {}", e),
        )
            .into_response(),
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(
        status,
        &ErrorBody {
            error: message.into(),
        },
    )
}

/// `GET /api/audit?url=...`: audits one page and returns the report.
///
/// 400 when the URL is missing or malformed, 500 when the page cannot be
/// fetched.
pub async fn audit_handler(
    State(state): State<ServerState>,
    Query(query): Query<AuditQuery>,
) -> Response {
    let Some(url) = query.url.filter(|url| !url.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing required parameter: url");
    };

    match state.auditor.audit(&url).await {
        Ok(report) => {
            info!("Served audit of {} (score {})", report.url, report.total_score);
            json_response(StatusCode::OK, &report)
        }
        Err(e @ AuditError::InvalidUrl(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            warn!("Audit of {} failed: {}", url, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, AUDIT_FAILED_MESSAGE)
        }
    }
}

/// `GET /health`: liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}
