use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use crate::app::state::AppState;

use super::common::json_ok;

// ==========================================
// 目录与健康检查
// ==========================================

#[derive(Debug, Serialize)]
struct HealthInfo {
    status: &'static str,
    version: &'static str,
}

/// 班次模式目录
///
/// GET /jornadas
pub(super) async fn list_patterns(State(state): State<Arc<AppState>>) -> Response {
    json_ok(state.schedule_api.list_patterns())
}

/// GET /health
pub(super) async fn health() -> Response {
    json_ok(HealthInfo {
        status: "ok",
        version: crate::VERSION,
    })
}
