// ==========================================
// 照护机构排班系统 - HTTP 路由（按域拆分）
// ==========================================
// 职责: HTTP 路由定义,连接前端与后端 API
// ==========================================

mod catalog;
mod common;
mod schedule;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;

use crate::app::state::AppState;

pub use common::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};

/// 构建路由
///
/// 排班函数路由接受任意方法，由处理器负责 OPTIONS 预检与非 POST 拒绝
pub fn router(state: Arc<AppState>) -> Router {
    let function_path = state.config.function_path.clone();
    let summary_path = state.config.summary_path();
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route(&function_path, any(schedule::generate_schedule))
        .route(&summary_path, any(schedule::summarize_schedule))
        .route("/jornadas", get(catalog::list_patterns))
        .route("/health", get(catalog::health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
