use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::Method;
use axum::response::Response;
use serde::Serialize;
use uuid::Uuid;

use crate::api::{parse_request_body, ApiError, ApiResult, GenerateScheduleRequest};
use crate::app::state::AppState;

use super::common::{json_ok, map_api_error, preflight, reject_method};

// ==========================================
// 排班函数路由
// ==========================================

/// 方法分派 + 请求体解析，成功时交给 handle
fn dispatch<T, F>(
    operation: &'static str,
    locale: &str,
    method: Method,
    body: Result<Bytes, BytesRejection>,
    handle: F,
) -> Response
where
    T: Serialize,
    F: FnOnce(&GenerateScheduleRequest) -> ApiResult<T>,
{
    let span = tracing::info_span!(
        "schedule_request",
        request_id = %Uuid::new_v4(),
        operation,
        method = %method,
    );

    span.in_scope(|| {
        if method == Method::OPTIONS {
            return preflight();
        }
        if method != Method::POST {
            return reject_method(&method, locale);
        }

        let result = body
            .map_err(|rejection| ApiError::malformed_body(&rejection.body_text()))
            .and_then(|bytes| parse_request_body(&bytes))
            .and_then(|request| handle(&request));

        match result {
            Ok(payload) => {
                tracing::info!("请求完成");
                json_ok(payload)
            }
            Err(err) => map_api_error(err, locale),
        }
    })
}

/// 生成月度排班
///
/// POST {function_path}
pub(super) async fn generate_schedule(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    dispatch("generate_schedule", &state.config.locale, method, body, |request| {
        state.schedule_api.generate_schedule(request)
    })
}

/// 生成月度汇总
///
/// POST {function_path}/resumo
pub(super) async fn summarize_schedule(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    dispatch("summarize_schedule", &state.config.locale, method, body, |request| {
        state.schedule_api.summarize_schedule(request)
    })
}
