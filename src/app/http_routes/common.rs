use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

// ==========================================
// 公共工具：CORS、错误映射、JSON 响应
// ==========================================

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// 错误消息
    pub error: String,
}

/// 附加宽松的跨域头（所有响应一致）
pub(super) fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    response
}

/// 200 + JSON
pub(super) fn json_ok<T: Serialize>(value: T) -> Response {
    with_cors((StatusCode::OK, Json(value)).into_response())
}

/// 预检请求：空 200
pub(super) fn preflight() -> Response {
    with_cors(StatusCode::OK.into_response())
}

/// 将ApiError映射为 HTTP 响应
///
/// ApiError 均为调用方输入问题 → 400；消息按配置语言渲染
pub(super) fn map_api_error(err: ApiError, locale: &str) -> Response {
    tracing::warn!(code = err.code(), "请求被拒绝: {}", err);

    with_cors(
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.message(locale),
            }),
        )
            .into_response(),
    )
}

/// 非 POST/OPTIONS 方法
pub(super) fn reject_method(method: &Method, locale: &str) -> Response {
    map_api_error(
        ApiError::MethodNotAllowed {
            method: method.to_string(),
        },
        locale,
    )
}
