// ==========================================
// HTTP 集成测试辅助工具
// ==========================================
// 职责: 构造路由、发送请求、读取 JSON 响应
// ==========================================

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;

use shift_roster::app::{router, AppState};
use shift_roster::config::ServerConfig;

/// 默认配置的路由
pub fn test_router() -> Router {
    router_with(ServerConfig::default())
}

/// 自定义配置的路由
pub fn router_with(config: ServerConfig) -> Router {
    router(Arc::new(AppState::new(config)))
}

/// 发送请求并返回 (状态码, 响应头, 原始响应体)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response: Response<Body> = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

/// POST JSON 并解析 JSON 响应
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, bytes) = send(app, "POST", uri, Some(body)).await;
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

/// 断言响应头包含宽松跨域设置
pub fn assert_cors(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
}
