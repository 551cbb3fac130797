// ==========================================
// HTTP 路由集成测试
// ==========================================
// 测试目标: 排班函数的请求/响应契约
// 覆盖范围: POST 成功、预检、方法拒绝、字段缺失、日期非法、汇总、目录
// ==========================================

mod helpers;

use axum::http::StatusCode;
use serde_json::{json, Value};
use shift_roster::config::ServerConfig;
use shift_roster::domain::types::UnknownPatternPolicy;

use helpers::http_test_helper::*;

const FUNCTION_PATH: &str = "/gerar-escala";

fn error_message(value: &Value) -> &str {
    value["error"].as_str().expect("error field")
}

#[tokio::test]
async fn test_post_returns_month_array() {
    let (status, headers, bytes) = send(
        test_router(),
        "POST",
        FUNCTION_PATH,
        Some(r#"{"jornadaValue":"40h_8h_segsex","dataInicio":"2024-03-01"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    assert_eq!(headers["content-type"], "application/json");

    let rows: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(rows.len(), 31);
    assert_eq!(
        rows[3],
        json!({
            "data": "2024-03-04",
            "status": "trabalho",
            "horas": 8,
            "fim_de_semana": false,
            "dia_util": true,
        })
    );
    assert_eq!(
        rows[1],
        json!({
            "data": "2024-03-02",
            "status": "folga",
            "horas": 0,
            "fim_de_semana": true,
            "dia_util": false,
        })
    );
}

#[tokio::test]
async fn test_12x36_rows() {
    let (status, body) = post_json(
        test_router(),
        FUNCTION_PATH,
        r#"{"jornadaValue":"12x36","dataInicio":"2024-01-01"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows[0]["status"], "trabalho");
    assert_eq!(rows[0]["horas"], 12);
    assert_eq!(rows[1]["status"], "folga");
    assert_eq!(rows[2]["status"], "trabalho");
}

#[tokio::test]
async fn test_unknown_pattern_is_all_rest_by_default() {
    let (status, body) = post_json(
        test_router(),
        FUNCTION_PATH,
        r#"{"jornadaValue":"unknown_pattern","dataInicio":"2024-06-01"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 30);
    assert!(rows
        .iter()
        .all(|r| r["status"] == "folga" && r["horas"] == 0 && r["dia_util"] == false));
}

#[tokio::test]
async fn test_unknown_pattern_rejected_when_configured() {
    let app = router_with(ServerConfig {
        unknown_pattern_policy: UnknownPatternPolicy::Reject,
        ..ServerConfig::default()
    });
    let (status, body) = post_json(
        app,
        FUNCTION_PATH,
        r#"{"jornadaValue":"unknown_pattern","dataInicio":"2024-06-01"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("unknown_pattern"));
}

#[tokio::test]
async fn test_missing_data_inicio_is_400() {
    let (status, headers, bytes) = send(
        test_router(),
        "POST",
        FUNCTION_PATH,
        Some(r#"{"jornadaValue":"12x36"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_cors(&headers);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body.is_object());
    assert!(error_message(&body).contains("dataInicio"));
}

#[tokio::test]
async fn test_empty_fields_are_400() {
    for payload in [
        r#"{"jornadaValue":"","dataInicio":"2024-01-01"}"#,
        r#"{"jornadaValue":"12x36","dataInicio":""}"#,
        r#"{}"#,
    ] {
        let (status, body) = post_json(test_router(), FUNCTION_PATH, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload={payload}");
        assert!(body.get("error").is_some());
    }
}

#[tokio::test]
async fn test_malformed_dates_are_400() {
    for date in ["01/03/2024", "2024-3-1", "2024-02-30", "2024-13-01"] {
        let payload = format!(r#"{{"jornadaValue":"5x2","dataInicio":"{date}"}}"#);
        let (status, body) = post_json(test_router(), FUNCTION_PATH, &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "date={date}");
        assert!(error_message(&body).contains(date));
    }
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (status, body) = post_json(test_router(), FUNCTION_PATH, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_preflight_is_empty_200_with_cors() {
    let (status, headers, bytes) = send(test_router(), "OPTIONS", FUNCTION_PATH, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_non_post_methods_are_400() {
    for method in ["GET", "PUT", "DELETE", "PATCH"] {
        let (status, headers, bytes) = send(test_router(), method, FUNCTION_PATH, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "method={method}");
        assert_cors(&headers);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(error_message(&body).contains(method));
    }
}

#[tokio::test]
async fn test_body_limit_is_enforced() {
    let app = router_with(ServerConfig {
        max_body_bytes: 16,
        ..ServerConfig::default()
    });
    let (status, body) = post_json(
        app,
        FUNCTION_PATH,
        r#"{"jornadaValue":"12x36","dataInicio":"2024-01-01"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_custom_function_path() {
    let app = router_with(ServerConfig {
        function_path: "/functions/v1/gerar-escala".to_string(),
        ..ServerConfig::default()
    });
    let (status, body) = post_json(
        app,
        "/functions/v1/gerar-escala",
        r#"{"jornadaValue":"6x1","dataInicio":"2024-02-01"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 29);
}

// ==========================================
// 汇总、目录、健康检查
// ==========================================

#[tokio::test]
async fn test_summary_endpoint() {
    let (status, headers, bytes) = send(
        test_router(),
        "POST",
        "/gerar-escala/resumo",
        Some(r#"{"jornadaValue":"44h_8h_segsex_4h_sab","dataInicio":"2024-03-10"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["mes"], "2024-03");
    assert_eq!(body["dias_no_mes"], 31);
    assert_eq!(body["dias_trabalho"], 26);
    assert_eq!(body["dias_uteis"], 21);
    assert_eq!(body["fins_de_semana_trabalhados"], 5);
    assert_eq!(body["horas_totais"], 188);
}

#[tokio::test]
async fn test_summary_endpoint_shares_error_rules() {
    let (status, headers, bytes) = send(test_router(), "GET", "/gerar-escala/resumo", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_cors(&headers);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(error_message(&body).contains("GET"));

    let (status, headers, bytes) = send(
        test_router(),
        "POST",
        "/gerar-escala/resumo",
        Some(r#"{"jornadaValue":"5x2"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_cors(&headers);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(error_message(&body).contains("dataInicio"));

    let (status, headers, bytes) = send(test_router(), "OPTIONS", "/gerar-escala/resumo", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_error_messages_follow_configured_locale() {
    let body = r#"{"jornadaValue":"5x2"}"#;

    let (status, value) = post_json(test_router(), FUNCTION_PATH, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&value),
        "Entrada inválida: campo obrigatório ausente: dataInicio"
    );

    let english = router_with(ServerConfig {
        locale: "en".to_string(),
        ..ServerConfig::default()
    });
    let (status, value) = post_json(english.clone(), FUNCTION_PATH, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&value),
        "Invalid input: missing required field: dataInicio"
    );

    let (status, _, bytes) = send(english, "PUT", "/gerar-escala/resumo", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error_message(&value), "Method not allowed: PUT");

    // 英文实例不影响默认实例
    let (_, value) = post_json(test_router(), FUNCTION_PATH, body).await;
    assert!(error_message(&value).starts_with("Entrada inválida"));
}

#[tokio::test]
async fn test_pattern_catalog() {
    let (status, _, bytes) = send(test_router(), "GET", "/jornadas", None).await;
    assert_eq!(status, StatusCode::OK);

    let catalog: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
    let values: Vec<&str> = catalog.iter().map(|e| e["value"].as_str().unwrap()).collect();
    assert_eq!(
        values,
        vec![
            "44h_8h_segsex_4h_sab",
            "40h_8h_segsex",
            "36h_6h_seg_sab",
            "12x36",
            "24x48",
            "5x2",
            "6x1"
        ]
    );
}

#[tokio::test]
async fn test_health() {
    let (status, _, bytes) = send(test_router(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], shift_roster::VERSION);
}
