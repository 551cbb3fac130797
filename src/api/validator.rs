// ==========================================
// 照护机构排班系统 - 请求校验器
// ==========================================
// 职责: 请求体解析、必填字段校验、起始日期校验
// 规则: 字段值先去除首尾空白，空白即视为缺失
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::engine::calendar::parse_start_date;

/// 排班生成请求（前端原始字段名）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    /// 班次模式令牌
    #[serde(rename = "jornadaValue", default)]
    pub jornada_value: Option<String>,

    /// 起始日期 YYYY-MM-DD
    #[serde(rename = "dataInicio", default)]
    pub data_inicio: Option<String>,
}

impl GenerateScheduleRequest {
    pub fn new(jornada_value: &str, data_inicio: &str) -> Self {
        Self {
            jornada_value: Some(jornada_value.to_string()),
            data_inicio: Some(data_inicio.to_string()),
        }
    }
}

/// 校验通过的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub pattern_token: String,
    pub start_date: NaiveDate,
}

/// 解析 JSON 请求体
pub fn parse_request_body(body: &[u8]) -> ApiResult<GenerateScheduleRequest> {
    serde_json::from_slice(body).map_err(|e| ApiError::malformed_body(&e.to_string()))
}

fn required<'a>(value: &'a Option<String>, field: &str) -> ApiResult<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing_field(field)),
    }
}

/// 校验请求字段
///
/// 校验顺序: jornadaValue → dataInicio（存在性）→ dataInicio（格式与日历）
pub fn validate_request(request: &GenerateScheduleRequest) -> ApiResult<ValidatedRequest> {
    let pattern_token = required(&request.jornada_value, "jornadaValue")?;
    let raw_date = required(&request.data_inicio, "dataInicio")?;
    let start_date = parse_start_date(raw_date)?;

    Ok(ValidatedRequest {
        pattern_token: pattern_token.to_string(),
        start_date,
    })
}
