// ==========================================
// 照护机构排班系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎错误为用户可读的错误消息
// 消息: 错误只保存结构化数据，按请求方语言渲染（Display 使用默认葡语）
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

use crate::engine::error::EngineError;
use crate::i18n::{t_with_args, DEFAULT_LOCALE};

// ==========================================
// InputProblem - 输入问题明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputProblem {
    /// 缺失或为空白的字段
    MissingField(String),
    /// 不符合 YYYY-MM-DD 形状
    DateFormat(String),
    /// 日历上不存在的日期
    CalendarDate(String),
    /// 请求体无法解析
    MalformedBody(String),
    InvalidRange { from: NaiveDate, to: NaiveDate },
}

impl InputProblem {
    /// 渲染明细消息
    pub fn detail(&self, locale: &str) -> String {
        match self {
            InputProblem::MissingField(field) => {
                t_with_args(locale, "validation.missing_field", &[("field", field)])
            }
            InputProblem::DateFormat(value) => {
                t_with_args(locale, "validation.date_format", &[("value", value)])
            }
            InputProblem::CalendarDate(value) => {
                t_with_args(locale, "validation.date_invalid", &[("value", value)])
            }
            InputProblem::MalformedBody(detail) => {
                t_with_args(locale, "validation.malformed_body", &[("detail", detail)])
            }
            InputProblem::InvalidRange { from, to } => t_with_args(
                locale,
                "validation.invalid_range",
                &[("from", &from.to_string()), ("to", &to.to_string())],
            ),
        }
    }
}

fn invalid_input_message(locale: &str, problem: &InputProblem) -> String {
    t_with_args(
        locale,
        "error.invalid_input",
        &[("detail", &problem.detail(locale))],
    )
}

fn method_not_allowed_message(locale: &str, method: &str) -> String {
    t_with_args(locale, "error.method_not_allowed", &[("method", method)])
}

fn unknown_pattern_message(locale: &str, pattern: &str) -> String {
    t_with_args(locale, "error.unknown_pattern", &[("pattern", pattern)])
}

/// API层错误类型
///
/// 所有变体均为调用方输入问题（HTTP 400）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 缺失/为空的字段、格式错误的日期、无法解析的请求体
    #[error("{}", invalid_input_message(DEFAULT_LOCALE, .0))]
    InvalidInput(InputProblem),

    /// 非 POST 请求
    #[error("{}", method_not_allowed_message(DEFAULT_LOCALE, .method))]
    MethodNotAllowed { method: String },

    /// 未识别的班次模式（仅 Reject 策略）
    #[error("{}", unknown_pattern_message(DEFAULT_LOCALE, .0))]
    UnknownPattern(String),
}

impl ApiError {
    /// 稳定的错误代码（日志与监控使用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::UnknownPattern(_) => "UNKNOWN_PATTERN",
        }
    }

    /// 按指定语言渲染错误消息
    pub fn message(&self, locale: &str) -> String {
        match self {
            ApiError::InvalidInput(problem) => invalid_input_message(locale, problem),
            ApiError::MethodNotAllowed { method } => method_not_allowed_message(locale, method),
            ApiError::UnknownPattern(pattern) => unknown_pattern_message(locale, pattern),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        ApiError::InvalidInput(InputProblem::MissingField(field.to_string()))
    }

    pub fn malformed_body(detail: &str) -> Self {
        ApiError::InvalidInput(InputProblem::MalformedBody(detail.to_string()))
    }
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidDateFormat(value) => {
                ApiError::InvalidInput(InputProblem::DateFormat(value))
            }
            EngineError::InvalidCalendarDate(value) => {
                ApiError::InvalidInput(InputProblem::CalendarDate(value))
            }
            EngineError::InvalidRange { from, to } => {
                ApiError::InvalidInput(InputProblem::InvalidRange { from, to })
            }
            EngineError::UnknownPattern(pattern) => ApiError::UnknownPattern(pattern),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_conversion() {
        let api_err: ApiError = EngineError::InvalidDateFormat("2024/01/01".to_string()).into();
        assert_eq!(api_err.code(), "INVALID_INPUT");
        assert_eq!(
            api_err,
            ApiError::InvalidInput(InputProblem::DateFormat("2024/01/01".to_string()))
        );

        let api_err: ApiError = EngineError::UnknownPattern("8x8".to_string()).into();
        match api_err {
            ApiError::UnknownPattern(p) => assert_eq!(p, "8x8"),
            other => panic!("Expected UnknownPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_messages_follow_requested_locale() {
        let err = ApiError::missing_field("dataInicio");
        assert_eq!(
            err.message("pt-BR"),
            "Entrada inválida: campo obrigatório ausente: dataInicio"
        );
        assert_eq!(
            err.message("en"),
            "Invalid input: missing required field: dataInicio"
        );

        let err = ApiError::MethodNotAllowed {
            method: "GET".to_string(),
        };
        assert_eq!(err.message("en"), "Method not allowed: GET");
        assert_eq!(err.message("pt-BR"), "Método não permitido: GET");
    }

    #[test]
    fn test_display_uses_default_locale() {
        let err: ApiError = EngineError::InvalidCalendarDate("2024-02-30".to_string()).into();
        assert_eq!(err.to_string(), err.message(DEFAULT_LOCALE));
        assert!(err.to_string().contains("data inexistente no calendário: 2024-02-30"));
    }

    #[test]
    fn test_range_detail_lists_both_dates() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let err: ApiError = EngineError::InvalidRange { from, to }.into();
        assert_eq!(
            err.message("en"),
            "Invalid input: invalid date range: 2024-03-10 > 2024-03-01"
        );
    }
}
