// ==========================================
// 照护机构排班系统 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use chrono::NaiveDate;
use thiserror::Error;

/// 排班引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 不符合 YYYY-MM-DD 形状
    #[error("日期格式错误（应为YYYY-MM-DD）: {0}")]
    InvalidDateFormat(String),

    /// 形状正确但日历上不存在（如 2024-02-30、13 月）
    #[error("日期不存在: {0}")]
    InvalidCalendarDate(String),

    #[error("日期区间无效: from={from} > to={to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    /// 仅在 Reject 策略下出现
    #[error("未识别的班次模式: {0}")]
    UnknownPattern(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
