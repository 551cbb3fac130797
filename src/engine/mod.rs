// ==========================================
// 照护机构排班系统 - 引擎层
// ==========================================
// 职责: 日历算术与班次模式展开
// 红线: Engine 无状态、无 I/O,同输入必得同输出
// ==========================================

pub mod calendar;
pub mod error;
pub mod shift_pattern;

// 重导出核心引擎
pub use calendar::{days_in_month, parse_start_date};
pub use error::{EngineError, EngineResult};
pub use shift_pattern::{hours_on, ShiftPatternExpander};
