// ==========================================
// 照护机构排班系统 - 领域模型层
// ==========================================
// 职责: 定义排班实体与类型
// 红线: 不含 HTTP 逻辑,不含引擎逻辑
// ==========================================

pub mod schedule;
pub mod types;

// 重导出核心类型
pub use schedule::{is_weekend, DayRecord, ScheduleMonth, ScheduleSummary};
pub use types::{DayStatus, ShiftPatternId, ShiftRule, UnknownPatternPolicy};
