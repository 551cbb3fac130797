// ==========================================
// 照护机构排班系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 处理器调用
// ==========================================

pub mod error;
pub mod schedule_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, InputProblem};
pub use schedule_api::{PatternCatalogEntry, ScheduleApi, ScheduleDayInfo, ScheduleSummaryInfo};
pub use validator::{parse_request_body, validate_request, GenerateScheduleRequest, ValidatedRequest};
