// ==========================================
// 照护机构排班系统 - 核心库
// ==========================================
// 技术栈: Rust + axum + tokio
// 系统定位: 班次模式月度排班生成（纯计算,无持久化）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 日历算术与班次展开
pub mod engine;

// 配置层 - 服务配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DayRecord, DayStatus, ScheduleMonth, ScheduleSummary, ShiftPatternId, UnknownPatternPolicy,
};

// 引擎
pub use engine::{EngineError, ShiftPatternExpander};

// API
pub use api::{ApiError, ScheduleApi};

// 应用
pub use app::{router, AppState};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "shift-roster";
