// ==========================================
// 照护机构排班系统 - 应用层
// ==========================================
// 职责: HTTP 集成,连接前端与后端
// ==========================================

pub mod http_routes;
pub mod state;

// 重导出
pub use http_routes::router;
pub use state::AppState;
