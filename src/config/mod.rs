// ==========================================
// 照护机构排班系统 - 配置层
// ==========================================
// 职责: 服务配置加载（默认值 / JSON 文件 / 环境变量）
// ==========================================

pub mod server_config;

// 重导出核心配置
pub use server_config::{env_keys, ConfigError, LogFormat, ServerConfig};
