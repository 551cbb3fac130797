// ==========================================
// 照护机构排班系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 由配置显式构造后注入路由，不使用进程级单例
// ==========================================

use std::sync::Arc;

use crate::api::ScheduleApi;
use crate::config::ServerConfig;
use crate::engine::ShiftPatternExpander;

/// 应用状态
///
/// 在 HTTP 路由中以 Arc 共享，构造后只读
pub struct AppState {
    /// 服务配置
    pub config: ServerConfig,

    /// 排班生成API
    pub schedule_api: Arc<ScheduleApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 按配置的未识别模式策略创建展开引擎
    /// 2. 创建API实例
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!(
            function_path = %config.function_path,
            unknown_pattern_policy = %config.unknown_pattern_policy,
            "初始化AppState"
        );

        let expander = ShiftPatternExpander::new(config.unknown_pattern_policy);
        let schedule_api = Arc::new(ScheduleApi::new(expander));

        Self {
            config,
            schedule_api,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
