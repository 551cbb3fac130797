// ==========================================
// 照护机构排班系统 - 排班生成 API
// ==========================================
// 职责: 请求校验 → 班次展开 → 响应 DTO
// 字段名: 与前端约定的葡语字段一致
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::api::validator::{validate_request, GenerateScheduleRequest};
use crate::domain::schedule::{DayRecord, ScheduleMonth, ScheduleSummary};
use crate::domain::types::{DayStatus, ShiftPatternId};
use crate::engine::ShiftPatternExpander;

// ==========================================
// ScheduleApi - 排班生成 API
// ==========================================

/// 排班生成API
///
/// 职责：
/// 1. 月度排班生成
/// 2. 月度汇总
/// 3. 班次模式目录
pub struct ScheduleApi {
    expander: ShiftPatternExpander,
}

impl ScheduleApi {
    /// 创建新的ScheduleApi实例
    pub fn new(expander: ShiftPatternExpander) -> Self {
        Self { expander }
    }

    fn expand(&self, request: &GenerateScheduleRequest) -> ApiResult<ScheduleMonth> {
        let validated = validate_request(request)?;
        let month = self
            .expander
            .expand(&validated.pattern_token, validated.start_date)?;
        Ok(month)
    }

    /// 生成起始日期所在月的逐日排班
    ///
    /// # 返回
    /// - Ok(Vec<ScheduleDayInfo>): 自当月 1 日起，每天一条
    /// - Err(ApiError::InvalidInput): 字段缺失或日期非法
    /// - Err(ApiError::UnknownPattern): 未识别模式且策略为拒绝
    pub fn generate_schedule(
        &self,
        request: &GenerateScheduleRequest,
    ) -> ApiResult<Vec<ScheduleDayInfo>> {
        let month = self.expand(request)?;
        Ok(month.iter().map(ScheduleDayInfo::from).collect())
    }

    /// 生成月度汇总（请求与校验规则同 generate_schedule）
    pub fn summarize_schedule(
        &self,
        request: &GenerateScheduleRequest,
    ) -> ApiResult<ScheduleSummaryInfo> {
        let month = self.expand(request)?;
        Ok(ScheduleSummaryInfo::new(&month, month.summary()))
    }

    /// 班次模式目录
    pub fn list_patterns(&self) -> Vec<PatternCatalogEntry> {
        ShiftPatternId::ALL
            .iter()
            .map(|p| PatternCatalogEntry {
                value: p.as_str().to_string(),
                label: p.label().to_string(),
                horas_semanais: p.nominal_weekly_hours(),
                tipo: p.rule().kind().to_string(),
            })
            .collect()
    }
}

// ==========================================
// DTO 类型定义
// ==========================================

/// 日排班（响应）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDayInfo {
    pub data: String,
    pub status: DayStatus,
    pub horas: u32,
    pub fim_de_semana: bool,
    pub dia_util: bool,
}

impl From<&DayRecord> for ScheduleDayInfo {
    fn from(day: &DayRecord) -> Self {
        Self {
            data: day.date.format("%Y-%m-%d").to_string(),
            status: day.status,
            horas: day.hours,
            fim_de_semana: day.is_weekend,
            dia_util: day.is_business_day,
        }
    }
}

/// 月度汇总（响应）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummaryInfo {
    /// YYYY-MM
    pub mes: String,
    pub dias_no_mes: u32,
    pub dias_trabalho: u32,
    pub dias_folga: u32,
    pub dias_uteis: u32,
    pub fins_de_semana_trabalhados: u32,
    pub horas_totais: u32,
}

impl ScheduleSummaryInfo {
    fn new(month: &ScheduleMonth, summary: ScheduleSummary) -> Self {
        Self {
            mes: format!("{:04}-{:02}", month.year, month.month),
            dias_no_mes: month.len() as u32,
            dias_trabalho: summary.work_days,
            dias_folga: summary.rest_days,
            dias_uteis: summary.business_days,
            fins_de_semana_trabalhados: summary.weekend_work_days,
            horas_totais: summary.total_hours,
        }
    }
}

/// 班次模式目录项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCatalogEntry {
    pub value: String,
    pub label: String,
    pub horas_semanais: f64,
    pub tipo: String,
}
