// ==========================================
// 照护机构排班系统 - 领域类型定义
// ==========================================
// 职责: 班次模式标识、出勤状态、班次规则
// 序列化格式: 与前端/数据库取值一致（葡语令牌）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次模式 (Shift Pattern)
// ==========================================
// 封闭集合: 未识别的令牌不映射到任何变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftPatternId {
    /// 44h: 周一至周五 8h + 周六 4h
    #[serde(rename = "44h_8h_segsex_4h_sab")]
    Weekly44h,
    /// 40h: 周一至周五 8h
    #[serde(rename = "40h_8h_segsex")]
    Weekly40h,
    /// 36h: 周一至周六 6h
    #[serde(rename = "36h_6h_seg_sab")]
    Weekly36h,
    /// 12x36: 工作 12h，休息 36h
    #[serde(rename = "12x36")]
    Rotation12x36,
    /// 24x48: 工作 24h，休息 48h
    #[serde(rename = "24x48")]
    Rotation24x48,
    /// 5x2: 连上 5 天，连休 2 天
    #[serde(rename = "5x2")]
    Cycle5x2,
    /// 6x1: 连上 6 天，休 1 天
    #[serde(rename = "6x1")]
    Cycle6x1,
}

impl ShiftPatternId {
    /// 全部已识别的班次模式（目录顺序）
    pub const ALL: [ShiftPatternId; 7] = [
        ShiftPatternId::Weekly44h,
        ShiftPatternId::Weekly40h,
        ShiftPatternId::Weekly36h,
        ShiftPatternId::Rotation12x36,
        ShiftPatternId::Rotation24x48,
        ShiftPatternId::Cycle5x2,
        ShiftPatternId::Cycle6x1,
    ];

    /// 令牌值（请求中的 jornadaValue）
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftPatternId::Weekly44h => "44h_8h_segsex_4h_sab",
            ShiftPatternId::Weekly40h => "40h_8h_segsex",
            ShiftPatternId::Weekly36h => "36h_6h_seg_sab",
            ShiftPatternId::Rotation12x36 => "12x36",
            ShiftPatternId::Rotation24x48 => "24x48",
            ShiftPatternId::Cycle5x2 => "5x2",
            ShiftPatternId::Cycle6x1 => "6x1",
        }
    }

    /// 按令牌精确匹配（区分大小写）
    ///
    /// 未识别时返回 None，由调用方决定回退策略
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == token)
    }

    /// 前端展示名称
    pub fn label(&self) -> &'static str {
        match self {
            ShiftPatternId::Weekly44h => "44h - 8h seg-sex + 4h sáb",
            ShiftPatternId::Weekly40h => "40h - 8h seg-sex",
            ShiftPatternId::Weekly36h => "36h - 6h seg-sáb",
            ShiftPatternId::Rotation12x36 => "12x36",
            ShiftPatternId::Rotation24x48 => "24x48",
            ShiftPatternId::Cycle5x2 => "5x2",
            ShiftPatternId::Cycle6x1 => "6x1",
        }
    }

    /// 名义周工时（目录展示用；轮班模式按完整周期折算）
    pub fn nominal_weekly_hours(&self) -> f64 {
        match self {
            ShiftPatternId::Weekly44h => 44.0,
            ShiftPatternId::Weekly40h => 40.0,
            ShiftPatternId::Weekly36h => 36.0,
            // 12h / 2 天 * 7
            ShiftPatternId::Rotation12x36 => 42.0,
            // 24h / 3 天 * 7
            ShiftPatternId::Rotation24x48 => 56.0,
            ShiftPatternId::Cycle5x2 => 40.0,
            ShiftPatternId::Cycle6x1 => 48.0,
        }
    }

    /// 该模式的出勤规则
    pub fn rule(&self) -> ShiftRule {
        match self {
            ShiftPatternId::Weekly44h => ShiftRule::Weekly {
                weekday_hours: 8,
                saturday_hours: 4,
            },
            ShiftPatternId::Weekly40h => ShiftRule::Weekly {
                weekday_hours: 8,
                saturday_hours: 0,
            },
            ShiftPatternId::Weekly36h => ShiftRule::Weekly {
                weekday_hours: 6,
                saturday_hours: 6,
            },
            ShiftPatternId::Rotation12x36 => ShiftRule::Cycle {
                period: 2,
                work_days: 1,
                hours: 12,
            },
            ShiftPatternId::Rotation24x48 => ShiftRule::Cycle {
                period: 3,
                work_days: 1,
                hours: 24,
            },
            ShiftPatternId::Cycle5x2 => ShiftRule::Cycle {
                period: 7,
                work_days: 5,
                hours: 8,
            },
            ShiftPatternId::Cycle6x1 => ShiftRule::Cycle {
                period: 7,
                work_days: 6,
                hours: 8,
            },
        }
    }
}

impl fmt::Display for ShiftPatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 班次规则 (Shift Rule)
// ==========================================
// Weekly: 按星期固定；周日恒休
// Cycle: 以锚点日为第 0 天的周期轮转，周期内前 work_days 天出勤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRule {
    Weekly {
        weekday_hours: u32,
        /// 0 表示周六休息
        saturday_hours: u32,
    },
    Cycle {
        period: i64,
        work_days: i64,
        hours: u32,
    },
}

impl ShiftRule {
    /// 规则类型代码（目录展示用）
    pub fn kind(&self) -> &'static str {
        match self {
            ShiftRule::Weekly { .. } => "SEMANAL",
            ShiftRule::Cycle { .. } => "CICLICA",
        }
    }
}

// ==========================================
// 出勤状态 (Day Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    #[serde(rename = "trabalho")]
    Work,
    #[serde(rename = "folga")]
    Rest,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Work => "trabalho",
            DayStatus::Rest => "folga",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 未识别班次模式的处理策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPatternPolicy {
    /// 整月休息（兼容既有前端行为）
    #[default]
    RestFallback,
    /// 直接拒绝请求
    Reject,
}

impl fmt::Display for UnknownPatternPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownPatternPolicy::RestFallback => write!(f, "rest_fallback"),
            UnknownPatternPolicy::Reject => write!(f, "reject"),
        }
    }
}
