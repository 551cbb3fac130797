// ==========================================
// 照护机构排班系统 - 班次模式展开引擎
// ==========================================
// 职责: 班次模式 + 起始日期 → 起始日期所在自然月的逐日排班
// 红线: 纯函数,不做 I/O,不依赖当前时间
// ==========================================
// 起始日期两个用途:
// 1. 选定年/月（结果总是从当月 1 日到月末）
// 2. 周期类模式的第 0 天锚点（月内早于锚点的日期偏移为负）
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::schedule::{DayRecord, ScheduleMonth};
use crate::domain::types::{ShiftPatternId, ShiftRule, UnknownPatternPolicy};
use crate::engine::calendar::{
    cycle_position, elapsed_days, first_day_of_month, last_day_of_month, parse_start_date,
};
use crate::engine::error::{EngineError, EngineResult};

/// 单日工时（0 表示休息）
///
/// anchor 仅对周期类规则有意义
pub fn hours_on(rule: ShiftRule, anchor: NaiveDate, date: NaiveDate) -> u32 {
    match rule {
        ShiftRule::Weekly {
            weekday_hours,
            saturday_hours,
        } => match date.weekday() {
            Weekday::Sun => 0,
            Weekday::Sat => saturday_hours,
            _ => weekday_hours,
        },
        ShiftRule::Cycle {
            period,
            work_days,
            hours,
        } => {
            let position = cycle_position(elapsed_days(anchor, date), period);
            if position < work_days {
                hours
            } else {
                0
            }
        }
    }
}

/// ShiftPatternExpander - 班次模式展开引擎
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftPatternExpander {
    unknown_policy: UnknownPatternPolicy,
}

impl ShiftPatternExpander {
    pub fn new(unknown_policy: UnknownPatternPolicy) -> Self {
        Self { unknown_policy }
    }

    pub fn unknown_policy(&self) -> UnknownPatternPolicy {
        self.unknown_policy
    }

    /// 解析班次令牌
    ///
    /// # 返回
    /// - Ok(Some(pattern)): 已识别
    /// - Ok(None): 未识别且策略为整月休息
    /// - Err(UnknownPattern): 未识别且策略为拒绝
    pub fn resolve_pattern(&self, token: &str) -> EngineResult<Option<ShiftPatternId>> {
        match ShiftPatternId::from_token(token) {
            Some(pattern) => Ok(Some(pattern)),
            None => match self.unknown_policy {
                UnknownPatternPolicy::RestFallback => {
                    tracing::warn!(pattern = %token, "未识别的班次模式，按整月休息处理");
                    Ok(None)
                }
                UnknownPatternPolicy::Reject => {
                    Err(EngineError::UnknownPattern(token.to_string()))
                }
            },
        }
    }

    /// 展开起始日期所在自然月
    pub fn expand(&self, token: &str, start_date: NaiveDate) -> EngineResult<ScheduleMonth> {
        let pattern = self.resolve_pattern(token)?;
        let days = self.expand_range(
            pattern,
            start_date,
            first_day_of_month(start_date),
            last_day_of_month(start_date),
        )?;

        tracing::debug!(
            pattern = %token,
            year = start_date.year(),
            month = start_date.month(),
            rows = days.len(),
            "月度排班展开完成"
        );

        Ok(ScheduleMonth {
            year: start_date.year(),
            month: start_date.month(),
            days,
        })
    }

    /// 以原始字符串起始日期展开（先做格式与日历校验）
    pub fn expand_str(&self, token: &str, start_date: &str) -> EngineResult<ScheduleMonth> {
        let start = parse_start_date(start_date)?;
        self.expand(token, start)
    }

    /// 展开任意闭区间 [from, to]
    ///
    /// pattern 为 None 时全部为休息日
    pub fn expand_range(
        &self,
        pattern: Option<ShiftPatternId>,
        anchor: NaiveDate,
        from: NaiveDate,
        to: NaiveDate,
    ) -> EngineResult<Vec<DayRecord>> {
        if from > to {
            return Err(EngineError::InvalidRange { from, to });
        }

        let rule = pattern.map(|p| p.rule());
        let days = from
            .iter_days()
            .take_while(|date| *date <= to)
            .map(|date| match rule {
                Some(rule) => DayRecord::from_hours(date, hours_on(rule, anchor, date)),
                None => DayRecord::rest(date),
            })
            .collect();

        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::DayStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_weekly_44h_saturday_half_day() {
        let rule = ShiftPatternId::Weekly44h.rule();
        let anchor = d(2024, 3, 1);
        assert_eq!(hours_on(rule, anchor, d(2024, 3, 4)), 8); // 周一
        assert_eq!(hours_on(rule, anchor, d(2024, 3, 2)), 4); // 周六
        assert_eq!(hours_on(rule, anchor, d(2024, 3, 3)), 0); // 周日
    }

    #[test]
    fn test_cycle_before_anchor_uses_euclidean_position() {
        let rule = ShiftPatternId::Cycle5x2.rule();
        let anchor = d(2024, 1, 15);
        // elapsed=-1 → 位置 6 → 休息
        assert_eq!(hours_on(rule, anchor, d(2024, 1, 14)), 0);
        // elapsed=-2 → 位置 5 → 休息
        assert_eq!(hours_on(rule, anchor, d(2024, 1, 13)), 0);
        // elapsed=-3 → 位置 4 → 出勤
        assert_eq!(hours_on(rule, anchor, d(2024, 1, 12)), 8);
    }

    #[test]
    fn test_expand_range_rejects_inverted_range() {
        let expander = ShiftPatternExpander::default();
        let err = expander
            .expand_range(None, d(2024, 1, 1), d(2024, 1, 10), d(2024, 1, 9))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRange { .. }));
    }

    #[test]
    fn test_expand_range_single_day() {
        let expander = ShiftPatternExpander::default();
        let days = expander
            .expand_range(
                Some(ShiftPatternId::Rotation12x36),
                d(2024, 1, 1),
                d(2024, 1, 3),
                d(2024, 1, 3),
            )
            .unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].status, DayStatus::Work);
        assert_eq!(days[0].hours, 12);
    }

    #[test]
    fn test_reject_policy_errors_on_unknown_pattern() {
        let expander = ShiftPatternExpander::new(UnknownPatternPolicy::Reject);
        let err = expander.expand("8x8", d(2024, 6, 1)).unwrap_err();
        assert_eq!(err, EngineError::UnknownPattern("8x8".to_string()));
    }
}
