// ==========================================
// 照护机构排班系统 - 日历算术
// ==========================================
// 职责: 起始日期解析、月份边界、锚点偏移、周期位置
// 约定: 周期位置使用欧几里得取模（负偏移向前连续延伸）
// ==========================================

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

use crate::engine::error::{EngineError, EngineResult};

fn date_shape() -> &'static Regex {
    static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();
    DATE_SHAPE.get_or_init(|| {
        // 字面量模式，编译不会失败
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape regex")
    })
}

/// 解析起始日期
///
/// 两步校验：
/// 1. 形状: 4 位数字-2 位数字-2 位数字
/// 2. 日历有效性: 不存在的日期（2024-02-30、月份 13）直接拒绝，不做滚动
pub fn parse_start_date(raw: &str) -> EngineResult<NaiveDate> {
    if !date_shape().is_match(raw) {
        return Err(EngineError::InvalidDateFormat(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidCalendarDate(raw.to_string()))
}

/// 当月第一天
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// 当月最后一天
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// 当月天数
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => last_day_of_month(first).day(),
        None => 0,
    }
}

/// 从锚点到目标日期的有符号整天数
pub fn elapsed_days(anchor: NaiveDate, date: NaiveDate) -> i64 {
    (date - anchor).num_days()
}

/// 周期内位置，结果恒在 [0, period)
///
/// 例: elapsed=-1, period=3 → 2
pub fn cycle_position(elapsed: i64, period: i64) -> i64 {
    elapsed.rem_euclid(period)
}
