// ==========================================
// 照护机构排班系统 - 月度排班实体
// ==========================================
// 职责: 日排班记录、月度排班、月度汇总
// 红线: hours > 0 ⇔ status == Work（由构造函数保证）
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::types::DayStatus;

/// 日排班记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub hours: u32,
    pub is_weekend: bool,
    pub is_business_day: bool,
}

impl DayRecord {
    /// 按当日工时构造记录
    ///
    /// 出勤状态由工时推导，周末标志只取决于星期；
    /// 工作日（dia útil）= 出勤 且 非周末
    pub fn from_hours(date: NaiveDate, hours: u32) -> Self {
        let is_weekend = is_weekend(date);
        let status = if hours > 0 {
            DayStatus::Work
        } else {
            DayStatus::Rest
        };

        Self {
            date,
            status,
            hours,
            is_weekend,
            is_business_day: status == DayStatus::Work && !is_weekend,
        }
    }

    /// 休息日记录
    pub fn rest(date: NaiveDate) -> Self {
        Self::from_hours(date, 0)
    }

    pub fn is_work(&self) -> bool {
        self.status == DayStatus::Work
    }
}

/// 周六或周日
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// ==========================================
// ScheduleMonth - 月度排班
// ==========================================

/// 月度排班：自当月 1 日起按日期升序，每天一条
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMonth {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayRecord>,
}

impl ScheduleMonth {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.days.iter()
    }

    /// 按日期查找记录
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn into_days(self) -> Vec<DayRecord> {
        self.days
    }

    /// 计算月度汇总
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_days(&self.days)
    }
}

impl<'a> IntoIterator for &'a ScheduleMonth {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

// ==========================================
// ScheduleSummary - 月度汇总
// ==========================================

/// 月度汇总（前端排班卡片使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// 出勤天数
    pub work_days: u32,
    /// 休息天数
    pub rest_days: u32,
    /// 工作日（出勤且非周末）天数
    pub business_days: u32,
    /// 周末出勤天数
    pub weekend_work_days: u32,
    /// 总工时
    pub total_hours: u32,
}

impl ScheduleSummary {
    pub fn from_days(days: &[DayRecord]) -> Self {
        days.iter().fold(Self::default(), |mut acc, day| {
            if day.is_work() {
                acc.work_days += 1;
                acc.total_hours += day.hours;
                if day.is_weekend {
                    acc.weekend_work_days += 1;
                }
            } else {
                acc.rest_days += 1;
            }
            if day.is_business_day {
                acc.business_days += 1;
            }
            acc
        })
    }
}
