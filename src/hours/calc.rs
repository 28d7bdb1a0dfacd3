use anyhow::Result;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::range::TimeRange;

/// Default daily threshold separating regular from overtime minutes (8 hours).
/// Applies whenever no per-project cap is supplied.
pub const DEFAULT_DAILY_CAP_MINUTES: i64 = 480;

/// Minute delta between two times-of-day: `(end_h*60 + end_m) - (start_h*60 + start_m)`.
/// Negative when `end` precedes `start`; overnight ranges are not normalized
/// here, callers decide what a negative delta means.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_total = i64::from(start.hour()) * 60 + i64::from(start.minute());
    let end_total = i64::from(end.hour()) * 60 + i64::from(end.minute());
    end_total - start_total
}

/// Render an absolute minute count as `"{H}h"` on exact hours, otherwise
/// `"{H}h {M}m"`. Zero renders as `"0h"`. The sign is dropped; callers pick
/// the direction word.
pub fn format_delta(minutes: i64) -> String {
    let total = minutes.abs();
    let hours = total / 60;
    let mins = total % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}m")
    }
}

/// Worked-versus-scheduled label: `"Mismo tiempo"` on an exact match,
/// otherwise the absolute difference suffixed with `"más"` (actual exceeds
/// scheduled) or `"menos"`.
pub fn compare_ranges(actual: &TimeRange, scheduled: &TimeRange) -> String {
    let difference = actual.minutes() - scheduled.minutes();
    if difference == 0 {
        "Mismo tiempo".to_string()
    } else if difference > 0 {
        format!("{} más", format_delta(difference))
    } else {
        format!("{} menos", format_delta(difference))
    }
}

/// [`compare_ranges`] for callers still holding raw `HH:MM` picker values.
pub fn compare_ranges_hhmm(
    actual_start: &str,
    actual_end: &str,
    scheduled_start: &str,
    scheduled_end: &str,
) -> Result<String> {
    let actual = TimeRange::parse(actual_start, actual_end)?;
    let scheduled = TimeRange::parse(scheduled_start, scheduled_end)?;
    Ok(compare_ranges(&actual, &scheduled))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HourSplit {
    pub normal: i64,
    pub overtime: i64,
}

/// Split a worked total into regular and overtime minutes against a daily
/// cap: `normal = min(total, cap)`, `overtime = max(0, total - cap)`.
pub fn split_normal_and_overtime(total_minutes: i64, daily_cap_minutes: Option<i64>) -> HourSplit {
    let cap = daily_cap_minutes.unwrap_or(DEFAULT_DAILY_CAP_MINUTES);
    HourSplit {
        normal: total_minutes.min(cap),
        overtime: (total_minutes - cap).max(0),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkedSummary {
    pub worked_minutes: i64,
    /// Label against the scheduled range; `None` when no schedule applies.
    pub delta_label: Option<String>,
    pub split: HourSplit,
}

/// Display-oriented roll-up for one worked range: total minutes, the delta
/// label against the scheduled range when one exists, and the
/// normal/overtime split.
pub fn summarize(
    actual: &TimeRange,
    scheduled: Option<&TimeRange>,
    daily_cap_minutes: Option<i64>,
) -> WorkedSummary {
    let worked_minutes = actual.minutes();
    WorkedSummary {
        worked_minutes,
        delta_label: scheduled.map(|range| compare_ranges(actual, range)),
        split: split_normal_and_overtime(worked_minutes, daily_cap_minutes),
    }
}
