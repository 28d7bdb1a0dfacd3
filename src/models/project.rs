use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hours::TimeRange;

/// Scheduled working range per weekday; `None` marks a day off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    pub monday: Option<TimeRange>,
    pub tuesday: Option<TimeRange>,
    pub wednesday: Option<TimeRange>,
    pub thursday: Option<TimeRange>,
    pub friday: Option<TimeRange>,
    pub saturday: Option<TimeRange>,
    pub sunday: Option<TimeRange>,
}

impl WeekSchedule {
    /// Same range Monday through Friday, weekends off.
    pub fn weekdays(range: TimeRange) -> Self {
        Self {
            monday: Some(range),
            tuesday: Some(range),
            wednesday: Some(range),
            thursday: Some(range),
            friday: Some(range),
            saturday: None,
            sunday: None,
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<&TimeRange> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Scheduled minutes for `weekday`; `None` on days off.
    pub fn scheduled_minutes(&self, weekday: Weekday) -> Option<i64> {
        self.for_weekday(weekday).map(|range| range.minutes())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Per-project override of the daily regular-hours cap in minutes;
    /// `None` falls back to the 480-minute default.
    pub daily_cap_minutes: Option<i64>,
    pub schedule: WeekSchedule,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>, schedule: WeekSchedule) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            daily_cap_minutes: None,
            schedule,
            created_at: now,
            updated_at: now,
        }
    }
}
