use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hours::range::{hhmm, hhmm_opt};
use crate::hours::TimeRange;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum EntryStatus {
    Open,
    Submitted,
    Approved,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Open => "Open",
            EntryStatus::Submitted => "Submitted",
            EntryStatus::Approved => "Approved",
        }
    }
}

/// One worker clock-in/out record. `end_time` stays `None` while the worker
/// is still clocked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(default, with = "hhmm_opt")]
    pub end_time: Option<NaiveTime>,
    pub activity: Option<String>,
    /// PNG data URI produced by the signature capture surface.
    pub signature_data: Option<String>,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeEntry {
    /// Open a fresh entry for a worker clocking in.
    pub fn clock_in(
        user_id: impl Into<String>,
        project_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            project_id: project_id.into(),
            date,
            start_time,
            end_time: None,
            activity: None,
            signature_data: None,
            status: EntryStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    /// Close the entry at `end_time`.
    pub fn clock_out(&mut self, end_time: NaiveTime) {
        self.end_time = Some(end_time);
        self.updated_at = Utc::now();
    }

    /// The worked range; `None` while the entry is still open.
    pub fn range(&self) -> Option<TimeRange> {
        self.end_time
            .map(|end| TimeRange::new(self.start_time, end))
    }

    /// Worked minutes for a closed entry; `None` while still clocked in.
    pub fn worked_minutes(&self) -> Option<i64> {
        self.range().map(|range| range.minutes())
    }
}
