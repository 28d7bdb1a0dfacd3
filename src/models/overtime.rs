use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum OvertimeStatus {
    Pending,
    Approved,
    Rejected,
}

impl OvertimeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OvertimeStatus::Pending => "Pending",
            OvertimeStatus::Approved => "Approved",
            OvertimeStatus::Rejected => "Rejected",
        }
    }
}

/// A worker's request to have overtime minutes on an entry approved for pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeRequest {
    pub id: String,
    pub entry_id: String,
    pub user_id: String,
    pub requested_minutes: i64,
    pub reason: Option<String>,
    pub status: OvertimeStatus,
    pub created_at: DateTime<Utc>,
}

impl OvertimeRequest {
    pub fn new(
        entry_id: impl Into<String>,
        user_id: impl Into<String>,
        requested_minutes: i64,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            entry_id: entry_id.into(),
            user_id: user_id.into(),
            requested_minutes,
            reason,
            status: OvertimeStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
