use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder contact name for calls logged without one.
pub const UNKNOWN_CALLER: &str = "Unknown caller";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallDirection {
    Incoming,
    Outgoing,
    Missed,
}

impl CallDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallDirection::Incoming => "incoming",
            CallDirection::Outgoing => "outgoing",
            CallDirection::Missed => "missed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    New,
    InProgress,
    Scheduled,
    Completed,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::New => "new",
            CallStatus::InProgress => "in-progress",
            CallStatus::Scheduled => "scheduled",
            CallStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallPriority {
    High,
    Medium,
    Low,
}

impl CallPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallPriority::High => "high",
            CallPriority::Medium => "medium",
            CallPriority::Low => "low",
        }
    }
}

/// One recorded or planned phone interaction.
///
/// `id` and `created_at` are stamped by the store when the call is logged and
/// never change afterwards. Tags are kept in the order they were entered; the
/// store does not deduplicate tags within a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLog {
    pub id: String,
    pub contact_name: String,
    pub phone_number: String,
    pub direction: CallDirection,
    pub status: CallStatus,
    pub priority: CallPriority,
    pub created_at: DateTime<Utc>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub tags: Vec<String>,
    pub notes: String,
    pub follow_up_action: Option<String>,
}

/// Payload for logging a call: a [`CallLog`] minus the store-stamped fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCall {
    pub contact_name: String,
    pub phone_number: String,
    pub direction: CallDirection,
    pub status: CallStatus,
    pub priority: CallPriority,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
    pub tags: Vec<String>,
    pub notes: String,
    pub follow_up_action: Option<String>,
}

impl NewCall {
    /// Applies the defaults a call entry form would otherwise have to: a blank
    /// contact name becomes [`UNKNOWN_CALLER`] and blank follow-up text is
    /// treated as absent. The store itself never validates payloads.
    pub fn normalized(mut self) -> Self {
        if self.contact_name.trim().is_empty() {
            self.contact_name = UNKNOWN_CALLER.to_string();
        }
        self.follow_up_action = self
            .follow_up_action
            .filter(|action| !action.trim().is_empty());
        self
    }

    pub(crate) fn into_call(self, id: String, created_at: DateTime<Utc>) -> CallLog {
        CallLog {
            id,
            contact_name: self.contact_name,
            phone_number: self.phone_number,
            direction: self.direction,
            status: self.status,
            priority: self.priority,
            created_at,
            scheduled_at: self.scheduled_at,
            duration_minutes: self.duration_minutes,
            tags: self.tags,
            notes: self.notes,
            follow_up_action: self.follow_up_action,
        }
    }
}

/// Splits a comma-separated tag line into trimmed, non-empty tags.
pub fn parse_tag_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
