//! Derived call statistics for the dashboard overview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CallLog, CallStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub new: usize,
    pub in_progress: usize,
    pub scheduled: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallStats {
    pub total: usize,
    pub by_status: StatusBreakdown,
    /// Follow-ups whose scheduled time has already passed.
    pub overdue_follow_ups: usize,
    /// Follow-ups scheduled at or after `now`.
    pub upcoming_follow_ups: usize,
    /// Follow-ups scheduled within 24 hours of the call being logged.
    pub fast_follow_ups: usize,
    pub total_duration_minutes: u64,
    /// Mean over all calls (not just those with a noted duration), rounded.
    pub average_duration_minutes: u32,
}

pub fn compute(calls: &[CallLog], now: DateTime<Utc>) -> CallStats {
    let mut stats = CallStats {
        total: calls.len(),
        ..CallStats::default()
    };

    for call in calls {
        match call.status {
            CallStatus::New => stats.by_status.new += 1,
            CallStatus::InProgress => stats.by_status.in_progress += 1,
            CallStatus::Scheduled => stats.by_status.scheduled += 1,
            CallStatus::Completed => stats.by_status.completed += 1,
        }

        if let Some(scheduled_at) = call.scheduled_at {
            if now > scheduled_at {
                stats.overdue_follow_ups += 1;
            } else {
                stats.upcoming_follow_ups += 1;
            }
            if (scheduled_at - call.created_at).num_hours() <= 24 {
                stats.fast_follow_ups += 1;
            }
        }

        if let Some(minutes) = call.duration_minutes {
            stats.total_duration_minutes += u64::from(minutes);
        }
    }

    if stats.total > 0 && stats.total_duration_minutes > 0 {
        let average = stats.total_duration_minutes as f64 / stats.total as f64;
        stats.average_duration_minutes = average.round() as u32;
    }

    stats
}
