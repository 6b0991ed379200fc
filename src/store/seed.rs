use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{CallDirection, CallLog, CallPriority, CallStatus};

/// Example calls shown on first launch so the dashboard is not empty.
/// Only used when the loaded collection has no calls at all.
pub fn example_calls(now: DateTime<Utc>) -> Vec<CallLog> {
    vec![
        CallLog {
            id: Uuid::new_v4().to_string(),
            contact_name: "Priya Sharma".to_string(),
            phone_number: "+91 98765 43210".to_string(),
            direction: CallDirection::Incoming,
            status: CallStatus::InProgress,
            priority: CallPriority::High,
            created_at: now - Duration::hours(5),
            scheduled_at: Some(now + Duration::hours(24)),
            duration_minutes: Some(12),
            tags: vec!["sales".to_string(), "demo".to_string()],
            notes: "Discussed product demo. Needs follow-up deck.".to_string(),
            follow_up_action: Some("Send product deck and pricing breakdown".to_string()),
        },
        CallLog {
            id: Uuid::new_v4().to_string(),
            contact_name: "Rahul Gupta".to_string(),
            phone_number: "+91 91234 56789".to_string(),
            direction: CallDirection::Outgoing,
            status: CallStatus::Scheduled,
            priority: CallPriority::Medium,
            created_at: now - Duration::hours(48),
            scheduled_at: Some(now + Duration::hours(6)),
            duration_minutes: None,
            tags: vec!["support".to_string()],
            notes: "Follow-up on support ticket #4829".to_string(),
            follow_up_action: Some("Prepare resolution summary".to_string()),
        },
        CallLog {
            id: Uuid::new_v4().to_string(),
            contact_name: "Neha Verma".to_string(),
            phone_number: "+91 90123 45678".to_string(),
            direction: CallDirection::Incoming,
            status: CallStatus::Completed,
            priority: CallPriority::Low,
            created_at: now - Duration::hours(72),
            scheduled_at: None,
            duration_minutes: Some(22),
            tags: vec!["vip".to_string()],
            notes: "Closed annual renewal. Happy with new features.".to_string(),
            follow_up_action: Some("Schedule QBR in 3 months".to_string()),
        },
    ]
}
