use serde::{Deserialize, Serialize};

use super::call::{CallDirection, CallPriority, CallStatus};

/// A single filter field: either pass everything or match one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter<T> {
    All,
    Only(T),
}

// Not derived: the derive would put a `T: Default` bound on the impl.
impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn admits(&self, candidate: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == candidate,
        }
    }
}

/// The session-scoped predicate configuration narrowing the visible call list.
/// Exactly one of these exists at a time; it is persisted alongside the calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CallFilters {
    pub search: String,
    pub status: Filter<CallStatus>,
    pub direction: Filter<CallDirection>,
    pub tag: Filter<String>,
    pub priority: Filter<CallPriority>,
}

/// Partial filter change: `None` fields keep their current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub status: Option<Filter<CallStatus>>,
    pub direction: Option<Filter<CallDirection>>,
    pub tag: Option<Filter<String>>,
    pub priority: Option<Filter<CallPriority>>,
}

impl CallFilters {
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(direction) = update.direction {
            self.direction = direction;
        }
        if let Some(tag) = update.tag {
            self.tag = tag;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
    }
}
