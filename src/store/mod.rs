//! The call store: a reducer-driven state container owning the call collection
//! and the active filter set.
//!
//! Every mutation goes through [`CallStore::dispatch`] with a tagged [`Action`],
//! runs to completion, and then writes the full snapshot back to disk. Reads go
//! through the derived views ([`CallStore::filtered_calls`],
//! [`CallStore::active_tags`], [`CallStore::stats`]), which never mutate state.

mod seed;

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    models::{CallFilters, CallLog, CallStatus, Filter, FilterUpdate, NewCall},
    stats::{self, CallStats},
    storage::SnapshotStore,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub calls: Vec<CallLog>,
    pub filters: CallFilters,
}

/// One discrete state transition. Actions referencing a call id that does not
/// exist are silent no-ops, matching how the dashboard has always behaved.
#[derive(Debug, Clone)]
pub enum Action {
    AddCall(NewCall),
    UpdateStatus {
        id: String,
        status: CallStatus,
    },
    UpdateNotes {
        id: String,
        notes: String,
        follow_up_action: Option<String>,
    },
    Reschedule {
        id: String,
        scheduled_at: Option<DateTime<Utc>>,
    },
    SetFilters(FilterUpdate),
}

fn reduce(state: &mut State, action: Action) {
    match action {
        Action::AddCall(payload) => {
            let call = payload.into_call(Uuid::new_v4().to_string(), Utc::now());
            // Most-recent-first: new calls go to the front.
            state.calls.insert(0, call);
        }
        Action::UpdateStatus { id, status } => {
            if let Some(call) = state.calls.iter_mut().find(|call| call.id == id) {
                call.status = status;
            }
        }
        Action::UpdateNotes {
            id,
            notes,
            follow_up_action,
        } => {
            if let Some(call) = state.calls.iter_mut().find(|call| call.id == id) {
                call.notes = notes;
                if let Some(action) = follow_up_action {
                    call.follow_up_action = Some(action);
                }
            }
        }
        Action::Reschedule { id, scheduled_at } => {
            if let Some(call) = state.calls.iter_mut().find(|call| call.id == id) {
                call.scheduled_at = scheduled_at;
            }
        }
        Action::SetFilters(update) => {
            state.filters.apply(update);
        }
    }
}

fn search_text(call: &CallLog) -> String {
    format!(
        "{} {} {} {}",
        call.contact_name,
        call.phone_number,
        call.notes,
        call.tags.join(" ")
    )
    .to_lowercase()
}

pub struct CallStore {
    state: State,
    storage: SnapshotStore,
}

impl CallStore {
    /// Loads the persisted snapshot (falling back to the default state when it
    /// is missing, corrupt, or from another schema version), seeds example
    /// calls if the collection is empty, and persists the result.
    pub fn open(storage: SnapshotStore) -> Result<Self> {
        let mut state = storage.load().unwrap_or_default();

        if state.calls.is_empty() {
            state.calls = seed::example_calls(Utc::now());
            info!("Seeded call store with {} example calls", state.calls.len());
        }

        let store = Self { state, storage };
        store.storage.save(&store.state)?;

        info!(
            "Call store ready with {} calls at {}",
            store.state.calls.len(),
            store.storage.path().display()
        );

        Ok(store)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn calls(&self) -> &[CallLog] {
        &self.state.calls
    }

    pub fn filters(&self) -> &CallFilters {
        &self.state.filters
    }

    /// Applies one action and writes the snapshot. The reducer itself cannot
    /// fail; only the snapshot write can.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        reduce(&mut self.state, action);
        self.storage.save(&self.state)
    }

    pub fn add_call(&mut self, payload: NewCall) -> Result<()> {
        self.dispatch(Action::AddCall(payload))
    }

    pub fn update_status(&mut self, id: &str, status: CallStatus) -> Result<()> {
        self.dispatch(Action::UpdateStatus {
            id: id.to_string(),
            status,
        })
    }

    pub fn update_notes(
        &mut self,
        id: &str,
        notes: String,
        follow_up_action: Option<String>,
    ) -> Result<()> {
        self.dispatch(Action::UpdateNotes {
            id: id.to_string(),
            notes,
            follow_up_action,
        })
    }

    pub fn reschedule(&mut self, id: &str, scheduled_at: Option<DateTime<Utc>>) -> Result<()> {
        self.dispatch(Action::Reschedule {
            id: id.to_string(),
            scheduled_at,
        })
    }

    pub fn set_filters(&mut self, update: FilterUpdate) -> Result<()> {
        self.dispatch(Action::SetFilters(update))
    }

    /// Calls passing every active filter, in collection order.
    pub fn filtered_calls(&self) -> Vec<&CallLog> {
        let filters = &self.state.filters;
        let needle = filters.search.to_lowercase();

        self.state
            .calls
            .iter()
            .filter(|call| {
                if !filters.status.admits(&call.status) {
                    return false;
                }
                if !filters.direction.admits(&call.direction) {
                    return false;
                }
                if let Filter::Only(tag) = &filters.tag {
                    if !call.tags.contains(tag) {
                        return false;
                    }
                }
                if !filters.priority.admits(&call.priority) {
                    return false;
                }
                needle.is_empty() || search_text(call).contains(&needle)
            })
            .collect()
    }

    /// Every distinct tag across all calls, sorted ascending.
    pub fn active_tags(&self) -> Vec<String> {
        let mut tags = BTreeSet::new();
        for call in &self.state.calls {
            for tag in &call.tags {
                tags.insert(tag.clone());
            }
        }
        tags.into_iter().collect()
    }

    pub fn stats(&self) -> CallStats {
        stats::compute(&self.state.calls, Utc::now())
    }
}
