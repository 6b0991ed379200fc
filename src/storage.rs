//! Snapshot persistence for the call store.
//!
//! The whole store state is written as one versioned JSON document. Loading is
//! deliberately forgiving: a missing file, unreadable contents, or a schema
//! version mismatch all read as "no snapshot" so the store can fall back to its
//! default state instead of surfacing an error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::store::State;

/// Bump when the snapshot layout changes; older snapshots are discarded.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    version: u32,
    data: &'a State,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    version: u32,
    data: State,
}

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Reads the persisted state, or `None` when no usable snapshot exists.
    pub fn load(&self) -> Option<State> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(
                    "Failed to read snapshot from {}: {err}",
                    self.path.display()
                );
                return None;
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&contents) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    "Discarding unparseable snapshot at {}: {err}",
                    self.path.display()
                );
                return None;
            }
        };

        if snapshot.version != SCHEMA_VERSION {
            warn!(
                "Discarding snapshot with schema version {} (expected {})",
                snapshot.version, SCHEMA_VERSION
            );
            return None;
        }

        Some(snapshot.data)
    }

    /// Overwrites the snapshot with the given state.
    pub fn save(&self, state: &State) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create snapshot directory {}", parent.display())
            })?;
        }

        let serialized = serde_json::to_string_pretty(&SnapshotRef {
            version: SCHEMA_VERSION,
            data: state,
        })?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write snapshot to {}", self.path.display()))
    }
}
