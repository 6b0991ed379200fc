//! calltrail: a local-first call-log core.
//!
//! The crate holds one [`store::CallStore`] owning the call collection and the
//! active filter set. Mutations are dispatched as tagged actions through a
//! single reducer; after every transition the full state is written back to a
//! versioned JSON snapshot on disk ([`storage::SnapshotStore`]). The embedding
//! presentation layer reads state through the derived views and never mutates
//! it directly.

pub mod models;
pub mod stats;
pub mod storage;
pub mod store;

pub use models::{
    parse_tag_line, CallDirection, CallFilters, CallLog, CallPriority, CallStatus, Filter,
    FilterUpdate, NewCall, UNKNOWN_CALLER,
};
pub use stats::{CallStats, StatusBreakdown};
pub use storage::{SnapshotStore, SCHEMA_VERSION};
pub use store::{Action, CallStore, State};
