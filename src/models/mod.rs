pub mod call;
pub mod filters;

pub use call::{
    parse_tag_line, CallDirection, CallLog, CallPriority, CallStatus, NewCall, UNKNOWN_CALLER,
};
pub use filters::{CallFilters, Filter, FilterUpdate};
