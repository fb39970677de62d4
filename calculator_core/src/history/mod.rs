//! History module - recent selections that survive restarts.
//!
//! - **HistoryEntry**: immutable snapshot of a (main, sub, topic) triple
//! - **HistoryLog**: bounded, deduplicated, newest-first list of entries

mod entry;
mod log;

pub use entry::*;
pub use log::*;
