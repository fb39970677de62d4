//! # Calculator Core
//!
//! Session state for the genre calculator. This crate drives the pure
//! compatibility engine from `genre_catalog`, keeps the current selection
//! and a short history of past ones, and persists both through a small
//! key-value boundary.
//!
//! ## Core Components
//!
//! - **selection**: State machine over the (main genre, subgenre, topic) triple
//! - **history**: Bounded, deduplicated log of past selections
//! - **session**: `Calculator`, which wires selection, history and preferences to a store
//! - **storage**: `KeyValueStore` trait with in-memory and JSON-file backends
//! - **commands**: The command surface as serializable data
//!
//! ## Design Philosophy
//!
//! - **Pure transitions**: `Selection` and `HistoryLog` never touch storage
//! - **Best-effort persistence**: a failed write is logged, never surfaced to the caller
//! - **Absence over defaults**: nothing is derived without a main genre

pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod preferences;
pub mod selection;
pub mod session;
pub mod storage;

pub use commands::*;
pub use config::*;
pub use error::{Error, Result};
pub use history::*;
pub use preferences::*;
pub use selection::*;
pub use session::*;
pub use storage::*;
