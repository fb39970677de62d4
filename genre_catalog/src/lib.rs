//! # Genre Catalog
//!
//! Reference data for the genre calculator: genres, topics, and the
//! pairwise slider overrides, plus the pure compatibility engine built on
//! them. This crate holds no session state; it is loaded once and shared
//! read-only.

pub mod catalog;
pub mod compatibility;
pub mod entities;
pub mod error;
pub mod mechanics;

pub use catalog::*;
pub use compatibility::*;
pub use entities::*;
pub use error::{CatalogError, IntegrityViolation, Result};
pub use mechanics::*;
