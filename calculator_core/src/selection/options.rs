//! Listing rows for the subgenre and topic pickers.

use genre_catalog::{Genre, Topic};

/// A candidate subgenre with its verdict against the current main genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubgenreOption<'a> {
    pub genre: &'a Genre,
    pub compatible: bool,
    pub selected: bool,
}

/// A topic passing the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicOption<'a> {
    pub topic: &'a Topic,
    /// Always false when no main genre is selected.
    pub compatible: bool,
    pub selected: bool,
}
