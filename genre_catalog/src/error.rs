//! Catalog error types.

use thiserror::Error;

use crate::entities::{GenreId, TopicId};

/// Result type for catalog loading and validation.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or validating a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog table could not be parsed.
    #[error("Failed to parse {table} table: {message}")]
    Parse { table: &'static str, message: String },

    #[error("Duplicate genre id: {0}")]
    DuplicateGenre(GenreId),

    #[error("Duplicate topic id: {0}")]
    DuplicateTopic(TopicId),

    #[error("Duplicate combination: {main} + {sub}")]
    DuplicateCombination { main: GenreId, sub: GenreId },

    /// The data parsed but breaks a catalog invariant.
    #[error("Integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),
}

/// A single broken data-integrity rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("genre {genre}: slider {slider} is {value}, expected 0..=10")]
    SliderOutOfRange {
        genre: GenreId,
        slider: &'static str,
        value: u8,
    },

    #[error("genre {genre}: design focus sums to {total}, expected 100")]
    DesignFocusTotal { genre: GenreId, total: u16 },

    #[error("genre {0}: no target audience")]
    EmptyAudience(GenreId),

    #[error("genre {0}: target audience listed twice")]
    RepeatedAudience(GenreId),

    #[error("genre {genre}: subgenre {subgenre} does not exist")]
    UnknownSubgenre { genre: GenreId, subgenre: GenreId },

    #[error("genre {0}: lists itself as a subgenre")]
    SelfSubgenre(GenreId),

    #[error("topic {0}: no compatible genres")]
    EmptyTopicGenres(TopicId),

    #[error("topic {topic}: genre {genre} does not exist")]
    UnknownTopicGenre { topic: TopicId, genre: GenreId },

    #[error("combination {main} + {sub}: slider {slider} is {value}, expected 0..=10")]
    CombinationSliderOutOfRange {
        main: GenreId,
        sub: GenreId,
        slider: &'static str,
        value: u8,
    },

    #[error("combination {main} + {sub}: genre {missing} does not exist")]
    UnknownCombinationGenre {
        main: GenreId,
        sub: GenreId,
        missing: GenreId,
    },
}
