//! Topic definitions.

use serde::{Deserialize, Serialize};

use super::{GenreId, TopicId};

/// A game topic (theme) and the genres it fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub compatible_genres: Vec<GenreId>,
}

impl Topic {
    /// Check whether the topic fits a genre.
    pub fn fits_genre(&self, genre_id: &str) -> bool {
        self.compatible_genres
            .iter()
            .any(|id| id.as_str() == genre_id)
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// Surrounding whitespace in the query is ignored, so a blank query matches.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
