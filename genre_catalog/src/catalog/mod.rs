//! The catalog - read-only reference data for genres, topics and combinations.

mod loader;
mod validation;

use std::collections::HashMap;

use crate::entities::{Genre, GenreCombination, GenreId, Topic, TopicId};
use crate::error::{CatalogError, Result};

/// Indexed, immutable reference tables.
///
/// Built once at startup and shared read-only afterwards. Records keep the
/// order of the source tables; lookups go through id indexes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    genres: Vec<Genre>,
    topics: Vec<Topic>,
    combinations: Vec<GenreCombination>,

    /// Index: genre id -> position in `genres`.
    genre_index: HashMap<GenreId, usize>,

    /// Index: topic id -> position in `topics`.
    topic_index: HashMap<TopicId, usize>,

    /// Index: main genre -> subgenre -> position in `combinations`.
    combination_index: HashMap<GenreId, HashMap<GenreId, usize>>,
}

impl Catalog {
    /// Build a catalog from already-parsed tables.
    ///
    /// Fails on duplicate genre ids, topic ids or combination pairs. Other
    /// integrity rules are checked by [`Catalog::validate`].
    pub fn from_parts(
        genres: Vec<Genre>,
        topics: Vec<Topic>,
        combinations: Vec<GenreCombination>,
    ) -> Result<Self> {
        let mut genre_index = HashMap::with_capacity(genres.len());
        for (position, genre) in genres.iter().enumerate() {
            if genre_index.insert(genre.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateGenre(genre.id.clone()));
            }
        }

        let mut topic_index = HashMap::with_capacity(topics.len());
        for (position, topic) in topics.iter().enumerate() {
            if topic_index.insert(topic.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateTopic(topic.id.clone()));
            }
        }

        let mut combination_index: HashMap<GenreId, HashMap<GenreId, usize>> = HashMap::new();
        for (position, combo) in combinations.iter().enumerate() {
            let previous = combination_index
                .entry(combo.main_genre.clone())
                .or_default()
                .insert(combo.subgenre.clone(), position);
            if previous.is_some() {
                return Err(CatalogError::DuplicateCombination {
                    main: combo.main_genre.clone(),
                    sub: combo.subgenre.clone(),
                });
            }
        }

        Ok(Self {
            genres,
            topics,
            combinations,
            genre_index,
            topic_index,
            combination_index,
        })
    }

    /// Get a genre by id.
    pub fn genre_by_id(&self, id: &str) -> Option<&Genre> {
        self.genre_index.get(id).map(|&position| &self.genres[position])
    }

    /// Get a topic by id.
    pub fn topic_by_id(&self, id: &str) -> Option<&Topic> {
        self.topic_index.get(id).map(|&position| &self.topics[position])
    }

    /// Get the override row for an ordered (main, sub) pair, if one exists.
    pub fn combination_for(&self, main_id: &str, sub_id: &str) -> Option<&GenreCombination> {
        self.combination_index
            .get(main_id)
            .and_then(|subs| subs.get(sub_id))
            .map(|&position| &self.combinations[position])
    }

    /// All genres in table order.
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// All topics in table order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// All combination rows in table order.
    pub fn combinations(&self) -> &[GenreCombination] {
        &self.combinations
    }

    /// Topics that list the given genre. Empty for an unknown genre.
    pub fn topics_for_genre(&self, genre_id: &str) -> Vec<&Topic> {
        self.topics
            .iter()
            .filter(|topic| topic.fits_genre(genre_id))
            .collect()
    }

    /// Check if a genre id exists.
    pub fn has_genre(&self, id: &str) -> bool {
        self.genre_index.contains_key(id)
    }

    /// Check if a topic id exists.
    pub fn has_topic(&self, id: &str) -> bool {
        self.topic_index.contains_key(id)
    }
}
