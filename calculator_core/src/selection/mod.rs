//! Selection - the current (main genre, subgenre, topic) choice.
//!
//! A pure state machine: every transition takes the catalog, updates the
//! ids and recomputes the derived sliders in full. Transitions that should
//! leave a history snapshot say so through [`Transition`]; writing the
//! history is the session's job.

mod options;

pub use options::*;

use genre_catalog::{
    Catalog, CompatibilityReport, EffectiveSliders, Genre, GenreId, Topic, TopicId,
};
use std::cmp::Ordering;
use tracing::debug;

use crate::history::HistoryEntry;

/// Outcome of a selection transition.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing further to do.
    Settled,
    /// The new state should be committed to history.
    CommitToHistory,
}

impl Transition {
    /// Check if history should be committed.
    pub fn should_commit(self) -> bool {
        self == Transition::CommitToHistory
    }
}

/// Current choices plus the derived sliders for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    main_genre_id: Option<GenreId>,
    subgenre_id: Option<GenreId>,
    theme_id: Option<TopicId>,
    theme_search_query: String,
    derived: Option<EffectiveSliders>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    // --- transitions ---

    /// Choose the main genre. Unknown ids clear it.
    ///
    /// A subgenre the new main genre does not accept is dropped. Clearing the
    /// main genre leaves the subgenre as it is.
    pub fn set_main_genre(&mut self, catalog: &Catalog, id: Option<&str>) {
        let main = id.and_then(|id| catalog.genre_by_id(id));

        if let Some(genre) = main {
            let rejected = self
                .subgenre_id
                .as_ref()
                .is_some_and(|sub| !genre.accepts_subgenre(sub.as_str()));
            if rejected {
                debug!("Dropping subgenre {:?} not accepted by {}", self.subgenre_id, genre.id);
                self.subgenre_id = None;
            }
        }

        self.main_genre_id = main.map(|genre| genre.id.clone());
        self.recompute(catalog);
        debug!("Main genre set to {:?}", self.main_genre_id);
    }

    /// Choose the subgenre. Unknown ids clear it.
    ///
    /// Known ids are taken without a compatibility check, so a subgenre the
    /// main genre does not accept can be selected here.
    pub fn set_subgenre(&mut self, catalog: &Catalog, id: Option<&str>) -> Transition {
        self.subgenre_id = id
            .and_then(|id| catalog.genre_by_id(id))
            .map(|genre| genre.id.clone());
        self.recompute(catalog);
        debug!("Subgenre set to {:?}", self.subgenre_id);
        self.commit_if_main_set()
    }

    /// Choose the topic. Unknown ids clear it. Sliders are unaffected.
    pub fn set_theme(&mut self, catalog: &Catalog, id: Option<&str>) -> Transition {
        self.theme_id = id
            .and_then(|id| catalog.topic_by_id(id))
            .map(|topic| topic.id.clone());
        debug!("Theme set to {:?}", self.theme_id);
        self.commit_if_main_set()
    }

    /// Set the topic search filter. Only listings are affected.
    pub fn set_theme_search_query(&mut self, query: impl Into<String>) {
        self.theme_search_query = query.into();
    }

    /// Restore a past triple as recorded, without re-validating it.
    ///
    /// Clears the topic search filter.
    pub fn load_from_history(&mut self, catalog: &Catalog, entry: &HistoryEntry) {
        self.main_genre_id = Some(entry.main_genre_id.clone());
        self.subgenre_id = entry.subgenre_id.clone();
        self.theme_id = entry.theme_id.clone();
        self.theme_search_query.clear();
        self.recompute(catalog);
        debug!("Loaded selection {:?} from history", entry);
    }

    /// Clear the triple, the derived values and the filter.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("Selection reset");
    }

    /// History snapshot of the current triple, if a main genre is set.
    pub fn snapshot(&self, timestamp: i64) -> Option<HistoryEntry> {
        self.main_genre_id.as_ref().map(|main| {
            HistoryEntry::new(
                main.clone(),
                self.subgenre_id.clone(),
                self.theme_id.clone(),
                timestamp,
            )
        })
    }

    fn commit_if_main_set(&self) -> Transition {
        if self.main_genre_id.is_some() {
            Transition::CommitToHistory
        } else {
            Transition::Settled
        }
    }

    fn recompute(&mut self, catalog: &Catalog) {
        self.derived = catalog
            .engine()
            .derive(self.main_genre(catalog), self.subgenre_id.as_ref().map(GenreId::as_str));
    }

    // --- accessors ---

    /// Get the selected main genre id.
    pub fn main_genre_id(&self) -> Option<&GenreId> {
        self.main_genre_id.as_ref()
    }

    /// Get the selected subgenre id.
    pub fn subgenre_id(&self) -> Option<&GenreId> {
        self.subgenre_id.as_ref()
    }

    /// Get the selected topic id.
    pub fn theme_id(&self) -> Option<&TopicId> {
        self.theme_id.as_ref()
    }

    /// Get the topic search filter.
    pub fn theme_search_query(&self) -> &str {
        &self.theme_search_query
    }

    /// Effective sliders, alignment and design focus. `None` without a main genre.
    pub fn derived(&self) -> Option<&EffectiveSliders> {
        self.derived.as_ref()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.main_genre_id.is_none() && self.subgenre_id.is_none() && self.theme_id.is_none()
    }

    /// Get the main genre record, if the id is known to the catalog.
    pub fn main_genre<'c>(&self, catalog: &'c Catalog) -> Option<&'c Genre> {
        self.main_genre_id
            .as_ref()
            .and_then(|id| catalog.genre_by_id(id.as_str()))
    }

    /// Get the subgenre record.
    pub fn subgenre<'c>(&self, catalog: &'c Catalog) -> Option<&'c Genre> {
        self.subgenre_id
            .as_ref()
            .and_then(|id| catalog.genre_by_id(id.as_str()))
    }

    /// Get the topic record.
    pub fn theme<'c>(&self, catalog: &'c Catalog) -> Option<&'c Topic> {
        self.theme_id
            .as_ref()
            .and_then(|id| catalog.topic_by_id(id.as_str()))
    }

    // --- queries ---

    /// Whether the current main genre accepts `id` as a subgenre.
    pub fn is_subgenre_compatible(&self, catalog: &Catalog, id: &str) -> bool {
        catalog
            .engine()
            .is_subgenre_compatible(self.main_genre(catalog), id)
    }

    /// Whether the topic `id` fits the current main genre.
    pub fn is_theme_compatible(&self, catalog: &Catalog, id: &str) -> bool {
        catalog
            .engine()
            .is_topic_compatible(self.main_genre(catalog), id)
    }

    /// Compatibility verdicts for the selected pairs.
    pub fn compatibility_report(&self, catalog: &Catalog) -> Option<CompatibilityReport> {
        catalog.engine().report(
            self.main_genre(catalog),
            self.subgenre_id.as_ref().map(GenreId::as_str),
            self.theme_id.as_ref().map(TopicId::as_str),
        )
    }

    /// Every genre other than the main one, in catalog order.
    ///
    /// Empty when no main genre is selected.
    pub fn available_subgenres<'c>(&self, catalog: &'c Catalog) -> Vec<SubgenreOption<'c>> {
        let Some(main) = self.main_genre(catalog) else {
            return Vec::new();
        };

        catalog
            .genres()
            .iter()
            .filter(|genre| genre.id != main.id)
            .map(|genre| SubgenreOption {
                genre,
                compatible: main.accepts_subgenre(genre.id.as_str()),
                selected: self.subgenre_id.as_ref() == Some(&genre.id),
            })
            .collect()
    }

    /// Topics matching the search filter.
    ///
    /// The query is trimmed and matched case-insensitively; a blank query
    /// shows everything. With a main genre, compatible topics come first and
    /// each group is sorted by name, ignoring case. Without one, catalog order
    /// is kept.
    pub fn visible_topics<'c>(&self, catalog: &'c Catalog) -> Vec<TopicOption<'c>> {
        let main = self.main_genre(catalog);

        let mut options: Vec<TopicOption<'c>> = catalog
            .topics()
            .iter()
            .filter(|topic| topic.matches_query(&self.theme_search_query))
            .map(|topic| TopicOption {
                topic,
                compatible: main.is_some_and(|genre| topic.fits_genre(genre.id.as_str())),
                selected: self.theme_id.as_ref() == Some(&topic.id),
            })
            .collect();

        if main.is_some() {
            options.sort_by(|a, b| {
                b.compatible
                    .cmp(&a.compatible)
                    .then_with(|| compare_names(&a.topic.name, &b.topic.name))
            });
        }
        options
    }
}

/// Case-insensitive name order, falling back to byte order on ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
