//! Calculator session - selection, history and preferences over a store.
//!
//! Commands run to completion synchronously. Writes to the store are
//! best-effort: a failed write is logged and the in-memory state stands.

use std::sync::Arc;

use chrono::Utc;
use genre_catalog::{Catalog, CompatibilityReport, EffectiveSliders};
use tracing::{debug, info, warn};

use crate::commands::Command;
use crate::config::CalculatorConfig;
use crate::history::{HistoryEntry, HistoryLog};
use crate::preferences::Preferences;
use crate::selection::{Selection, Transition};
use crate::storage::{JsonFileStore, KeyValueStore};
use crate::Result;

/// One calculator window's worth of state.
pub struct Calculator<S: KeyValueStore> {
    catalog: Arc<Catalog>,
    store: S,
    config: CalculatorConfig,
    selection: Selection,
    history: HistoryLog,
    preferences: Preferences,
}

impl Calculator<JsonFileStore> {
    /// Open a session on the shared catalog and the configured state file.
    pub fn open(config: CalculatorConfig) -> Result<Self> {
        let catalog = Catalog::shared()?;
        let store = JsonFileStore::open(config.resolved_storage_path())?;
        Ok(Self::new(catalog, store, config))
    }
}

impl<S: KeyValueStore> Calculator<S> {
    /// Start a session, restoring history and preferences from `store`.
    pub fn new(catalog: Arc<Catalog>, store: S, config: CalculatorConfig) -> Self {
        let stored_history = match store.get(&config.keys.history) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read history ({})", e);
                None
            }
        };
        let history =
            HistoryLog::from_json_or_empty(stored_history.as_deref(), config.history_capacity);
        let preferences = Preferences::load(&store, &config.keys);

        info!(
            "Calculator ready: {} genres, {} topics, {} history entries",
            catalog.genres().len(),
            catalog.topics().len(),
            history.len()
        );

        Self {
            catalog,
            store,
            config,
            selection: Selection::new(),
            history,
            preferences,
        }
    }

    /// Start a session with the default configuration.
    pub fn with_defaults(catalog: Arc<Catalog>, store: S) -> Self {
        Self::new(catalog, store, CalculatorConfig::default())
    }

    // --- commands ---

    /// Choose the main genre. Never commits history.
    pub fn set_main_genre(&mut self, id: Option<&str>) {
        self.selection.set_main_genre(&self.catalog, id);
    }

    /// Choose the subgenre and commit to history when a main genre is set.
    pub fn set_subgenre(&mut self, id: Option<&str>) {
        let transition = self.selection.set_subgenre(&self.catalog, id);
        self.follow(transition);
    }

    /// Choose the topic and commit to history when a main genre is set.
    pub fn set_theme(&mut self, id: Option<&str>) {
        let transition = self.selection.set_theme(&self.catalog, id);
        self.follow(transition);
    }

    /// Set the topic search filter.
    pub fn set_theme_search_query(&mut self, query: impl Into<String>) {
        self.selection.set_theme_search_query(query);
    }

    /// Snapshot the current triple into history. Does nothing without a main genre.
    pub fn commit_to_history(&mut self) {
        let Some(entry) = self.selection.snapshot(Utc::now().timestamp_millis()) else {
            return;
        };

        debug!("Committing {:?} to history", entry);
        self.history.commit(entry);
        self.persist_history();
    }

    /// Restore a past selection. Does not commit.
    pub fn load_from_history(&mut self, entry: &HistoryEntry) {
        self.selection.load_from_history(&self.catalog, entry);
    }

    /// Clear the selection. History is kept.
    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Empty the history and erase its stored copy.
    pub fn clear_history(&mut self) {
        self.history.clear();
        if let Err(e) = self.store.remove(&self.config.keys.history) {
            warn!("Could not erase stored history ({})", e);
        }
        info!("History cleared");
    }

    /// Set the pin-on-top flag and store it.
    pub fn set_always_on_top(&mut self, enabled: bool) {
        self.preferences.always_on_top = enabled;
        persist(
            &mut self.store,
            &self.config.keys.always_on_top,
            self.preferences.always_on_top_value(),
        );
    }

    /// Flip the pin-on-top flag.
    pub fn toggle_always_on_top(&mut self) {
        self.set_always_on_top(!self.preferences.always_on_top);
    }

    /// Set the window opacity, clamped into [0, 1].
    pub fn set_opacity(&mut self, opacity: f64) {
        self.preferences.set_opacity(opacity);
        let value = self.preferences.opacity_value();
        persist(&mut self.store, &self.config.keys.opacity, &value);
    }

    /// Run a command.
    pub fn apply(&mut self, command: Command) {
        debug!("Applying {}", command.name());
        match command {
            Command::SetMainGenre { id } => self.set_main_genre(id.as_deref()),
            Command::SetSubgenre { id } => self.set_subgenre(id.as_deref()),
            Command::SetTheme { id } => self.set_theme(id.as_deref()),
            Command::SetThemeSearchQuery { query } => self.set_theme_search_query(query),
            Command::CommitToHistory => self.commit_to_history(),
            Command::LoadFromHistory { entry } => self.load_from_history(&entry),
            Command::Reset => self.reset(),
            Command::ClearHistory => self.clear_history(),
            Command::SetAlwaysOnTop { enabled } => self.set_always_on_top(enabled),
            Command::ToggleAlwaysOnTop => self.toggle_always_on_top(),
            Command::SetOpacity { opacity } => self.set_opacity(opacity),
        }
    }

    fn follow(&mut self, transition: Transition) {
        if transition.should_commit() {
            self.commit_to_history();
        }
    }

    fn persist_history(&mut self) {
        match self.history.to_json() {
            Ok(json) => persist(&mut self.store, &self.config.keys.history, &json),
            Err(e) => warn!("Could not encode history ({})", e),
        }
    }

    // --- queries ---

    /// Get the catalog this session reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Get the effective sliders for the current selection.
    pub fn derived(&self) -> Option<&EffectiveSliders> {
        self.selection.derived()
    }

    /// Get the compatibility verdicts for the current selection.
    pub fn compatibility_report(&self) -> Option<CompatibilityReport> {
        self.selection.compatibility_report(&self.catalog)
    }

    /// Check if the current main genre accepts a subgenre.
    pub fn is_subgenre_compatible(&self, id: &str) -> bool {
        self.selection.is_subgenre_compatible(&self.catalog, id)
    }

    /// Check if a topic fits the current main genre.
    pub fn is_theme_compatible(&self, id: &str) -> bool {
        self.selection.is_theme_compatible(&self.catalog, id)
    }

    /// Get the history, newest first.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Get the window preferences.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Get the session configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Get the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn persist<S: KeyValueStore>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!("Could not persist {} ({})", key, e);
    }
}
