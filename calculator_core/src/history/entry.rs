//! History entry - an immutable snapshot of one selection.

use chrono::{DateTime, TimeZone, Utc};
use genre_catalog::{Catalog, GenreId, TopicId};
use serde::{Deserialize, Serialize};

/// A past (main genre, subgenre, topic) selection.
///
/// Serialized with camelCase keys and `null` for absent ids, which is the
/// persisted history format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub main_genre_id: GenreId,
    pub subgenre_id: Option<GenreId>,
    pub theme_id: Option<TopicId>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Create an entry for a triple recorded at `timestamp` (ms since epoch).
    pub fn new(
        main_genre_id: GenreId,
        subgenre_id: Option<GenreId>,
        theme_id: Option<TopicId>,
        timestamp: i64,
    ) -> Self {
        Self {
            main_genre_id,
            subgenre_id,
            theme_id,
            timestamp,
        }
    }

    /// Check whether two entries record the same triple, ignoring time.
    pub fn same_selection(&self, other: &HistoryEntry) -> bool {
        self.main_genre_id == other.main_genre_id
            && self.subgenre_id == other.subgenre_id
            && self.theme_id == other.theme_id
    }

    /// When the entry was recorded, if the timestamp is representable.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    /// Human-readable "Main + Sub + Topic" label.
    ///
    /// Ids missing from the catalog are shown as-is.
    pub fn label(&self, catalog: &Catalog) -> String {
        let genre_name = |id: &GenreId| {
            catalog
                .genre_by_id(id.as_str())
                .map(|g| g.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        let mut parts = vec![genre_name(&self.main_genre_id)];
        if let Some(sub) = &self.subgenre_id {
            parts.push(genre_name(sub));
        }
        if let Some(theme) = &self.theme_id {
            parts.push(
                catalog
                    .topic_by_id(theme.as_str())
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| theme.to_string()),
            );
        }
        parts.join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sub: Option<&str>, theme: Option<&str>, timestamp: i64) -> HistoryEntry {
        HistoryEntry::new(
            GenreId::from("action"),
            sub.map(GenreId::from),
            theme.map(TopicId::from),
            timestamp,
        )
    }

    #[test]
    fn test_same_selection_ignores_timestamp() {
        let a = entry(Some("adventure"), None, 1);
        let b = entry(Some("adventure"), None, 2);
        let c = entry(Some("adventure"), Some("zombies"), 1);

        assert!(a.same_selection(&b));
        assert!(!a.same_selection(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(entry(Some("adventure"), None, 1_700_000_000_000)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "mainGenreId": "action",
                "subgenreId": "adventure",
                "themeId": null,
                "timestamp": 1_700_000_000_000i64,
            })
        );
    }

    #[test]
    fn test_label() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(entry(None, None, 0).label(&catalog), "Action");
        assert_eq!(
            entry(Some("adventure"), Some("zombies"), 0).label(&catalog),
            "Action + Adventure + Zombies"
        );
        assert_eq!(
            entry(Some("mystery"), Some("unknown_topic"), 0).label(&catalog),
            "Action + mystery + unknown_topic"
        );
    }

    #[test]
    fn test_recorded_at() {
        let recorded = entry(None, None, 86_400_000).recorded_at().unwrap();
        assert_eq!(recorded.timestamp(), 86_400);

        assert!(entry(None, None, i64::MAX).recorded_at().is_none());
    }
}
