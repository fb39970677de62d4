//! Compatibility Engine - pure derivations over the catalog.
//!
//! Answers two kinds of questions:
//! 1. **Compatibility**: may a subgenre or topic be paired with a main genre?
//! 2. **Effective sliders**: which slider/alignment values apply to a
//!    (main genre, subgenre) pair, and which design-focus split goes with them?
//!
//! A combination row for the ordered pair replaces the main genre's sliders
//! and alignment verbatim. Without a row the base genre's values apply.
//! Design focus always comes from the main genre.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{AlignmentSliders, DesignFocus, GameSliders, Genre, GenreId};

/// Where a set of effective sliders came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderSource {
    /// The main genre's own values.
    BaseGenre,
    /// A combination row for (main genre, this subgenre).
    Combination { subgenre: GenreId },
}

/// Derived design guidance for a main genre and optional subgenre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSliders {
    pub sliders: GameSliders,
    pub alignment: AlignmentSliders,
    pub design_focus: DesignFocus,
    pub source: SliderSource,
}

/// Verdicts for the pairs currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// `Some` when a subgenre is selected.
    pub subgenre_match: Option<bool>,
    /// `Some` when a topic is selected.
    pub topic_match: Option<bool>,
}

/// Stateless view over a catalog answering compatibility questions.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> CompatibilityEngine<'a> {
    /// Create an engine over a catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// True iff `candidate` is in the main genre's compatible subgenres.
    ///
    /// Not symmetric: `A` accepting `B` says nothing about `B` accepting `A`.
    pub fn is_subgenre_compatible(&self, main: Option<&Genre>, candidate: &str) -> bool {
        main.is_some_and(|genre| genre.accepts_subgenre(candidate))
    }

    /// True iff the topic exists and lists the main genre.
    ///
    /// Unknown topics and a missing main genre are simply incompatible.
    pub fn is_topic_compatible(&self, main: Option<&Genre>, topic_id: &str) -> bool {
        match (main, self.catalog.topic_by_id(topic_id)) {
            (Some(genre), Some(topic)) => topic.fits_genre(genre.id.as_str()),
            _ => false,
        }
    }

    /// Effective sliders for a main genre and optional subgenre.
    pub fn effective_sliders(&self, main: &Genre, subgenre: Option<&str>) -> EffectiveSliders {
        let combination =
            subgenre.and_then(|sub| self.catalog.combination_for(main.id.as_str(), sub));

        match combination {
            Some(combo) => EffectiveSliders {
                sliders: combo.sliders,
                alignment: combo.alignment,
                design_focus: main.design_focus,
                source: SliderSource::Combination {
                    subgenre: combo.subgenre.clone(),
                },
            },
            None => EffectiveSliders {
                sliders: main.sliders,
                alignment: main.alignment,
                design_focus: main.design_focus,
                source: SliderSource::BaseGenre,
            },
        }
    }

    /// Like [`Self::effective_sliders`], but absence of a main genre propagates.
    pub fn derive(&self, main: Option<&Genre>, subgenre: Option<&str>) -> Option<EffectiveSliders> {
        main.map(|genre| self.effective_sliders(genre, subgenre))
    }

    /// Compatibility verdicts for the selected pairs.
    ///
    /// `None` unless a main genre and at least one of subgenre/topic is present.
    pub fn report(
        &self,
        main: Option<&Genre>,
        subgenre: Option<&str>,
        topic: Option<&str>,
    ) -> Option<CompatibilityReport> {
        main?;
        if subgenre.is_none() && topic.is_none() {
            return None;
        }

        Some(CompatibilityReport {
            subgenre_match: subgenre.map(|sub| self.is_subgenre_compatible(main, sub)),
            topic_match: topic.map(|id| self.is_topic_compatible(main, id)),
        })
    }
}

impl Catalog {
    /// Compatibility engine over this catalog.
    pub fn engine(&self) -> CompatibilityEngine<'_> {
        CompatibilityEngine::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_subgenre_compatibility() {
        let catalog = builtin();
        let engine = catalog.engine();
        let action = catalog.genre_by_id("action");

        assert!(engine.is_subgenre_compatible(action, "adventure"));
        assert!(!engine.is_subgenre_compatible(action, "puzzle"));
        assert!(!engine.is_subgenre_compatible(action, "nonexistent"));
        assert!(!engine.is_subgenre_compatible(None, "adventure"));
    }

    #[test]
    fn test_subgenre_compatibility_is_directional() {
        let catalog = builtin();
        let engine = catalog.engine();
        let visual_novel = catalog.genre_by_id("visual_novel");
        let adventure = catalog.genre_by_id("adventure");

        assert!(engine.is_subgenre_compatible(visual_novel, "adventure"));
        assert!(!engine.is_subgenre_compatible(adventure, "visual_novel"));

        let skill = catalog.genre_by_id("skill");
        let puzzle = catalog.genre_by_id("puzzle");
        assert!(engine.is_subgenre_compatible(skill, "puzzle"));
        assert!(!engine.is_subgenre_compatible(puzzle, "skill"));
    }

    #[test]
    fn test_topic_compatibility() {
        let catalog = builtin();
        let engine = catalog.engine();
        let action = catalog.genre_by_id("action");

        assert!(engine.is_topic_compatible(action, "zombies"));
        assert!(!engine.is_topic_compatible(action, "zoo"));
        assert!(!engine.is_topic_compatible(action, "nonexistent"));
        assert!(!engine.is_topic_compatible(None, "zombies"));
    }

    #[test]
    fn test_combination_overrides_sliders() {
        let catalog = builtin();
        let engine = catalog.engine();
        let action = catalog.genre_by_id("action").unwrap();
        let combo = catalog.combination_for("action", "adventure").unwrap();

        let effective = engine.effective_sliders(action, Some("adventure"));

        assert_eq!(effective.sliders, combo.sliders);
        assert_eq!(effective.alignment, combo.alignment);
        assert_ne!(effective.sliders, action.sliders);
        assert_eq!(
            effective.source,
            SliderSource::Combination {
                subgenre: GenreId::from("adventure")
            }
        );
    }

    #[test]
    fn test_falls_back_to_base_genre() {
        let catalog = builtin();
        let engine = catalog.engine();
        let action = catalog.genre_by_id("action").unwrap();

        let without_sub = engine.effective_sliders(action, None);
        assert_eq!(without_sub.sliders, action.sliders);
        assert_eq!(without_sub.alignment, action.alignment);
        assert_eq!(without_sub.source, SliderSource::BaseGenre);

        // Compatible pair without a combination row.
        assert!(catalog.combination_for("action", "racing").is_none());
        assert_eq!(engine.effective_sliders(action, Some("racing")), without_sub);

        // Unknown subgenre id.
        assert_eq!(engine.effective_sliders(action, Some("nonexistent")), without_sub);
    }

    #[test]
    fn test_fallback_law_holds_for_every_pair() {
        let catalog = builtin();
        let engine = catalog.engine();

        for main in catalog.genres() {
            let base = engine.effective_sliders(main, None);
            for sub in catalog.genres() {
                let effective = engine.effective_sliders(main, Some(sub.id.as_str()));
                match catalog.combination_for(main.id.as_str(), sub.id.as_str()) {
                    Some(combo) => {
                        assert_eq!(effective.sliders, combo.sliders);
                        assert_eq!(effective.alignment, combo.alignment);
                    }
                    None => assert_eq!(effective, base),
                }
                assert_eq!(effective.design_focus, main.design_focus);
            }
        }
    }

    #[test]
    fn test_override_ignores_base_sliders() {
        let catalog = builtin();
        let combo = catalog.combination_for("action", "adventure").unwrap().clone();

        let mut genres = catalog.genres().to_vec();
        genres[0].sliders.game_length = 0;
        genres[0].alignment.cruelty = 0;
        let altered =
            Catalog::from_parts(genres, catalog.topics().to_vec(), catalog.combinations().to_vec())
                .unwrap();

        let action = altered.genre_by_id("action").unwrap();
        let effective = altered.engine().effective_sliders(action, Some("adventure"));
        assert_eq!(effective.sliders, combo.sliders);
        assert_eq!(effective.alignment, combo.alignment);
    }

    #[test]
    fn test_absence_propagates() {
        let catalog = builtin();
        let engine = catalog.engine();

        assert!(engine.derive(None, None).is_none());
        assert!(engine.derive(None, Some("adventure")).is_none());
        assert!(engine.derive(catalog.genre_by_id("action"), None).is_some());
    }

    #[test]
    fn test_report() {
        let catalog = builtin();
        let engine = catalog.engine();
        let action = catalog.genre_by_id("action");

        assert_eq!(engine.report(action, None, None), None);
        assert_eq!(engine.report(None, Some("adventure"), Some("zombies")), None);

        let report = engine.report(action, Some("puzzle"), Some("zombies")).unwrap();
        assert_eq!(report.subgenre_match, Some(false));
        assert_eq!(report.topic_match, Some(true));

        let topic_only = engine.report(action, None, Some("zoo")).unwrap();
        assert_eq!(topic_only.subgenre_match, None);
        assert_eq!(topic_only.topic_match, Some(false));
    }
}
