//! Data-integrity checks over a built catalog.

use std::collections::HashSet;

use super::Catalog;
use crate::entities::{AlignmentSliders, GameSliders, Genre, GenreCombination, Topic};
use crate::error::{IntegrityViolation, Result};

impl Catalog {
    /// Check every integrity rule and return the first violation.
    pub fn validate(&self) -> Result<()> {
        match self.integrity_violations().into_iter().next() {
            Some(violation) => Err(violation.into()),
            None => Ok(()),
        }
    }

    /// Collect all integrity violations in table order.
    pub fn integrity_violations(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for genre in self.genres() {
            self.check_genre(genre, &mut violations);
        }
        for topic in self.topics() {
            self.check_topic(topic, &mut violations);
        }
        for combo in self.combinations() {
            self.check_combination(combo, &mut violations);
        }

        violations
    }

    fn check_genre(&self, genre: &Genre, violations: &mut Vec<IntegrityViolation>) {
        for (slider, value) in slider_overflow(&genre.sliders, &genre.alignment) {
            violations.push(IntegrityViolation::SliderOutOfRange {
                genre: genre.id.clone(),
                slider,
                value,
            });
        }

        let total = genre.design_focus.total();
        if total != 100 {
            violations.push(IntegrityViolation::DesignFocusTotal {
                genre: genre.id.clone(),
                total,
            });
        }

        if genre.target_audience.is_empty() {
            violations.push(IntegrityViolation::EmptyAudience(genre.id.clone()));
        }
        let distinct: HashSet<_> = genre.target_audience.iter().collect();
        if distinct.len() != genre.target_audience.len() {
            violations.push(IntegrityViolation::RepeatedAudience(genre.id.clone()));
        }

        for sub in &genre.compatible_subgenres {
            if *sub == genre.id {
                violations.push(IntegrityViolation::SelfSubgenre(genre.id.clone()));
            } else if !self.has_genre(sub.as_str()) {
                violations.push(IntegrityViolation::UnknownSubgenre {
                    genre: genre.id.clone(),
                    subgenre: sub.clone(),
                });
            }
        }
    }

    fn check_topic(&self, topic: &Topic, violations: &mut Vec<IntegrityViolation>) {
        if topic.compatible_genres.is_empty() {
            violations.push(IntegrityViolation::EmptyTopicGenres(topic.id.clone()));
        }

        for genre in &topic.compatible_genres {
            if !self.has_genre(genre.as_str()) {
                violations.push(IntegrityViolation::UnknownTopicGenre {
                    topic: topic.id.clone(),
                    genre: genre.clone(),
                });
            }
        }
    }

    fn check_combination(&self, combo: &GenreCombination, violations: &mut Vec<IntegrityViolation>) {
        for missing in [&combo.main_genre, &combo.subgenre] {
            if !self.has_genre(missing.as_str()) {
                violations.push(IntegrityViolation::UnknownCombinationGenre {
                    main: combo.main_genre.clone(),
                    sub: combo.subgenre.clone(),
                    missing: missing.clone(),
                });
            }
        }

        for (slider, value) in slider_overflow(&combo.sliders, &combo.alignment) {
            violations.push(IntegrityViolation::CombinationSliderOutOfRange {
                main: combo.main_genre.clone(),
                sub: combo.subgenre.clone(),
                slider,
                value,
            });
        }
    }
}

/// Slider and alignment entries above the allowed maximum, by key.
fn slider_overflow(sliders: &GameSliders, alignment: &AlignmentSliders) -> Vec<(&'static str, u8)> {
    let over_sliders = sliders
        .out_of_range()
        .into_iter()
        .map(|kind| (kind.key(), sliders.value(kind)));
    let over_axes = alignment
        .out_of_range()
        .into_iter()
        .map(|axis| (axis.key(), alignment.value(axis)));
    over_sliders.chain(over_axes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GenreId, TopicId};
    use crate::error::CatalogError;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn rebuild(
        genres: Vec<Genre>,
        topics: Vec<Topic>,
        combinations: Vec<GenreCombination>,
    ) -> Catalog {
        Catalog::from_parts(genres, topics, combinations).unwrap()
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = builtin();
        assert_eq!(catalog.integrity_violations(), Vec::new());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_detects_bad_design_focus() {
        let catalog = builtin();
        let mut genres = catalog.genres().to_vec();
        genres[0].design_focus.tech += 5;

        let broken = rebuild(genres, Vec::new(), Vec::new());
        assert_eq!(
            broken.validate(),
            Err(CatalogError::Integrity(IntegrityViolation::DesignFocusTotal {
                genre: GenreId::from("action"),
                total: 105,
            }))
        );
    }

    #[test]
    fn test_detects_slider_out_of_range() {
        let catalog = builtin();
        let mut genres = catalog.genres().to_vec();
        genres[1].sliders.story = 11;
        genres[1].alignment.difficulty = 14;

        let violations = rebuild(genres, Vec::new(), Vec::new()).integrity_violations();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&IntegrityViolation::SliderOutOfRange {
            genre: GenreId::from("adventure"),
            slider: "story",
            value: 11,
        }));
        assert!(violations.contains(&IntegrityViolation::SliderOutOfRange {
            genre: GenreId::from("adventure"),
            slider: "difficulty",
            value: 14,
        }));
    }

    #[test]
    fn test_detects_audience_problems() {
        let catalog = builtin();
        let mut genres = catalog.genres().to_vec();
        genres[0].target_audience.clear();
        let repeated = genres[1].target_audience[0];
        genres[1].target_audience.push(repeated);

        let violations = rebuild(genres, Vec::new(), Vec::new()).integrity_violations();
        assert!(violations.contains(&IntegrityViolation::EmptyAudience(GenreId::from("action"))));
        assert!(violations.contains(&IntegrityViolation::RepeatedAudience(GenreId::from("adventure"))));
    }

    #[test]
    fn test_detects_dangling_and_self_subgenres() {
        let catalog = builtin();
        let mut genres = catalog.genres().to_vec();
        genres[0].compatible_subgenres.push(GenreId::from("action"));
        genres[0].compatible_subgenres.push(GenreId::from("dance"));

        let violations = rebuild(genres, Vec::new(), Vec::new()).integrity_violations();
        assert_eq!(
            violations,
            vec![
                IntegrityViolation::SelfSubgenre(GenreId::from("action")),
                IntegrityViolation::UnknownSubgenre {
                    genre: GenreId::from("action"),
                    subgenre: GenreId::from("dance"),
                },
            ]
        );
    }

    #[test]
    fn test_detects_topic_problems() {
        let catalog = builtin();
        let mut topics = catalog.topics().to_vec();
        topics[0].compatible_genres.clear();
        topics[1].compatible_genres.push(GenreId::from("dance"));

        let broken = rebuild(catalog.genres().to_vec(), topics.clone(), Vec::new());
        let violations = broken.integrity_violations();
        assert!(violations.contains(&IntegrityViolation::EmptyTopicGenres(topics[0].id.clone())));
        assert!(violations.contains(&IntegrityViolation::UnknownTopicGenre {
            topic: topics[1].id.clone(),
            genre: GenreId::from("dance"),
        }));
    }

    #[test]
    fn test_detects_combination_problems() {
        let catalog = builtin();
        let mut combinations = catalog.combinations().to_vec();
        combinations[0].subgenre = GenreId::from("dance");
        combinations[1].sliders.innovation = 20;

        let broken = rebuild(catalog.genres().to_vec(), Vec::new(), combinations.clone());
        let violations = broken.integrity_violations();
        assert!(violations.contains(&IntegrityViolation::UnknownCombinationGenre {
            main: combinations[0].main_genre.clone(),
            sub: GenreId::from("dance"),
            missing: GenreId::from("dance"),
        }));
        assert!(violations.contains(&IntegrityViolation::CombinationSliderOutOfRange {
            main: combinations[1].main_genre.clone(),
            sub: combinations[1].subgenre.clone(),
            slider: "innovation",
            value: 20,
        }));
    }

    #[test]
    fn test_violation_message() {
        let violation = IntegrityViolation::EmptyTopicGenres(TopicId::from("zoo"));
        assert_eq!(violation.to_string(), "topic zoo: no compatible genres");
    }
}
