//! Genre definitions.

use serde::{Deserialize, Serialize};

use super::{AlignmentSliders, DesignFocus, GameSliders, GenreId};
use crate::mechanics::TargetAudience;

/// A game genre as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub target_audience: Vec<TargetAudience>,

    pub sliders: GameSliders,
    pub alignment: AlignmentSliders,
    pub design_focus: DesignFocus,

    /// Genres that may be picked as a subgenre of this one. Not symmetric.
    #[serde(default)]
    pub compatible_subgenres: Vec<GenreId>,
}

impl Genre {
    /// Check whether `candidate` is listed as a compatible subgenre.
    pub fn accepts_subgenre(&self, candidate: &str) -> bool {
        self.compatible_subgenres
            .iter()
            .any(|id| id.as_str() == candidate)
    }

    /// Check whether the genre targets a given audience.
    pub fn targets(&self, audience: TargetAudience) -> bool {
        self.target_audience.contains(&audience)
    }

    /// Every audience group paired with whether this genre targets it.
    pub fn audience_flags(&self) -> [(TargetAudience, bool); 5] {
        TargetAudience::ALL.map(|audience| (audience, self.targets(audience)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platformer() -> Genre {
        Genre {
            id: GenreId::from("platformer"),
            name: "Platformer".to_string(),
            target_audience: vec![TargetAudience::Everyone, TargetAudience::Children],
            sliders: GameSliders {
                game_length: 4,
                game_depth: 3,
                beginner_friendliness: 8,
                innovation: 5,
                story: 3,
                character_design: 6,
                level_design: 9,
                mission_design: 5,
            },
            alignment: AlignmentSliders {
                hardcore: 7,
                cruelty: 2,
                difficulty: 6,
            },
            design_focus: DesignFocus {
                gameplay: 50,
                graphics: 30,
                sound: 15,
                tech: 5,
            },
            compatible_subgenres: vec![GenreId::from("puzzle"), GenreId::from("skill")],
        }
    }

    #[test]
    fn test_accepts_subgenre() {
        let genre = platformer();
        assert!(genre.accepts_subgenre("puzzle"));
        assert!(!genre.accepts_subgenre("racing"));
        assert!(!genre.accepts_subgenre("platformer"));
    }

    #[test]
    fn test_audience_flags() {
        let flags = platformer().audience_flags();

        assert_eq!(flags[0], (TargetAudience::Everyone, true));
        assert_eq!(flags[1], (TargetAudience::Children, true));
        assert_eq!(flags[3], (TargetAudience::Adults, false));
        assert_eq!(flags.iter().filter(|(_, on)| *on).count(), 2);
    }
}
