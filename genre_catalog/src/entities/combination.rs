//! Slider overrides for ordered genre pairs.

use serde::{Deserialize, Serialize};

use super::{AlignmentSliders, GameSliders, GenreId};

/// Override sliders for a (main genre, subgenre) pair.
///
/// A combination replaces the main genre's sliders and alignment outright;
/// there is no blending and no design-focus override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCombination {
    pub main_genre: GenreId,
    pub subgenre: GenreId,
    pub sliders: GameSliders,
    pub alignment: AlignmentSliders,
}

impl GenreCombination {
    /// Check whether this row applies to the ordered pair.
    pub fn is_for(&self, main_genre: &str, subgenre: &str) -> bool {
        self.main_genre.as_str() == main_genre && self.subgenre.as_str() == subgenre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_ordered() {
        let combo = GenreCombination {
            main_genre: GenreId::from("action"),
            subgenre: GenreId::from("adventure"),
            sliders: GameSliders {
                game_length: 6,
                game_depth: 4,
                beginner_friendliness: 6,
                innovation: 6,
                story: 6,
                character_design: 6,
                level_design: 8,
                mission_design: 7,
            },
            alignment: AlignmentSliders {
                hardcore: 5,
                cruelty: 5,
                difficulty: 5,
            },
        };

        assert!(combo.is_for("action", "adventure"));
        assert!(!combo.is_for("adventure", "action"));
    }
}
