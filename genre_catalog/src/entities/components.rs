//! Fixed-shape numeric records shared by genres and combinations.

use serde::{Deserialize, Serialize};

use crate::mechanics::{AlignmentAxis, DesignArea, SliderKind};

/// Highest value a slider or alignment axis may hold.
pub const SLIDER_MAX: u8 = 10;

/// Gameplay-attribute sliders, each in 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSliders {
    pub game_length: u8,
    pub game_depth: u8,
    pub beginner_friendliness: u8,
    pub innovation: u8,
    pub story: u8,
    pub character_design: u8,
    pub level_design: u8,
    pub mission_design: u8,
}

impl GameSliders {
    /// Value of a single slider.
    pub fn value(&self, kind: SliderKind) -> u8 {
        match kind {
            SliderKind::GameLength => self.game_length,
            SliderKind::GameDepth => self.game_depth,
            SliderKind::BeginnerFriendliness => self.beginner_friendliness,
            SliderKind::Innovation => self.innovation,
            SliderKind::Story => self.story,
            SliderKind::CharacterDesign => self.character_design,
            SliderKind::LevelDesign => self.level_design,
            SliderKind::MissionDesign => self.mission_design,
        }
    }

    /// Iterate over all sliders in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SliderKind, u8)> + '_ {
        SliderKind::ALL.into_iter().map(move |kind| (kind, self.value(kind)))
    }

    /// Sliders whose value exceeds [`SLIDER_MAX`].
    pub fn out_of_range(&self) -> Vec<SliderKind> {
        self.iter()
            .filter(|(_, value)| *value > SLIDER_MAX)
            .map(|(kind, _)| kind)
            .collect()
    }
}

/// Design-direction scale, each axis in 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentSliders {
    pub hardcore: u8,
    pub cruelty: u8,
    pub difficulty: u8,
}

impl AlignmentSliders {
    /// Value of a single axis.
    pub fn value(&self, axis: AlignmentAxis) -> u8 {
        match axis {
            AlignmentAxis::Hardcore => self.hardcore,
            AlignmentAxis::Cruelty => self.cruelty,
            AlignmentAxis::Difficulty => self.difficulty,
        }
    }

    /// Iterate over all axes in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AlignmentAxis, u8)> + '_ {
        AlignmentAxis::ALL.into_iter().map(move |axis| (axis, self.value(axis)))
    }

    /// Axes whose value exceeds [`SLIDER_MAX`].
    pub fn out_of_range(&self) -> Vec<AlignmentAxis> {
        self.iter()
            .filter(|(_, value)| *value > SLIDER_MAX)
            .map(|(axis, _)| axis)
            .collect()
    }
}

/// Percentage split of development effort. Shares sum to 100 in a valid catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignFocus {
    pub gameplay: u8,
    pub graphics: u8,
    pub sound: u8,
    pub tech: u8,
}

impl DesignFocus {
    /// Percentage given to one area.
    pub fn share(&self, area: DesignArea) -> u8 {
        match area {
            DesignArea::Gameplay => self.gameplay,
            DesignArea::Graphics => self.graphics,
            DesignArea::Sound => self.sound,
            DesignArea::Tech => self.tech,
        }
    }

    /// Sum of all shares.
    pub fn total(&self) -> u16 {
        DesignArea::ALL
            .iter()
            .map(|area| u16::from(self.share(*area)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sliders() -> GameSliders {
        GameSliders {
            game_length: 5,
            game_depth: 3,
            beginner_friendliness: 7,
            innovation: 5,
            story: 3,
            character_design: 5,
            level_design: 7,
            mission_design: 6,
        }
    }

    #[test]
    fn test_slider_values() {
        let sliders = sliders();

        assert_eq!(sliders.value(SliderKind::GameLength), 5);
        assert_eq!(sliders.value(SliderKind::BeginnerFriendliness), 7);
        assert_eq!(sliders.value(SliderKind::MissionDesign), 6);
        assert_eq!(sliders.iter().count(), 8);
        assert!(sliders.out_of_range().is_empty());
    }

    #[test]
    fn test_out_of_range_sliders() {
        let sliders = GameSliders {
            story: 11,
            ..sliders()
        };
        assert_eq!(sliders.out_of_range(), vec![SliderKind::Story]);

        let alignment = AlignmentSliders {
            hardcore: 4,
            cruelty: 12,
            difficulty: 10,
        };
        assert_eq!(alignment.out_of_range(), vec![AlignmentAxis::Cruelty]);
    }

    #[test]
    fn test_design_focus_total() {
        let focus = DesignFocus {
            gameplay: 45,
            graphics: 30,
            sound: 15,
            tech: 10,
        };
        assert_eq!(focus.total(), 100);
        assert_eq!(focus.share(DesignArea::Graphics), 30);

        let short = DesignFocus { tech: 0, ..focus };
        assert_eq!(short.total(), 90);
    }
}
