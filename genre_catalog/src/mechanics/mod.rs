//! Calculator vocabulary: audiences, slider kinds, direction axes, design areas.

use serde::{Deserialize, Serialize};

/// Audience groups a genre can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAudience {
    Everyone,
    Children,
    Teenagers,
    Adults,
    Seniors,
}

impl TargetAudience {
    /// All audience groups in display order.
    pub const ALL: [TargetAudience; 5] = [
        TargetAudience::Everyone,
        TargetAudience::Children,
        TargetAudience::Teenagers,
        TargetAudience::Adults,
        TargetAudience::Seniors,
    ];

    /// Get the lowercase name used in the data tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAudience::Everyone => "everyone",
            TargetAudience::Children => "children",
            TargetAudience::Teenagers => "teenagers",
            TargetAudience::Adults => "adults",
            TargetAudience::Seniors => "seniors",
        }
    }
}

/// The eight gameplay-attribute sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderKind {
    GameLength,
    GameDepth,
    BeginnerFriendliness,
    Innovation,
    Story,
    CharacterDesign,
    LevelDesign,
    MissionDesign,
}

impl SliderKind {
    /// All sliders in display order.
    pub const ALL: [SliderKind; 8] = [
        SliderKind::GameLength,
        SliderKind::GameDepth,
        SliderKind::BeginnerFriendliness,
        SliderKind::Innovation,
        SliderKind::Story,
        SliderKind::CharacterDesign,
        SliderKind::LevelDesign,
        SliderKind::MissionDesign,
    ];

    /// Stable key, matching the field names in the catalog tables.
    pub fn key(&self) -> &'static str {
        match self {
            SliderKind::GameLength => "game_length",
            SliderKind::GameDepth => "game_depth",
            SliderKind::BeginnerFriendliness => "beginner_friendliness",
            SliderKind::Innovation => "innovation",
            SliderKind::Story => "story",
            SliderKind::CharacterDesign => "character_design",
            SliderKind::LevelDesign => "level_design",
            SliderKind::MissionDesign => "mission_design",
        }
    }
}

/// Axes of the design-direction scale. Low values lean to the left pole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentAxis {
    Hardcore,
    Cruelty,
    Difficulty,
}

impl AlignmentAxis {
    pub const ALL: [AlignmentAxis; 3] = [
        AlignmentAxis::Hardcore,
        AlignmentAxis::Cruelty,
        AlignmentAxis::Difficulty,
    ];

    /// Get the field name of this axis in the data tables.
    pub fn key(&self) -> &'static str {
        match self {
            AlignmentAxis::Hardcore => "hardcore",
            AlignmentAxis::Cruelty => "cruelty",
            AlignmentAxis::Difficulty => "difficulty",
        }
    }

    /// Left (value 0) and right (value 10) pole descriptions.
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            AlignmentAxis::Hardcore => ("core gamers", "casual gamers"),
            AlignmentAxis::Cruelty => ("nonviolent", "explicit content"),
            AlignmentAxis::Difficulty => ("easy", "hard"),
        }
    }
}

/// Areas of the design-focus percentage split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignArea {
    Gameplay,
    Graphics,
    Sound,
    Tech,
}

impl DesignArea {
    pub const ALL: [DesignArea; 4] = [
        DesignArea::Gameplay,
        DesignArea::Graphics,
        DesignArea::Sound,
        DesignArea::Tech,
    ];
}

/// Coarse band of a 0..=10 slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderLevel {
    /// 0-3.
    Low,
    /// 4-6.
    Medium,
    /// 7-10.
    High,
}

impl SliderLevel {
    /// Classify a slider value.
    pub fn from_value(value: u8) -> Self {
        match value {
            0..=3 => SliderLevel::Low,
            4..=6 => SliderLevel::Medium,
            _ => SliderLevel::High,
        }
    }
}
