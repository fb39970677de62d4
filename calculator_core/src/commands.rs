//! The command surface as data.

use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// Everything a presentation layer can ask the calculator to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SetMainGenre { id: Option<String> },
    SetSubgenre { id: Option<String> },
    SetTheme { id: Option<String> },
    SetThemeSearchQuery { query: String },
    CommitToHistory,
    LoadFromHistory { entry: HistoryEntry },
    Reset,
    ClearHistory,
    SetAlwaysOnTop { enabled: bool },
    ToggleAlwaysOnTop,
    SetOpacity { opacity: f64 },
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetMainGenre { .. } => "set_main_genre",
            Command::SetSubgenre { .. } => "set_subgenre",
            Command::SetTheme { .. } => "set_theme",
            Command::SetThemeSearchQuery { .. } => "set_theme_search_query",
            Command::CommitToHistory => "commit_to_history",
            Command::LoadFromHistory { .. } => "load_from_history",
            Command::Reset => "reset",
            Command::ClearHistory => "clear_history",
            Command::SetAlwaysOnTop { .. } => "set_always_on_top",
            Command::ToggleAlwaysOnTop => "toggle_always_on_top",
            Command::SetOpacity { .. } => "set_opacity",
        }
    }
}
