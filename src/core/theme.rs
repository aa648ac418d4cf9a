//! # Themes
//!
//! Named style bundles. Pure configuration: the engine only stores which one
//! is active; colours live in the TUI palette.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Matrix,
    Cyberpunk,
    Retro,
    Ocean,
    Default,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Matrix,
        Theme::Cyberpunk,
        Theme::Retro,
        Theme::Ocean,
        Theme::Default,
    ];

    /// Identifier used on the command line (`theme <id>`).
    pub fn id(self) -> &'static str {
        match self {
            Theme::Matrix => "matrix",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Retro => "retro",
            Theme::Ocean => "ocean",
            Theme::Default => "default",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Matrix => "Matrix Green",
            Theme::Cyberpunk => "Cyberpunk Purple",
            Theme::Retro => "Retro Amber",
            Theme::Ocean => "Ocean Blue",
            Theme::Default => "Default",
        }
    }

    /// Exact, already-normalized id lookup.
    pub fn from_id(id: &str) -> Option<Theme> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Comma-separated list of every id, for help and error text.
    pub fn id_list() -> String {
        Self::ALL.map(Theme::id).join(", ")
    }
}
