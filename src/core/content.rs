//! # Portfolio Content
//!
//! Every canned response is data, not code. The built-in table lives in
//! `assets/portfolio.toml` and is compiled into the binary; a user file with
//! the same shape replaces it wholesale. Content is parsed once at startup
//! and treated as an immutable lookup table from then on.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::core::config::ConfigError;
use crate::core::line::Line;

const BUILTIN: &str = include_str!("../../assets/portfolio.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub tagline: Option<String>,
    /// ASCII art printed by `welcome`
    #[serde(default)]
    pub banner: Vec<String>,
    /// Lines printed after the banner
    #[serde(default)]
    pub welcome: Vec<String>,
    /// Named canned responses (`about`, `skills`, ...)
    #[serde(default)]
    pub sections: BTreeMap<String, Vec<Line>>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Boot splash steps
    #[serde(default)]
    pub loader: Vec<LoaderStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_host")]
    pub host: String,
    pub name: String,
    pub email: String,
    pub gui_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderStep {
    pub message: String,
    /// How long the finished message stays up before the next step
    pub hold_ms: u64,
}

fn default_user() -> String {
    "visitor".to_string()
}

fn default_host() -> String {
    "portfolio".to_string()
}

impl Content {
    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(BUILTIN)
    }

    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(ConfigError::Parse)
    }

    /// Load a content file, falling back to the built-in table if it can't
    /// be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Self::builtin();
        };

        match fs::read_to_string(path)
            .map_err(ConfigError::Io)
            .and_then(|s| Self::parse(&s))
        {
            Ok(content) => {
                info!("Loaded portfolio content from {}", path.display());
                Ok(content)
            }
            Err(e) => {
                warn!(
                    "Failed to load content file {}: {}; using built-in content",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// Lines of a named section, empty if the section doesn't exist.
    pub fn section(&self, name: &str) -> &[Line] {
        self.sections.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `user@host:~$ `, the prompt shown before command lines.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$ ", self.profile.user, self.profile.host)
    }
}
