//! # Lines
//!
//! One unit of terminal output: a semantic kind plus literal text.
//! Lines are immutable once built; the fields are private and only read
//! through accessors.

use serde::Deserialize;

/// Semantic kind of a line. The renderer picks colours by kind; the typing
/// cadence also depends on it (see [`Pacing`](crate::core::typing::Pacing)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of something the visitor typed (rendered behind the prompt)
    Command,
    #[default]
    Output,
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Line {
    #[serde(default)]
    kind: LineKind,
    text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(LineKind::Info, text)
    }

    /// An empty output line, used as vertical spacing.
    pub fn blank() -> Self {
        Self::output("")
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
