//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::core::content::Content;
use crate::core::link::LinkOpener;
use crate::core::state::App;

/// Remembers every URL it was asked to open instead of opening it.
#[derive(Default)]
pub struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.urls.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        if let Ok(mut urls) = self.urls.lock() {
            urls.push(url.to_string());
        }
    }
}

/// Creates a test App with built-in content, default pacing, no splash and
/// no startup delay. The opener handle lets tests inspect opened links.
pub fn test_app() -> (App, Arc<RecordingOpener>) {
    let opener = Arc::new(RecordingOpener::default());
    let content = Content::builtin().expect("built-in content parses");
    (App::new(opener.clone(), content), opener)
}
