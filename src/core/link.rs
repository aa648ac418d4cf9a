//! # Link Opener
//!
//! The one outward capability the engine needs: "open this URL in a new
//! context". What happens afterwards is not the engine's business, so there
//! is no result to report back.

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}
