//! # Core Application Logic
//!
//! The terminal engine: what gets printed, in what order, and when.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Scheduler (timers)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! Time is virtual: the adapter feeds `Action::Tick(now_ms)` and every
//! animation step, splash transition, and delayed link fires from the
//! [`timer::Scheduler`] in deadline order.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`commands`]: The command table and interpreter
//! - [`output`] / [`typing`]: Line queue and the typed-text renderer
//! - [`input`] / [`history`]: Live input line and recall
//! - [`loader`]: Boot splash
//! - [`content`] / [`config`]: Data loaded at startup

pub mod action;
pub mod commands;
pub mod config;
pub mod content;
pub mod history;
pub mod input;
pub mod line;
pub mod link;
pub mod loader;
pub mod output;
pub mod state;
pub mod theme;
pub mod timer;
pub mod typing;
