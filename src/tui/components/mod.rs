//! # TUI Components
//!
//! All UI pieces of the terminal screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `Header`: window dots, host, theme name and clock
//! - `Prompt`: the live input line
//! - `Splash`: boot screen while the loader runs
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `OutputView`: scrollable output with layout caching; its persistent
//!   `OutputViewState` handles scroll events
//!
//! Components receive external data as props, never by reaching into `App`,
//! so each one can be rendered on a `TestBackend` in isolation.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Top bar)
//! ├── output_view.rs   (Scrollable output + layout cache)
//! ├── prompt.rs        (Input line)
//! └── splash.rs        (Boot screen)
//! ```

pub mod header;
pub mod output_view;
pub mod prompt;
pub mod splash;

pub use header::Header;
pub use output_view::{OutputView, OutputViewState};
pub use prompt::Prompt;
pub use splash::Splash;
