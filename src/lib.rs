//! WPanel - a minimal clock panel for GTK4 desktops.
//!
//! Shows a borderless window sized like a screen panel with a centered
//! label that is rewritten every second with the local time as `HH:MM:SS`.
//!
//! - Toolkit-free clock refresh loop
//! - Monitor placement with fixed fallbacks
//! - Stylesheet generated from config or loaded from a file, reloaded live
//!
//! # Quick Start
//!
//! ```rust
//! use wpanel::clock::{ClockRefresh, SystemClock};
//!
//! let refresh = ClockRefresh::new(SystemClock);
//! assert_eq!(refresh.text().len(), 8);
//! ```

/// Clock refresh loop and display state.
pub mod clock;

/// Configuration schema and loading.
pub mod config;

/// Error types and result alias.
pub mod error;

/// File watching for stylesheet reloads.
pub mod file_watcher;

/// Panel size and position.
pub mod placement;

/// Panel stylesheet.
pub mod stylesheet;

/// Logging setup.
pub mod tracing_config;

/// GTK presentation shell.
pub mod ui;

pub use error::{PanelError, Result};
