//! Clock refresh loop.
//!
//! Reads local wall-clock time once per tick and rewrites the single text
//! field of a [`DisplaySurface`]. The GTK timer lives in the `ui` module;
//! everything here is toolkit-free so ticks can be driven by a test clock.

mod source;
mod surface;

use std::time::Duration;

pub use source::{ClockSource, SystemClock};
pub use surface::{ClockRefresh, DisplaySurface, format_time};

/// Interval between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// strftime pattern of the displayed time.
pub const TIME_FORMAT: &str = "%H:%M:%S";
