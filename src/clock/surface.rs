use chrono::NaiveTime;
use tracing::trace;

use super::{ClockSource, TIME_FORMAT};

/// Formats a time of day as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// The text state behind the clock label.
///
/// Holds exactly one value, replaced on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySurface {
    current_time_text: String,
}

impl DisplaySurface {
    /// Creates an empty surface. The first refresh fills it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written by the most recent refresh.
    pub fn text(&self) -> &str {
        &self.current_time_text
    }

    /// Reads `clock` and overwrites the text with the formatted time.
    pub fn refresh<C>(&mut self, clock: &C) -> &str
    where
        C: ClockSource + ?Sized,
    {
        self.current_time_text = format_time(clock.now());
        trace!(time = %self.current_time_text, "Clock tick");
        &self.current_time_text
    }
}

/// A clock source paired with the surface it refreshes.
#[derive(Debug)]
pub struct ClockRefresh<C> {
    clock: C,
    surface: DisplaySurface,
}

impl<C: ClockSource> ClockRefresh<C> {
    /// Creates the loop state and runs the initial tick.
    pub fn new(clock: C) -> Self {
        let mut refresh = Self {
            clock,
            surface: DisplaySurface::new(),
        };
        refresh.tick();
        refresh
    }

    /// Runs one tick and returns the new text.
    pub fn tick(&mut self) -> &str {
        self.surface.refresh(&self.clock)
    }

    /// Current text of the surface.
    pub fn text(&self) -> &str {
        self.surface.text()
    }
}
