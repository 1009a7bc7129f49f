use chrono::{Local, NaiveTime};

/// A source of the current local time of day.
pub trait ClockSource {
    /// Returns the current wall-clock time.
    fn now(&self) -> NaiveTime;
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

impl<F> ClockSource for F
where
    F: Fn() -> NaiveTime,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}
