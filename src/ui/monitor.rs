use relm4::gtk::{gdk, prelude::*};

use crate::placement::{MonitorGeometry, MonitorProbe};

/// Queries monitor geometry from a GDK display.
///
/// GTK4 has no primary monitor, so the first monitor of the display is used.
pub struct DisplayMonitorProbe {
    display: gdk::Display,
}

impl DisplayMonitorProbe {
    /// Creates a probe for `display`.
    pub fn new(display: gdk::Display) -> Self {
        Self { display }
    }
}

impl MonitorProbe for DisplayMonitorProbe {
    fn primary_geometry(&self) -> Option<MonitorGeometry> {
        let monitor = self
            .display
            .monitors()
            .item(0)?
            .downcast::<gdk::Monitor>()
            .ok()?;
        let rect = monitor.geometry();

        Some(MonitorGeometry {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}
