//! Panel size and position.
//!
//! Monitor geometry is queried through [`MonitorProbe`] so the fallback
//! policy can be exercised without a display server.

use tracing::{debug, warn};

use crate::config::PanelConfig;

/// Geometry of a single monitor in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorGeometry {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Where the placement values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSource {
    /// Width and origin of a detected monitor.
    Monitor,
    /// Configured fallback constants.
    Fallback,
}

/// Resolved panel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPlacement {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
    /// Panel width.
    pub width: i32,
    /// Panel height.
    pub height: i32,
    /// Origin of `x`, `y` and `width`.
    pub source: PlacementSource,
}

/// Best-effort monitor lookup.
pub trait MonitorProbe {
    /// Geometry of the monitor the panel should span, if any is available.
    fn primary_geometry(&self) -> Option<MonitorGeometry>;
}

/// Computes the panel rectangle, falling back to configured constants.
///
/// A missing monitor is logged and never fails.
pub fn resolve_placement<P>(probe: &P, config: &PanelConfig) -> PanelPlacement
where
    P: MonitorProbe + ?Sized,
{
    let fallback = PanelPlacement {
        x: config.fallback_x,
        y: config.fallback_y,
        width: config.fallback_width,
        height: config.height,
        source: PlacementSource::Fallback,
    };

    if !config.follow_monitor {
        debug!("Monitor following disabled, using fallback placement");
        return fallback;
    }

    match probe.primary_geometry() {
        Some(geometry) => PanelPlacement {
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: config.height,
            source: PlacementSource::Monitor,
        },
        None => {
            warn!(
                width = fallback.width,
                x = fallback.x,
                y = fallback.y,
                "Could not determine monitor geometry, using default size and position"
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoMonitor;

    impl MonitorProbe for NoMonitor {
        fn primary_geometry(&self) -> Option<MonitorGeometry> {
            None
        }
    }

    struct FixedMonitor(MonitorGeometry);

    impl MonitorProbe for FixedMonitor {
        fn primary_geometry(&self) -> Option<MonitorGeometry> {
            Some(self.0)
        }
    }

    const WIDE: MonitorGeometry = MonitorGeometry {
        x: 1920,
        y: 0,
        width: 2560,
        height: 1440,
    };

    #[test]
    fn missing_monitor_uses_fallback() {
        let placement = resolve_placement(&NoMonitor, &PanelConfig::default());

        assert_eq!(
            placement,
            PanelPlacement {
                x: 50,
                y: 50,
                width: 300,
                height: 100,
                source: PlacementSource::Fallback,
            }
        );
    }

    #[test]
    fn detected_monitor_sets_width_and_origin() {
        let placement = resolve_placement(&FixedMonitor(WIDE), &PanelConfig::default());

        assert_eq!(placement.source, PlacementSource::Monitor);
        assert_eq!((placement.x, placement.y), (1920, 0));
        assert_eq!(placement.width, 2560);
        assert_eq!(placement.height, 100);
    }

    #[test]
    fn disabled_following_ignores_monitor() {
        let config = PanelConfig {
            follow_monitor: false,
            fallback_width: 640,
            ..PanelConfig::default()
        };
        let placement = resolve_placement(&FixedMonitor(WIDE), &config);

        assert_eq!(placement.source, PlacementSource::Fallback);
        assert_eq!(placement.width, 640);
    }

    #[test]
    fn height_comes_from_config() {
        let config = PanelConfig {
            height: 32,
            ..PanelConfig::default()
        };

        assert_eq!(resolve_placement(&FixedMonitor(WIDE), &config).height, 32);
        assert_eq!(resolve_placement(&NoMonitor, &config).height, 32);
    }
}
