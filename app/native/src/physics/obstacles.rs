//! Static obstacles and world regions consumed by the plane.
//!
//! All values here are in plane coordinates: x grows to the right and y grows
//! upward, so a screen row `r` maps to `y = -r`.

use serde::{Deserialize, Serialize};

use crate::platform::MonitorInfo;

// ============================================================================
// World Regions
// ============================================================================

/// A rectangular region the body may occupy. `top` is greater than `bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl RectArea {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    /// Builds the region covered by a monitor, reserving `margin_bottom` pixels
    /// at its lower edge.
    #[must_use]
    pub fn from_monitor(monitor: &MonitorInfo, margin_bottom: f64) -> Self {
        let left = monitor.virtual_origin.0;
        let right = left + monitor.size.0;
        let top = -monitor.virtual_origin.1;
        let bottom = top - monitor.size.1 + margin_bottom;
        Self::new(left, right, top, bottom)
    }

    /// Whether the vertical line at `x` crosses this region.
    #[must_use]
    pub fn spans_x(&self, x: f64) -> bool { self.left <= x && x <= self.right }
}

// ============================================================================
// Barriers
// ============================================================================

/// A horizontal segment the body can land on.
///
/// Ordinary barriers are one-way platforms: the body lands on them only when
/// its bottom edge crosses the segment from above. Ground barriers behave
/// like the world floor and stop the body whenever it would sink below them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barrier {
    pub y: f64,
    pub x: f64,
    pub width: f64,
    pub is_ground: bool,
}

impl Barrier {
    #[must_use]
    pub const fn new(y: f64, x: f64, width: f64, is_ground: bool) -> Self {
        Self { y, x, width, is_ground }
    }

    /// Whether the open span `(left, right)` overlaps this segment.
    #[must_use]
    pub fn overlaps(&self, left: f64, right: f64) -> bool {
        left < self.x + self.width && right > self.x
    }
}

// ============================================================================
// Point Charges
// ============================================================================

/// A repulsive source, typically centered on a peer window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointCharge {
    pub y: f64,
    pub x: f64,
    pub quantity_product: f64,
}

impl PointCharge {
    #[must_use]
    pub const fn new(y: f64, x: f64, quantity_product: f64) -> Self {
        Self { y, x, quantity_product }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_area_from_monitor_inverts_y() {
        let monitor = MonitorInfo::new(0.0, 0.0, 1920.0, 1080.0);
        let area = RectArea::from_monitor(&monitor, 0.0);
        assert_eq!(area, RectArea::new(0.0, 1920.0, 0.0, -1080.0));
    }

    #[test]
    fn test_rect_area_margin_raises_bottom() {
        let monitor = MonitorInfo::new(1920.0, 100.0, 1280.0, 1024.0);
        let area = RectArea::from_monitor(&monitor, 40.0);
        assert!((area.left - 1920.0).abs() < f64::EPSILON);
        assert!((area.right - 3200.0).abs() < f64::EPSILON);
        assert!((area.top + 100.0).abs() < f64::EPSILON);
        assert!((area.bottom + 1084.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_barrier_overlap_is_open_interval() {
        let barrier = Barrier::new(-100.0, 0.0, 500.0, false);
        assert!(barrier.overlaps(-10.0, 10.0));
        assert!(barrier.overlaps(499.0, 700.0));
        assert!(!barrier.overlaps(500.0, 700.0));
        assert!(!barrier.overlaps(-200.0, 0.0));
    }
}
