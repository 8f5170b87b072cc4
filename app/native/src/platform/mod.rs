//! Platform seam between the engine and the host windowing system.
//!
//! The engine never talks to an OS API directly. Everything it needs from the
//! desktop (window list, monitor layout, placement and style commands) goes
//! through the [`WindowSystem`] and [`MonitorSource`] traits defined here.
//!
//! Screen coordinates used in this module are the host's: x grows to the
//! right, y grows downward.
//!
//! - `scene` - In-memory implementation driven by a JSON scene description

pub mod scene;

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry Types
// ============================================================================

/// A window rectangle in screen coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScreenRect {
    /// Create a new rectangle from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Horizontal extent in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 { self.right - self.left }

    /// Vertical extent in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Geometry is usable when both extents are positive.
    #[must_use]
    pub const fn is_valid(&self) -> bool { self.right > self.left && self.bottom > self.top }

    /// Center point as floating-point screen coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            f64::midpoint(f64::from(self.left), f64::from(self.right)),
            f64::midpoint(f64::from(self.top), f64::from(self.bottom)),
        )
    }

    /// Whether the given screen column lies inside the horizontal span (edges included).
    #[must_use]
    pub const fn spans_column(&self, x: i32) -> bool { self.left <= x && x <= self.right }
}

// ============================================================================
// Window Types
// ============================================================================

/// Opaque identity of a top-level window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub u64);

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A snapshot of one top-level window, produced fresh by each enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub handle: WindowHandle,
    pub title: String,
    pub rect: ScreenRect,
}

impl WindowRecord {
    #[must_use]
    pub fn new(handle: WindowHandle, title: impl Into<String>, rect: ScreenRect) -> Self {
        Self { handle, title: title.into(), rect }
    }
}

/// Z-order anchor for a placement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "handle")]
pub enum StackTarget {
    /// Place directly beneath the given window.
    Beneath(WindowHandle),
    /// No peer above us: place above everything.
    Topmost,
}

/// Extended window style bits understood by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExStyle(pub u32);

impl ExStyle {
    pub const NONE: Self = Self(0);
    pub const TOPMOST: Self = Self(0x0000_0008);
    pub const TOOLWINDOW: Self = Self(0x0000_0080);
    pub const LAYERED: Self = Self(0x0008_0000);

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool { self.0 & other.0 == other.0 }
}

impl BitOr for ExStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl BitOrAssign for ExStyle {
    fn bitor_assign(&mut self, rhs: Self) { self.0 |= rhs.0; }
}

// ============================================================================
// Monitor Types
// ============================================================================

/// A monitor in the virtual desktop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorInfo {
    /// Top-left corner in virtual screen coordinates.
    pub virtual_origin: (f64, f64),
    /// Width and height in pixels.
    pub size: (f64, f64),
}

impl MonitorInfo {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { virtual_origin: (x, y), size: (width, height) }
    }
}

// ============================================================================
// Collaborator Traits
// ============================================================================

/// Access to the host's top-level windows.
///
/// Implementations should enumerate in z-order, topmost first. Windows whose
/// geometry cannot be read should be omitted from the enumeration.
pub trait WindowSystem {
    /// Snapshot of all visible top-level windows.
    fn enumerate_windows(&self) -> Vec<WindowRecord>;

    /// Finds a window by exact title.
    fn find_window(&self, title: &str) -> Option<WindowHandle>;

    /// Whether the window currently has foreground focus.
    fn is_foreground(&self, handle: WindowHandle) -> bool;

    /// Asks the host to give the window foreground focus. May be refused.
    fn request_foreground(&mut self, handle: WindowHandle);

    fn ex_style(&self, handle: WindowHandle) -> ExStyle;

    fn set_ex_style(&mut self, handle: WindowHandle, style: ExStyle);

    /// Toggles click-through transparency.
    fn set_transparent(&mut self, handle: WindowHandle, transparent: bool);

    /// Sets window opacity in `[0, 1]`.
    fn set_alpha(&mut self, handle: WindowHandle, alpha: f64);

    /// Moves and resizes the window, placing it relative to `anchor` in z-order.
    fn set_position(
        &mut self,
        handle: WindowHandle,
        anchor: StackTarget,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    );
}

/// Access to the host's monitor layout.
pub trait MonitorSource {
    /// Monitors in host order; the first one is the primary monitor.
    fn monitors(&self) -> Vec<MonitorInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_rect_dimensions() {
        let rect = ScreenRect::from_origin_size(10, 20, 300, 400);
        assert_eq!(rect.width(), 300);
        assert_eq!(rect.height(), 400);
        assert!(rect.is_valid());
        assert_eq!(rect.center(), (160.0, 220.0));
    }

    #[test]
    fn test_screen_rect_degenerate_is_invalid() {
        assert!(!ScreenRect::new(0, 0, 0, 100).is_valid());
        assert!(!ScreenRect::new(0, 100, 50, 20).is_valid());
    }

    #[test]
    fn test_spans_column_includes_edges() {
        let rect = ScreenRect::new(0, 0, 500, 10);
        assert!(rect.spans_column(0));
        assert!(rect.spans_column(500));
        assert!(!rect.spans_column(501));
        assert!(!rect.spans_column(-1));
    }

    #[test]
    fn test_ex_style_bits() {
        let mut style = ExStyle::LAYERED | ExStyle::TOPMOST;
        assert!(style.contains(ExStyle::LAYERED));
        assert!(!style.contains(ExStyle::TOOLWINDOW));
        style |= ExStyle::TOOLWINDOW;
        assert!(style.contains(ExStyle::TOOLWINDOW | ExStyle::TOPMOST));
    }

    #[test]
    fn test_stack_target_serializes_with_kind() {
        let json = serde_json::to_string(&StackTarget::Beneath(WindowHandle(7))).unwrap();
        assert!(json.contains("beneath"));
        let json = serde_json::to_string(&StackTarget::Topmost).unwrap();
        assert!(json.contains("topmost"));
    }
}
