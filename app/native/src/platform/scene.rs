//! In-memory desktop driven by a JSON scene description.
//!
//! A [`Scene`] lists monitors and top-level windows (topmost first) and may
//! schedule window moves at given frames. [`SceneBackend`] plays the scene
//! back through the [`WindowSystem`] and [`MonitorSource`] traits and records
//! every command it receives, so headless runs can be inspected afterwards.
//!
//! Example scene:
//!
//! ```json
//! {
//!   "monitors": [{ "virtualOrigin": [0, 0], "size": [1920, 1080] }],
//!   "windows": [
//!     { "handle": 1, "title": "Pet", "rect": { "left": 0, "top": 0, "right": 200, "bottom": 200 } },
//!     { "handle": 2, "title": "Editor", "rect": { "left": 0, "top": 500, "right": 1000, "bottom": 900 } }
//!   ],
//!   "moves": [{ "frame": 60, "handle": 2, "rect": { "left": 0, "top": 700, "right": 1000, "bottom": 900 } }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ExStyle, MonitorInfo, MonitorSource, ScreenRect, StackTarget, WindowHandle, WindowRecord,
    WindowSystem,
};
use crate::error::{DeskpetError, DeskpetResult};

// ============================================================================
// Scene Description
// ============================================================================

/// A serialisable desktop snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scene {
    /// Monitors in host order; the first one is primary.
    pub monitors: Vec<MonitorInfo>,
    /// Top-level windows, topmost first.
    pub windows: Vec<WindowRecord>,
    /// Window moves applied when the backend reaches a frame.
    pub moves: Vec<ScheduledMove>,
    /// Windows that refuse foreground requests.
    pub deny_foreground: Vec<WindowHandle>,
}

/// A window geometry change at a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMove {
    pub frame: u64,
    pub handle: WindowHandle,
    pub rect: ScreenRect,
}

impl Scene {
    /// Parses a scene from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DeskpetError::SceneError`] if the text is not a valid scene.
    pub fn from_json(text: &str) -> DeskpetResult<Self> {
        serde_json::from_str(text)
            .map_err(|err| DeskpetError::SceneError(format!("invalid scene: {err}")))
    }

    /// Reads and parses a scene file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a scene error if it
    /// cannot be parsed.
    pub fn load(path: &Path) -> DeskpetResult<Self> {
        let text = fs::read_to_string(path)?;
        let scene = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            monitors = scene.monitors.len(),
            windows = scene.windows.len(),
            "loaded scene"
        );
        Ok(scene)
    }
}

// ============================================================================
// Backend
// ============================================================================

/// One placement request received from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub handle: WindowHandle,
    pub anchor: StackTarget,
    pub rect: ScreenRect,
}

#[derive(Debug, Clone)]
struct SceneWindow {
    record: WindowRecord,
    ex_style: ExStyle,
    transparent: bool,
    alpha: f64,
}

/// Plays a [`Scene`] back as a window system.
#[derive(Debug, Clone)]
pub struct SceneBackend {
    monitors: Vec<MonitorInfo>,
    windows: Vec<SceneWindow>,
    moves: Vec<ScheduledMove>,
    deny_foreground: Vec<WindowHandle>,
    foreground: Option<WindowHandle>,
    foreground_requests: u32,
    placements: Vec<Placement>,
    frame: u64,
}

impl SceneBackend {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        let windows = scene
            .windows
            .into_iter()
            .map(|record| SceneWindow {
                record,
                ex_style: ExStyle::NONE,
                transparent: false,
                alpha: 1.0,
            })
            .collect();
        Self {
            monitors: scene.monitors,
            windows,
            moves: scene.moves,
            deny_foreground: scene.deny_foreground,
            foreground: None,
            foreground_requests: 0,
            placements: Vec::new(),
            frame: 0,
        }
    }

    /// Returns the handle of the window titled `title`, creating it on top of
    /// the stack with the given geometry if it does not exist.
    pub fn ensure_window(&mut self, title: &str, rect: ScreenRect) -> WindowHandle {
        if let Some(handle) = self.find_window(title) {
            return handle;
        }
        let next = self.windows.iter().map(|w| w.record.handle.0).max().unwrap_or(0) + 1;
        let handle = WindowHandle(next);
        self.windows.insert(0, SceneWindow {
            record: WindowRecord::new(handle, title, rect),
            ex_style: ExStyle::NONE,
            transparent: false,
            alpha: 1.0,
        });
        tracing::debug!(title, %handle, "added window to scene");
        handle
    }

    /// Advances the scene clock, applying moves scheduled up to `frame`.
    pub fn advance_to(&mut self, frame: u64) {
        self.frame = frame;
        let (due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.moves).into_iter().partition(|m| m.frame <= frame);
        self.moves = pending;
        for scheduled in due {
            if let Some(window) = self.window_mut(scheduled.handle) {
                window.record.rect = scheduled.rect;
                tracing::debug!(handle = %scheduled.handle, frame, "scheduled move applied");
            }
        }
    }

    /// Every placement received so far, oldest first.
    #[must_use]
    pub fn placements(&self) -> &[Placement] { &self.placements }

    #[must_use]
    pub fn last_placement(&self) -> Option<&Placement> { self.placements.last() }

    #[must_use]
    pub const fn foreground_requests(&self) -> u32 { self.foreground_requests }

    /// Last frame passed to [`SceneBackend::advance_to`].
    #[must_use]
    pub const fn frame(&self) -> u64 { self.frame }

    #[must_use]
    pub fn rect(&self, handle: WindowHandle) -> Option<ScreenRect> {
        self.window(handle).map(|w| w.record.rect)
    }

    #[must_use]
    pub fn alpha(&self, handle: WindowHandle) -> Option<f64> { self.window(handle).map(|w| w.alpha) }

    #[must_use]
    pub fn is_transparent(&self, handle: WindowHandle) -> Option<bool> {
        self.window(handle).map(|w| w.transparent)
    }

    /// Window handles in z-order, topmost first.
    #[must_use]
    pub fn z_order(&self) -> Vec<WindowHandle> {
        self.windows.iter().map(|w| w.record.handle).collect()
    }

    fn window(&self, handle: WindowHandle) -> Option<&SceneWindow> {
        self.windows.iter().find(|w| w.record.handle == handle)
    }

    fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut SceneWindow> {
        self.windows.iter_mut().find(|w| w.record.handle == handle)
    }

    fn restack(&mut self, handle: WindowHandle, anchor: StackTarget) {
        let Some(from) = self.windows.iter().position(|w| w.record.handle == handle) else {
            return;
        };
        let window = self.windows.remove(from);
        let to = match anchor {
            StackTarget::Topmost => 0,
            StackTarget::Beneath(above) => self
                .windows
                .iter()
                .position(|w| w.record.handle == above)
                .map_or(0, |idx| idx + 1),
        };
        self.windows.insert(to, window);
    }
}

impl WindowSystem for SceneBackend {
    fn enumerate_windows(&self) -> Vec<WindowRecord> {
        self.windows.iter().map(|w| w.record.clone()).collect()
    }

    fn find_window(&self, title: &str) -> Option<WindowHandle> {
        self.windows.iter().find(|w| w.record.title == title).map(|w| w.record.handle)
    }

    fn is_foreground(&self, handle: WindowHandle) -> bool { self.foreground == Some(handle) }

    fn request_foreground(&mut self, handle: WindowHandle) {
        self.foreground_requests += 1;
        if !self.deny_foreground.contains(&handle) && self.window(handle).is_some() {
            self.foreground = Some(handle);
        }
    }

    fn ex_style(&self, handle: WindowHandle) -> ExStyle {
        self.window(handle).map_or(ExStyle::NONE, |w| w.ex_style)
    }

    fn set_ex_style(&mut self, handle: WindowHandle, style: ExStyle) {
        if let Some(window) = self.window_mut(handle) {
            window.ex_style = style;
        }
    }

    fn set_transparent(&mut self, handle: WindowHandle, transparent: bool) {
        if let Some(window) = self.window_mut(handle) {
            window.transparent = transparent;
        }
    }

    fn set_alpha(&mut self, handle: WindowHandle, alpha: f64) {
        if let Some(window) = self.window_mut(handle) {
            window.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    fn set_position(
        &mut self,
        handle: WindowHandle,
        anchor: StackTarget,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) {
        let rect = ScreenRect::from_origin_size(x, y, width, height);
        if let Some(window) = self.window_mut(handle) {
            window.record.rect = rect;
        }
        self.restack(handle, anchor);
        self.placements.push(Placement { handle, anchor, rect });
    }
}

impl MonitorSource for SceneBackend {
    fn monitors(&self) -> Vec<MonitorInfo> { self.monitors.clone() }
}

impl MonitorSource for Vec<MonitorInfo> {
    fn monitors(&self) -> Vec<MonitorInfo> { self.clone() }
}
