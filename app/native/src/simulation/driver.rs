//! Per-frame orchestration of the pet window.
//!
//! [`Simulation`] owns the physics body, the eased window transitions and
//! the stacking resolver, and talks to the desktop only through the
//! [`WindowSystem`] and [`MonitorSource`] collaborators it is given.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::intent::{AnimData, Behavior};
use crate::animation::{TransitionF64, TransitionVec2};
use crate::config::{EasingType, PetConfig};
use crate::error::{DeskpetError, DeskpetResult};
use crate::physics::{DropState, Plane, Vec2};
use crate::platform::{ExStyle, MonitorSource, StackTarget, WindowHandle, WindowSystem};
use crate::stacking::{
    LoopGate, PassContext, PeerNaming, Resolution, StackingResolver, TitlePeerNaming, build_world,
};

/// Foreground attempts made while the window is being set up.
const INITIAL_FOREGROUND_RETRIES: u32 = 1000;

/// Foreground attempts made on every later frame.
const FRAME_FOREGROUND_RETRIES: u32 = 1;

/// Walking distance per frame at 30 fps and scale 1, per unit of mobility.
const WALK_STEP: f64 = 0.85;

/// Frame rate the walking step is calibrated for.
const WALK_REFERENCE_FPS: f64 = 30.0;

/// Initial position as a fraction of the primary monitor width.
const INITIAL_POSITION_RATIO: f64 = 0.1;

// ============================================================================
// Frame Input / Output
// ============================================================================

/// Host input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f64,
    /// Pointer offset from the grab point in window pixels while a drag is
    /// in progress. `None` releases any ongoing drag.
    pub drag: Option<(f64, f64)>,
}

impl FrameInput {
    #[must_use]
    pub const fn idle(dt: f64) -> Self { Self { dt, drag: None } }

    #[must_use]
    pub const fn dragging(dt: f64, dx: f64, dy: f64) -> Self { Self { dt, drag: Some((dx, dy)) } }
}

/// What the host should show after a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub frame: u64,
    /// Eased window position in screen pixels.
    pub position: (i32, i32),
    pub alpha: f64,
    /// Animation switched to during this frame, if any.
    pub animation: Option<AnimData>,
    pub drop_state: DropState,
    pub stack_target: StackTarget,
}

// ============================================================================
// Simulation
// ============================================================================

/// A running pet instance.
pub struct Simulation<W, M, B, N = TitlePeerNaming> {
    config: PetConfig,
    windows: W,
    monitors: M,
    behavior: B,
    resolver: StackingResolver<N>,
    own_title: String,
    own_handle: WindowHandle,

    plane: Plane,
    window_size: (i32, i32),
    window_position: TransitionVec2,
    window_alpha: TransitionF64,
    gate: LoopGate,
    stack_target: StackTarget,
    last_resolution: Option<Resolution>,

    playing: Option<AnimData>,
    keep_anim: Option<AnimData>,
    offset_y: f64,
    dragging: bool,
    intention_x: i32,
    toolwindow: bool,
    rng: StdRng,
    frame: u64,
}

impl<W, M, B> Simulation<W, M, B, TitlePeerNaming>
where
    W: WindowSystem,
    M: MonitorSource,
    B: Behavior,
{
    /// Sets up the pet window and places it at its initial position.
    ///
    /// Peers are recognised by titles derived from `base_title`; our own
    /// window is looked up by `own_title`.
    ///
    /// # Errors
    ///
    /// Returns [`DeskpetError::WindowNotFound`] if no window is titled
    /// `own_title`, and [`DeskpetError::NoMonitors`] if the monitor source is
    /// empty.
    pub fn new(
        config: PetConfig,
        windows: W,
        monitors: M,
        behavior: B,
        base_title: &str,
        own_title: impl Into<String>,
    ) -> DeskpetResult<Self> {
        Self::with_naming(config, windows, monitors, behavior, TitlePeerNaming::new(base_title), own_title)
    }
}

impl<W, M, B, N> Simulation<W, M, B, N>
where
    W: WindowSystem,
    M: MonitorSource,
    B: Behavior,
    N: PeerNaming,
{
    /// Like [`Simulation::new`] with a custom peer naming scheme.
    ///
    /// # Errors
    ///
    /// Same as [`Simulation::new`].
    pub fn with_naming(
        config: PetConfig,
        mut windows: W,
        monitors: M,
        behavior: B,
        naming: N,
        own_title: impl Into<String>,
    ) -> DeskpetResult<Self> {
        let own_title = own_title.into();
        let own_handle = windows
            .find_window(&own_title)
            .ok_or_else(|| DeskpetError::WindowNotFound(own_title.clone()))?;

        let monitor_list = monitors.monitors();
        let primary = *monitor_list.first().ok_or(DeskpetError::NoMonitors)?;
        let world = build_world(
            &monitor_list,
            config.display.multi_monitors,
            f64::from(config.display.margin_bottom),
        )?;

        let window_size = config.display.window_size();
        let mut plane = Plane::from_config(
            &config.physics,
            f64::from(window_size.0),
            f64::from(window_size.1),
        );
        plane.set_world(world);

        windows.set_ex_style(own_handle, ExStyle::LAYERED | ExStyle::TOPMOST);
        windows.set_transparent(own_handle, false);

        let display = &config.display;
        let window_position = TransitionVec2::new(Vec2::ZERO, display.easing, display.easing_duration);
        let window_alpha = TransitionF64::new(1.0, EasingType::Linear, display.easing_duration);
        let gate = LoopGate::for_fps(display.fps());

        let mut sim = Self {
            config,
            windows,
            monitors,
            behavior,
            resolver: StackingResolver::new(naming),
            own_title,
            own_handle,
            plane,
            window_size,
            window_position,
            window_alpha,
            gate,
            stack_target: StackTarget::Topmost,
            last_resolution: None,
            playing: None,
            keep_anim: None,
            offset_y: 0.0,
            dragging: false,
            intention_x: 1,
            toolwindow: false,
            rng: StdRng::from_rng(&mut rand::rng()),
            frame: 0,
        };

        let default_anim = sim.behavior.default_anim();
        sim.change_animation(default_anim);
        sim.promise_toolwindow_style(INITIAL_FOREGROUND_RETRIES);

        let start = (INITIAL_POSITION_RATIO * primary.size.0).trunc();
        let height = f64::from(sim.window_size.1);
        sim.plane.change_position(0.0, start, -(start + height));
        sim.window_position.reset(sim.window_target());
        sim.refresh_stacking();
        sim.place_window();

        tracing::info!(
            title = %sim.own_title,
            handle = %sim.own_handle,
            x = start,
            y = start,
            "pet window initialised"
        );
        Ok(sim)
    }

    /// Reseeds the random rounding of walking steps, for reproducible runs.
    pub fn seed_rng(&mut self, seed: u64) { self.rng = StdRng::seed_from_u64(seed); }

    // ------------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------------

    /// Advances the pet by one frame.
    ///
    /// # Errors
    ///
    /// Returns [`DeskpetError::InvalidArguments`] if `input.dt` is not finite.
    pub fn tick(&mut self, input: FrameInput) -> DeskpetResult<FrameOutput> {
        if !input.dt.is_finite() {
            return Err(DeskpetError::InvalidArguments(format!(
                "frame delta must be finite, got {}",
                input.dt
            )));
        }
        let dt = input.dt.max(0.0);
        self.frame += 1;

        let mut new_anim = self.behavior.auto_ctrl(dt);
        match input.drag {
            None => {
                if self.dragging {
                    self.release_drag();
                }
                self.plane.update_position(dt);
                if let Some(turned) = self.auto_walk(dt) {
                    new_anim = Some(turned);
                }
            }
            Some((dx, dy)) => {
                self.drag_to(dt, dx, dy);
                new_anim = self.behavior.dragging();
            }
        }

        if self.plane.is_dropping() {
            new_anim = self.behavior.default_anim();
        } else if self.plane.take_dropped() {
            new_anim = self.behavior.dropped();
        } else if let Some(keep) = &self.keep_anim {
            new_anim = Some(keep.clone());
        }
        let animation = self.change_animation(new_anim);

        self.window_position.retarget(self.window_target());
        if self.dragging {
            // The window follows the pointer without smoothing.
            self.window_position.set_to_end();
        }
        self.window_position.add_progress(dt);
        if self.gate.is_executable(dt) {
            self.refresh_world();
            self.refresh_stacking();
        }
        self.place_window();

        if !self.window_alpha.is_ended() {
            self.window_alpha.add_progress(dt);
            self.windows.set_alpha(self.own_handle, self.window_alpha.now());
        }
        self.promise_toolwindow_style(FRAME_FOREGROUND_RETRIES);

        tracing::trace!(frame = self.frame, plane = %self.plane.debug_msg(), "frame");

        Ok(FrameOutput {
            frame: self.frame,
            position: self.position(),
            alpha: self.alpha(),
            animation,
            drop_state: self.plane.drop_state(),
            stack_target: self.stack_target,
        })
    }

    /// Walks the playing animation's mobility. Returns the reversed animation
    /// when the walk turns around at a world edge.
    fn auto_walk(&mut self, dt: f64) -> Option<AnimData> {
        let playing = self.playing.as_ref()?;
        // Airborne or just landed: the landing animation goes first.
        if playing.mobility == 0 || self.plane.drop_state() != DropState::Grounded {
            return None;
        }

        let mut turned = None;
        let mut mobility = playing.mobility;
        if self.will_reach_border(mobility) {
            let reversed = playing.reversed();
            mobility = reversed.mobility;
            if self.keep_anim.is_some() {
                self.keep_anim = Some(reversed.clone());
            }
            turned = Some(reversed);
        }
        self.walk(dt, WALK_STEP * f64::from(mobility));
        turned
    }

    fn walk(&mut self, dt: f64, len: f64) {
        let fps = f64::from(self.config.display.fps());
        let expected = len * self.config.display.scale * (WALK_REFERENCE_FPS / fps);
        let step = self.random_round(expected);
        let x = self.window_position.end().x + step;
        let y = self.plane.y();
        self.plane.change_position(dt, x, y);
    }

    /// Rounds to a neighbouring integer with probability equal to the
    /// fractional part, so the average step keeps the exact speed.
    fn random_round(&mut self, value: f64) -> f64 {
        let whole = value.trunc();
        let fraction = value - whole;
        if fraction.abs() > self.rng.random::<f64>() { whole + value.signum() } else { whole }
    }

    fn will_reach_border(&self, mobility: i32) -> bool {
        let x = self.plane.x();
        let width = f64::from(self.window_size.0);
        (mobility > 0 && x >= self.plane.border_right() - width)
            || (mobility < 0 && x <= self.plane.border_left())
    }

    // ------------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------------

    fn drag_to(&mut self, dt: f64, dx: f64, dy: f64) {
        self.dragging = true;
        if dx != 0.0 {
            self.intention_x = if dx > 0.0 { 1 } else { -1 };
        }
        let now = self.window_position.now();
        let x = (now.x + dx).trunc();
        let y = (now.y + dy).trunc();
        self.plane.change_position(dt, x, -(f64::from(self.window_size.1) + y));
    }

    fn release_drag(&mut self) {
        self.dragging = false;
        let walking = self.playing.as_ref().is_some_and(|anim| anim.mobility != 0);
        if walking {
            let intention = self.intention_x;
            self.keep_anim =
                self.keep_anim.take().map(|keep| keep.with_mobility(keep.mobility.abs() * intention));
        }
        tracing::debug!(intention_x = self.intention_x, "drag released");
    }

    // ------------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------------

    /// Switches to `anim` if it is a new, non-empty request.
    fn change_animation(&mut self, anim: Option<AnimData>) -> Option<AnimData> {
        let anim = anim.filter(|a| !a.is_empty())?;
        if self.playing.as_ref() == Some(&anim) {
            return None;
        }
        self.offset_y = (anim.offset_y * self.config.display.scale).trunc();
        self.playing = Some(anim.clone());
        tracing::debug!(clip = %anim.clip, mobility = anim.mobility, "animation changed");
        Some(anim)
    }

    /// Pins the behavior's choice to `anim` until cleared with `None`.
    pub fn set_keep_animation(&mut self, anim: Option<AnimData>) { self.keep_anim = anim; }

    #[must_use]
    pub const fn keep_animation(&self) -> Option<&AnimData> { self.keep_anim.as_ref() }

    #[must_use]
    pub const fn playing(&self) -> Option<&AnimData> { self.playing.as_ref() }

    /// Horizontal direction the user last dragged in.
    #[must_use]
    pub const fn facing(&self) -> i32 { self.intention_x }

    // ------------------------------------------------------------------------
    // Window
    // ------------------------------------------------------------------------

    /// Starts easing the window opacity towards `target`.
    pub fn fade_alpha(&mut self, target: f64) { self.window_alpha.retarget(target.clamp(0.0, 1.0)); }

    /// Eased window position in screen pixels.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        let now = self.window_position.now();
        (to_pixels(now.x), to_pixels(now.y))
    }

    #[must_use]
    pub fn alpha(&self) -> f64 { self.window_alpha.now() }

    #[must_use]
    pub const fn plane(&self) -> &Plane { &self.plane }

    #[must_use]
    pub const fn stack_target(&self) -> StackTarget { self.stack_target }

    /// Most recent resolver output.
    #[must_use]
    pub const fn last_resolution(&self) -> Option<&Resolution> { self.last_resolution.as_ref() }

    #[must_use]
    pub const fn own_handle(&self) -> WindowHandle { self.own_handle }

    #[must_use]
    pub const fn window_size(&self) -> (i32, i32) { self.window_size }

    #[must_use]
    pub const fn window_system(&self) -> &W { &self.windows }

    pub const fn window_system_mut(&mut self) -> &mut W { &mut self.windows }

    #[must_use]
    pub const fn frame(&self) -> u64 { self.frame }

    /// Screen position the window should ease towards.
    fn window_target(&self) -> Vec2 {
        let height = f64::from(self.window_size.1);
        Vec2::new(self.plane.x(), -(height + self.plane.y()) + self.offset_y)
    }

    fn place_window(&mut self) {
        let (x, y) = self.position();
        let (width, height) = self.window_size;
        self.windows.set_position(self.own_handle, self.stack_target, x, y, width, height);
    }

    /// Rebuilds the world from the monitors, keeping the old one if none are reported.
    fn refresh_world(&mut self) {
        let monitors = self.monitors.monitors();
        match build_world(
            &monitors,
            self.config.display.multi_monitors,
            f64::from(self.config.display.margin_bottom),
        ) {
            Ok(world) => self.plane.set_world(world),
            Err(err) => tracing::warn!(%err, "keeping previous world"),
        }
    }

    fn refresh_stacking(&mut self) {
        let records = self.windows.enumerate_windows();
        let center_x = to_pixels(self.window_position.now().x) + self.window_size.0 / 2;
        let ctx = PassContext {
            own_handle: Some(self.own_handle),
            own_title: &self.own_title,
            center_x,
            world_top: self.plane.border_top(),
            world_bottom: self.plane.border_bottom(),
            repulsion: self.config.behavior.peer_repulsion,
        };
        let resolution = self.resolver.resolve(&records, &ctx);
        resolution.apply_to(&mut self.plane);

        if resolution.target != self.stack_target {
            tracing::debug!(from = ?self.stack_target, to = ?resolution.target, "stack target changed");
            self.stack_target = resolution.target;
        }
        self.last_resolution = Some(resolution);
    }

    /// Marks the window as a tool window once it has been in the foreground.
    fn promise_toolwindow_style(&mut self, max_retries: u32) {
        if self.toolwindow {
            return;
        }
        let handle = self.own_handle;
        for attempt in 0..=max_retries.saturating_add(1) {
            if self.windows.is_foreground(handle) {
                let style = self.windows.ex_style(handle) | ExStyle::TOOLWINDOW;
                self.windows.set_ex_style(handle, style);
                self.toolwindow = true;
                tracing::info!(attempt, "tool window style applied");
                return;
            }
            if attempt > max_retries {
                return;
            }
            self.windows.request_foreground(handle);
        }
    }
}

#[allow(clippy::cast_possible_truncation)] // Window coordinates fit in i32
fn to_pixels(value: f64) -> i32 { value as i32 }

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::platform::scene::{Scene, SceneBackend};
    use crate::platform::{MonitorInfo, ScreenRect, WindowRecord};
    use crate::simulation::IdleBehavior;

    const DT: f64 = 1.0 / 30.0;

    type SceneSim = Simulation<SceneBackend, Vec<MonitorInfo>, IdleBehavior>;

    fn backend(width: f64, height: f64, extra: Vec<WindowRecord>) -> (SceneBackend, Vec<MonitorInfo>) {
        let monitors = vec![MonitorInfo::new(0.0, 0.0, width, height)];
        let mut windows = vec![WindowRecord::new(WindowHandle(1), "Pet", ScreenRect::new(0, 0, 200, 200))];
        windows.extend(extra);
        let scene = Scene { monitors: monitors.clone(), windows, ..Scene::default() };
        (SceneBackend::new(scene), monitors)
    }

    fn simulation(behavior: IdleBehavior) -> SceneSim {
        let (windows, monitors) = backend(1920.0, 1080.0, Vec::new());
        let mut sim = Simulation::new(PetConfig::default(), windows, monitors, behavior, "Pet", "Pet").unwrap();
        sim.seed_rng(7);
        sim
    }

    fn run(sim: &mut SceneSim, frames: usize) -> Vec<FrameOutput> {
        (0..frames).map(|_| sim.tick(FrameInput::idle(DT)).unwrap()).collect()
    }

    #[test]
    fn test_missing_own_window_is_fatal() {
        let (windows, monitors) = backend(1920.0, 1080.0, Vec::new());
        let result =
            Simulation::new(PetConfig::default(), windows, monitors, IdleBehavior::new(), "Pet", "Pet (4)");
        assert!(matches!(result, Err(DeskpetError::WindowNotFound(title)) if title == "Pet (4)"));
    }

    #[test]
    fn test_no_monitors_is_fatal() {
        let (windows, _) = backend(1920.0, 1080.0, Vec::new());
        let result =
            Simulation::new(PetConfig::default(), windows, Vec::new(), IdleBehavior::new(), "Pet", "Pet");
        assert!(matches!(result, Err(DeskpetError::NoMonitors)));
    }

    #[test]
    fn test_initial_placement_and_styles() {
        let sim = simulation(IdleBehavior::new());
        assert_eq!(sim.position(), (192, 192));

        let backend = sim.window_system();
        let placement = backend.last_placement().unwrap();
        assert_eq!(placement.rect, ScreenRect::new(192, 192, 392, 392));
        assert_eq!(placement.anchor, StackTarget::Topmost);

        let style = backend.ex_style(WindowHandle(1));
        assert!(style.contains(ExStyle::LAYERED | ExStyle::TOPMOST | ExStyle::TOOLWINDOW));
        assert_eq!(backend.is_transparent(WindowHandle(1)), Some(false));
        assert_eq!(sim.playing().map(|a| a.clip.as_str()), Some("Relax"));
    }

    #[test]
    fn test_falls_to_monitor_bottom() {
        let mut sim = simulation(IdleBehavior::new());
        let outputs = run(&mut sim, 150);
        assert_eq!(sim.position(), (192, 880));
        assert_eq!(outputs.last().map(|o| o.drop_state), Some(DropState::Grounded));

        let rect = sim.window_system().rect(WindowHandle(1)).unwrap();
        assert_eq!((rect.left, rect.top), (192, 880));
    }

    #[test]
    fn test_landing_plays_dropped_animation_once() {
        let mut sim = simulation(IdleBehavior::new());
        let outputs = run(&mut sim, 150);
        let landings = outputs
            .iter()
            .filter(|o| o.animation.as_ref().is_some_and(|a| a.clip == "Landing"))
            .count();
        assert_eq!(landings, 1);
        assert!(outputs.iter().any(|o| o.drop_state == DropState::Dropping));
    }

    #[test]
    fn test_walker_turns_at_world_edge() {
        let (windows, monitors) = backend(400.0, 300.0, Vec::new());
        let mut sim: SceneSim = Simulation::new(
            PetConfig::default(),
            windows,
            monitors,
            IdleBehavior::walking(1),
            "Pet",
            "Pet",
        )
        .unwrap();
        sim.seed_rng(1);

        let outputs = run(&mut sim, 400);
        let turned = outputs
            .iter()
            .filter_map(|o| o.animation.as_ref())
            .any(|a| a.clip == "Move" && a.mobility == -1);
        assert!(turned);
        for output in &outputs {
            assert!((0..=200).contains(&output.position.0), "left the world: {:?}", output.position);
        }
    }

    #[test]
    fn test_drag_moves_window_directly() {
        let mut sim = simulation(IdleBehavior::new());
        let output = sim.tick(FrameInput::dragging(DT, 30.0, 40.0)).unwrap();
        assert_eq!(output.position, (222, 232));
        assert_eq!(output.animation.map(|a| a.clip), Some("Interact".to_string()));
        assert_eq!(output.drop_state, DropState::Grounded);
    }

    #[test]
    fn test_release_resigns_kept_walk() {
        let mut sim = simulation(IdleBehavior::new());
        run(&mut sim, 150);
        sim.set_keep_animation(Some(AnimData::looping("Move", 2)));
        sim.tick(FrameInput::idle(DT)).unwrap();
        assert_eq!(sim.playing().map(|a| a.mobility), Some(2));

        sim.tick(FrameInput::dragging(DT, -5.0, 0.0)).unwrap();
        sim.tick(FrameInput::dragging(DT, 0.0, 0.0)).unwrap();
        sim.tick(FrameInput::idle(DT)).unwrap();

        assert_eq!(sim.facing(), -1);
        assert_eq!(sim.keep_animation().map(|a| a.mobility), Some(-2));
    }

    #[test]
    fn test_peer_above_sets_stack_target() {
        let peer = WindowRecord::new(WindowHandle(5), "Pet (1)", ScreenRect::new(1000, 100, 1200, 300));
        let (windows, monitors) = backend(1920.0, 1080.0, vec![peer]);
        let sim: SceneSim =
            Simulation::new(PetConfig::default(), windows, monitors, IdleBehavior::new(), "Pet", "Pet")
                .unwrap();

        assert_eq!(sim.stack_target(), StackTarget::Beneath(WindowHandle(5)));
        let resolution = sim.last_resolution().unwrap();
        assert_eq!(resolution.charges.len(), 1);
        assert_eq!(sim.plane().point_charges().len(), 1);
        assert_eq!(sim.window_system().z_order(), [WindowHandle(5), WindowHandle(1)]);
    }

    #[test]
    fn test_non_finite_delta_is_rejected() {
        let mut sim = simulation(IdleBehavior::new());
        assert!(matches!(
            sim.tick(FrameInput::idle(f64::NAN)),
            Err(DeskpetError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_fade_alpha_reaches_target() {
        let mut sim = simulation(IdleBehavior::new());
        sim.fade_alpha(0.0);
        run(&mut sim, 10);
        assert!(sim.alpha().abs() < f64::EPSILON);
        assert_eq!(sim.window_system().alpha(WindowHandle(1)), Some(0.0));
    }

    #[test]
    fn test_denied_foreground_defers_toolwindow_style() {
        let (windows, monitors) = backend(1920.0, 1080.0, Vec::new());
        let scene_windows = windows.enumerate_windows();
        let scene = Scene {
            monitors: monitors.clone(),
            windows: scene_windows,
            deny_foreground: vec![WindowHandle(1)],
            ..Scene::default()
        };
        let mut sim: SceneSim = Simulation::new(
            PetConfig::default(),
            SceneBackend::new(scene),
            monitors,
            IdleBehavior::new(),
            "Pet",
            "Pet",
        )
        .unwrap();
        let after_init = sim.window_system().foreground_requests();
        assert!(after_init > 1000);

        run(&mut sim, 3);
        let backend = sim.window_system();
        assert!(!backend.ex_style(WindowHandle(1)).contains(ExStyle::TOOLWINDOW));
        assert_eq!(backend.foreground_requests(), after_init + 6);
    }

    struct FlakyMonitors {
        calls: Cell<u32>,
    }

    impl MonitorSource for FlakyMonitors {
        fn monitors(&self) -> Vec<MonitorInfo> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() == 1 { vec![MonitorInfo::new(0.0, 0.0, 1920.0, 1080.0)] } else { Vec::new() }
        }
    }

    #[test]
    fn test_runtime_monitor_loss_keeps_world() {
        let (windows, _) = backend(1920.0, 1080.0, Vec::new());
        let monitors = FlakyMonitors { calls: Cell::new(0) };
        let mut sim =
            Simulation::new(PetConfig::default(), windows, monitors, IdleBehavior::new(), "Pet", "Pet")
                .unwrap();
        for _ in 0..12 {
            sim.tick(FrameInput::idle(DT)).unwrap();
        }
        assert_eq!(sim.plane().world().len(), 1);
    }
}
