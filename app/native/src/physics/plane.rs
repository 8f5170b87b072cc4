//! The plane: a single rigid body moving among world regions and obstacles.
//!
//! Coordinates are y-up (see [`super::obstacles`]). The body position is the
//! bottom-left corner of its footprint, so `position.y` is the body's bottom
//! edge and `position.y + height` its top edge.
//!
//! # Frame Update
//!
//! [`Plane::update_position`] runs, in order: gravity, point-charge
//! repulsion, friction, speed limits, integration, vertical collision and the
//! horizontal world clamp.

use smallvec::SmallVec;

use super::obstacles::{Barrier, PointCharge, RectArea};
use super::vec2::Vec2;
use crate::config::PhysicsConfig;

/// Tolerance when deciding whether the body rests exactly on a surface (px).
const CONTACT_EPSILON: f64 = 0.5;

/// Rebound speeds below this settle the body instead of bouncing (px/s).
const MIN_REBOUND_SPEED: f64 = 10.0;

/// Barriers rising under a resting body by at most this many frames of
/// vertical travel carry the body up instead of letting it fall through.
const RESEAT_FRAMES: f64 = 1.0;

/// Strength of point-charge repulsion (px²/s² per unit charge).
const REPULSION_CONSTANT: f64 = 150_000.0;

/// Distances below this are treated as this when computing repulsion (px).
const MIN_REPULSION_DISTANCE: f64 = 50.0;

/// Barrier list type. Most desktops yield only a handful of barriers per pass.
pub type BarrierList = SmallVec<[Barrier; 8]>;

/// Point charge list type.
pub type ChargeList = SmallVec<[PointCharge; 4]>;

// ============================================================================
// Drop State
// ============================================================================

/// Vertical motion state of the body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropState {
    /// Falling (or bouncing) without support.
    Dropping,
    /// First contact after a fall. Lasts one frame.
    Dropped,
    /// Resting on a barrier or the world bottom.
    #[default]
    Grounded,
}

// ============================================================================
// Plane
// ============================================================================

/// Physics body plus the obstacles it collides with.
#[derive(Debug, Clone)]
pub struct Plane {
    world: Vec<RectArea>,
    barriers: BarrierList,
    point_charges: ChargeList,

    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    width: f64,
    height: f64,

    gravity: f64,
    air_friction: f64,
    static_friction: f64,
    speed_limit: Vec2,
    bounce: f64,

    airborne: bool,
    /// Set on first contact of a fall, cleared by the next update or by `take_dropped`.
    dropped_edge: bool,
    /// Whether the current fall has already touched a surface (bounces do not re-fire).
    landed_this_fall: bool,
}

impl Plane {
    /// Creates a plane with the given gravity and an empty world.
    #[must_use]
    pub fn new(gravity: f64) -> Self {
        Self {
            world: Vec::new(),
            barriers: BarrierList::new(),
            point_charges: ChargeList::new(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            width: 0.0,
            height: 0.0,
            gravity,
            air_friction: 0.0,
            static_friction: 0.0,
            speed_limit: Vec2::new(f64::INFINITY, f64::INFINITY),
            bounce: 0.0,
            airborne: false,
            dropped_edge: false,
            landed_this_fall: false,
        }
    }

    /// Creates a plane from the physics configuration and a body footprint.
    #[must_use]
    pub fn from_config(config: &PhysicsConfig, width: f64, height: f64) -> Self {
        let mut plane = Self::new(config.gravity);
        plane.set_friction(config.air_friction, config.static_friction);
        plane.set_bounce(config.bounce);
        plane.set_speed_limit(config.speed_limit_x, config.speed_limit_y);
        plane.set_obj_size(width, height);
        plane
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    pub const fn set_friction(&mut self, air: f64, static_friction: f64) {
        self.air_friction = air.abs();
        self.static_friction = static_friction.abs();
    }

    pub fn set_bounce(&mut self, bounce: f64) { self.bounce = bounce.clamp(0.0, 1.0); }

    pub const fn set_speed_limit(&mut self, x: f64, y: f64) {
        self.speed_limit = Vec2::new(x.abs(), y.abs());
    }

    pub const fn set_obj_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // ------------------------------------------------------------------------
    // World and Obstacles
    // ------------------------------------------------------------------------

    /// Replaces the world regions.
    pub fn set_world(&mut self, world: Vec<RectArea>) { self.world = world; }

    #[must_use]
    pub fn world(&self) -> &[RectArea] { &self.world }

    pub fn set_barrier(&mut self, y: f64, x: f64, width: f64, is_ground: bool) {
        self.barriers.push(Barrier::new(y, x, width, is_ground));
    }

    pub fn set_point_charge(&mut self, y: f64, x: f64, quantity_product: f64) {
        self.point_charges.push(PointCharge::new(y, x, quantity_product));
    }

    pub fn clear_barriers(&mut self) { self.barriers.clear(); }

    pub fn clear_point_charges(&mut self) { self.point_charges.clear(); }

    #[must_use]
    pub fn barriers(&self) -> &[Barrier] { &self.barriers }

    #[must_use]
    pub fn point_charges(&self) -> &[PointCharge] { &self.point_charges }

    /// Leftmost edge of the world.
    #[must_use]
    pub fn border_left(&self) -> f64 {
        self.world.iter().map(|a| a.left).reduce(f64::min).unwrap_or(f64::NEG_INFINITY)
    }

    /// Rightmost edge of the world.
    #[must_use]
    pub fn border_right(&self) -> f64 {
        self.world.iter().map(|a| a.right).reduce(f64::max).unwrap_or(f64::INFINITY)
    }

    /// Ceiling above the body's horizontal center.
    #[must_use]
    pub fn border_top(&self) -> f64 {
        self.column_areas().map(|a| a.top).reduce(f64::max).unwrap_or(f64::INFINITY)
    }

    /// Floor beneath the body's horizontal center.
    #[must_use]
    pub fn border_bottom(&self) -> f64 {
        self.column_areas().map(|a| a.bottom).reduce(f64::min).unwrap_or(f64::NEG_INFINITY)
    }

    /// Regions crossed by the body's center column, or every region if none is.
    fn column_areas(&self) -> impl Iterator<Item = &RectArea> {
        let center = self.position.x + self.width / 2.0;
        let any_spans = self.world.iter().any(|a| a.spans_x(center));
        self.world.iter().filter(move |a| !any_spans || a.spans_x(center))
    }

    // ------------------------------------------------------------------------
    // State Queries
    // ------------------------------------------------------------------------

    #[must_use]
    pub const fn position(&self) -> Vec2 { self.position }

    #[must_use]
    pub const fn x(&self) -> f64 { self.position.x }

    #[must_use]
    pub const fn y(&self) -> f64 { self.position.y }

    #[must_use]
    pub const fn velocity(&self) -> Vec2 { self.velocity }

    #[must_use]
    pub const fn drop_state(&self) -> DropState {
        if self.dropped_edge {
            DropState::Dropped
        } else if self.airborne {
            DropState::Dropping
        } else {
            DropState::Grounded
        }
    }

    /// Whether the body is falling without support.
    #[must_use]
    pub const fn is_dropping(&self) -> bool { self.airborne && !self.dropped_edge }

    /// Consumes the landing edge. Returns `true` at most once per fall.
    pub const fn take_dropped(&mut self) -> bool {
        let dropped = self.dropped_edge;
        self.dropped_edge = false;
        dropped
    }

    /// One-line summary of the body state for diagnostics.
    #[must_use]
    pub fn debug_msg(&self) -> String {
        format!(
            "pos=({:.1}, {:.1}) vel=({:.1}, {:.1}) state={:?} world={} barriers={} charges={}",
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
            self.drop_state(),
            self.world.len(),
            self.barriers.len(),
            self.point_charges.len(),
        )
    }

    // ------------------------------------------------------------------------
    // Motion
    // ------------------------------------------------------------------------

    /// Moves the body directly (dragging or walking).
    ///
    /// The target is clamped to the world, and the velocity is derived from
    /// the displacement so a release continues with consistent momentum.
    pub fn change_position(&mut self, dt: f64, x: f64, y: f64) {
        let target = Vec2::new(self.clamp_x(x), self.clamp_y(y));
        self.velocity = if dt > 0.0 {
            self.limit_speed((target - self.position) * (1.0 / dt))
        } else {
            Vec2::ZERO
        };
        self.position = target;
        self.acceleration = Vec2::ZERO;
        self.airborne = false;
        self.dropped_edge = false;
        self.landed_this_fall = false;
    }

    /// Advances the simulation by `dt` seconds.
    pub fn update_position(&mut self, dt: f64) {
        self.dropped_edge = false;
        if dt <= 0.0 {
            return;
        }

        if !self.airborne && self.velocity.y <= 0.0 {
            self.reseat_on_risen_barrier(dt);
        }
        if !self.airborne && (self.velocity.y > 0.0 || !self.is_supported()) {
            self.airborne = true;
            self.landed_this_fall = false;
        }

        if self.airborne {
            self.velocity.y -= self.gravity * dt;
        }

        self.apply_point_charges(dt);
        self.apply_friction(dt);
        self.velocity = self.limit_speed(self.velocity);

        let previous_bottom = self.position.y;
        self.position += self.velocity * dt;

        self.resolve_vertical(previous_bottom);
        self.resolve_horizontal();
    }

    fn apply_point_charges(&mut self, dt: f64) {
        let center = Vec2::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        );
        for charge in &self.point_charges {
            let away = center - Vec2::new(charge.x, charge.y);
            let distance = away.length().max(MIN_REPULSION_DISTANCE);
            let magnitude = REPULSION_CONSTANT * charge.quantity_product / distance;
            self.acceleration += away.normalize() * magnitude;
        }
        // A supported body only drifts sideways; vertical pushes would lift it off.
        if !self.airborne {
            self.acceleration.y = 0.0;
        }
        self.velocity += self.acceleration * dt;
        self.acceleration = Vec2::ZERO;
    }

    fn apply_friction(&mut self, dt: f64) {
        if self.airborne {
            let decel = self.air_friction * dt;
            self.velocity.x = decelerate(self.velocity.x, decel);
            self.velocity.y = decelerate(self.velocity.y, decel);
        } else {
            self.velocity.x = decelerate(self.velocity.x, self.static_friction * dt);
        }
    }

    fn limit_speed(&self, velocity: Vec2) -> Vec2 {
        Vec2::new(
            velocity.x.clamp(-self.speed_limit.x, self.speed_limit.x),
            velocity.y.clamp(-self.speed_limit.y, self.speed_limit.y),
        )
    }

    fn resolve_vertical(&mut self, previous_bottom: f64) {
        let ceiling = self.border_top() - self.height;
        if self.position.y > ceiling {
            self.position.y = ceiling;
            self.velocity.y = self.velocity.y.min(0.0);
        }

        if self.velocity.y > 0.0 {
            return;
        }
        if let Some(surface) = self.landing_surface(previous_bottom) {
            self.position.y = surface;
            self.land();
        }
    }

    /// Highest surface the body's bottom edge passed through this step.
    fn landing_surface(&self, previous_bottom: f64) -> Option<f64> {
        let (left, right) = (self.position.x, self.position.x + self.width);
        let bottom = self.position.y;

        let barrier_hit = self
            .barriers
            .iter()
            .filter(|b| b.overlaps(left, right) && b.y > bottom)
            .filter(|b| b.is_ground || b.y <= previous_bottom + CONTACT_EPSILON)
            .map(|b| b.y)
            .reduce(f64::max);

        let floor = self.border_bottom();
        let floor_hit = (bottom < floor).then_some(floor);

        match (barrier_hit, floor_hit) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    fn land(&mut self) {
        if self.airborne && !self.landed_this_fall {
            self.dropped_edge = true;
            self.landed_this_fall = true;
            tracing::trace!(y = self.position.y, "body landed");
        }
        let rebound = -self.velocity.y * self.bounce;
        if rebound < MIN_REBOUND_SPEED {
            self.velocity.y = 0.0;
            self.airborne = false;
        } else {
            self.velocity.y = rebound;
        }
    }

    fn resolve_horizontal(&mut self) {
        let clamped = self.clamp_x(self.position.x);
        if clamped < self.position.x {
            self.velocity.x = self.velocity.x.min(0.0);
        } else if clamped > self.position.x {
            self.velocity.x = self.velocity.x.max(0.0);
        }
        self.position.x = clamped;
    }

    /// Lifts a resting body onto a barrier that moved up a little beneath it.
    ///
    /// The allowed rise is one frame of travel at the vertical speed limit,
    /// never more than the body's height.
    fn reseat_on_risen_barrier(&mut self, dt: f64) {
        let tolerance = (self.speed_limit.y * dt * RESEAT_FRAMES).min(self.height);
        let (left, right) = (self.position.x, self.position.x + self.width);
        let bottom = self.position.y;
        let risen = self
            .barriers
            .iter()
            .filter(|b| b.overlaps(left, right))
            .map(|b| b.y - bottom)
            .filter(|rise| *rise > CONTACT_EPSILON && *rise <= tolerance)
            .reduce(f64::max);
        if let Some(rise) = risen {
            self.position.y = bottom + rise;
            tracing::trace!(y = self.position.y, rise, "body carried up by barrier");
        }
    }

    /// Whether the body rests on a barrier or the world bottom right now.
    fn is_supported(&self) -> bool {
        let (left, right) = (self.position.x, self.position.x + self.width);
        let bottom = self.position.y;
        bottom <= self.border_bottom() + CONTACT_EPSILON
            || self
                .barriers
                .iter()
                .any(|b| b.overlaps(left, right) && (b.y - bottom).abs() <= CONTACT_EPSILON)
    }

    fn clamp_x(&self, x: f64) -> f64 {
        clamp_span(x, self.border_left(), self.border_right() - self.width)
    }

    fn clamp_y(&self, y: f64) -> f64 {
        clamp_span(y, self.border_bottom(), self.border_top() - self.height)
    }
}

/// Reduces `|value|` by `amount` without crossing zero.
fn decelerate(value: f64, amount: f64) -> f64 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else if value < 0.0 {
        (value + amount).min(0.0)
    } else {
        0.0
    }
}

/// Clamps into `[min, max]`, preferring `min` when the span is inverted.
fn clamp_span(value: f64, min: f64, max: f64) -> f64 {
    if max < min { min } else { value.clamp(min, max) }
}
