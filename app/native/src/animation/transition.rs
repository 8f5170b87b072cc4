//! Time-driven transitions between a start and an end value.
//!
//! A [`Transition`] smooths discrete jumps (a new physics position every
//! frame, a new opacity target) into continuous motion. Progress is advanced
//! explicitly by the caller with the frame delta, so the type never reads a
//! clock on its own.

use super::easing::{apply_easing, lerp};
use crate::config::EasingType;
use crate::physics::Vec2;

// ============================================================================
// Interpolation
// ============================================================================

/// Values a [`Transition`] can interpolate.
pub trait Interpolate: Copy + PartialEq {
    /// Value at `t` in `[0, 1]` between `from` and `to`.
    #[must_use]
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: Self, to: Self, t: f64) -> Self { lerp(from, to, t) }
}

impl Interpolate for Vec2 {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        Self::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
    }
}

// ============================================================================
// Transition
// ============================================================================

/// An eased transition with a fixed duration in seconds.
#[derive(Debug, Clone)]
pub struct Transition<T> {
    start: T,
    end: T,
    elapsed: f64,
    duration: f64,
    easing: EasingType,
}

/// Scalar transition (used for window opacity).
pub type TransitionF64 = Transition<f64>;

/// Vector transition (used for window position).
pub type TransitionVec2 = Transition<Vec2>;

impl<T: Interpolate> Transition<T> {
    /// Creates a transition resting at `value`.
    #[must_use]
    pub fn new(value: T, easing: EasingType, duration: f64) -> Self {
        let duration = duration.max(0.0);
        Self { start: value, end: value, elapsed: duration, duration, easing }
    }

    /// Snaps to `value` and marks the transition as finished.
    pub fn reset(&mut self, value: T) {
        self.start = value;
        self.end = value;
        self.elapsed = self.duration;
    }

    /// Starts easing from the current value toward `target`.
    ///
    /// Re-targeting to the value already being approached is a no-op, so a
    /// caller may feed the same target every frame and still come to rest.
    pub fn retarget(&mut self, target: T) {
        if target == self.end {
            return;
        }
        self.start = self.now();
        self.end = target;
        self.elapsed = 0.0;
    }

    /// Advances the transition by `dt` seconds. Negative deltas are ignored.
    pub fn add_progress(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Jumps to the end value.
    pub const fn set_to_end(&mut self) { self.elapsed = self.duration; }

    /// Current interpolated value.
    #[must_use]
    pub fn now(&self) -> T {
        if self.is_ended() {
            return self.end;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        T::interpolate(self.start, self.end, apply_easing(t, self.easing))
    }

    /// The value being approached.
    #[must_use]
    pub const fn end(&self) -> T { self.end }

    /// The value the current leg started from.
    #[must_use]
    pub const fn start(&self) -> T { self.start }

    #[must_use]
    pub fn is_ended(&self) -> bool { self.elapsed >= self.duration }
}
