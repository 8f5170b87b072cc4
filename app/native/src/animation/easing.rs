//! Easing functions for time-based transitions.
//!
//! Provides standard easing curves: linear, ease-in, ease-out, and ease-in-out.
//! Every curve maps `[0, 1]` onto `[0, 1]` monotonically.

use crate::config::EasingType;

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 { (end - start).mul_add(t, start) }

/// Linear easing (no acceleration).
#[inline]
#[must_use]
pub const fn ease_linear(t: f64) -> f64 { t }

/// Ease-in (slow start, accelerates).
#[inline]
#[must_use]
pub fn ease_in(t: f64) -> f64 { t * t * t }

/// Ease-out (fast start, decelerates).
#[inline]
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t1 = t - 1.0;
    (t1 * t1).mul_add(t1, 1.0)
}

/// Ease-in-out (slow start and end).
#[inline]
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let t1 = 2.0f64.mul_add(t, -2.0);
        (0.5 * t1 * t1).mul_add(t1, 1.0)
    }
}

/// Applies an easing function based on the easing type.
#[inline]
#[must_use]
pub fn apply_easing(t: f64, easing: EasingType) -> f64 {
    match easing {
        EasingType::Linear => ease_linear(t),
        EasingType::EaseIn => ease_in(t),
        EasingType::EaseOut => ease_out(t),
        EasingType::EaseInOut => ease_in_out(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < f64::EPSILON);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < f64::EPSILON);
        assert!((lerp(-40.0, 60.0, 1.0) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [EasingType::Linear, EasingType::EaseIn, EasingType::EaseOut, EasingType::EaseInOut] {
            assert!(apply_easing(0.0, easing).abs() < 1e-12, "{easing:?} at 0");
            assert!((apply_easing(1.0, easing) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert!(ease_in(0.5) < 0.5);
        assert!(ease_out(0.5) > 0.5);
        assert!((ease_in_out(0.5) - 0.5).abs() < f64::EPSILON);
        assert!(ease_in_out(0.25) < 0.25);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in [EasingType::Linear, EasingType::EaseIn, EasingType::EaseOut, EasingType::EaseInOut] {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = apply_easing(f64::from(step) / 100.0, easing);
                assert!(value >= last, "{easing:?} decreased at step {step}");
                last = value;
            }
        }
    }
}
