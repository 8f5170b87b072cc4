//! Accumulate-and-fire throttle driven by frame deltas.

/// Fires at most once per `min_interval` seconds of accumulated frame time.
#[derive(Debug, Clone)]
pub struct LoopGate {
    min_interval: f64,
    accumulated: f64,
}

impl LoopGate {
    #[must_use]
    pub const fn new(min_interval: f64) -> Self { Self { min_interval, accumulated: 0.0 } }

    /// Gate used by the resolver: four frames at the given rate.
    #[must_use]
    pub fn for_fps(fps: u32) -> Self { Self::new(4.0 / f64::from(fps.max(1))) }

    /// Adds `dt` and returns `true` (resetting the accumulator) once the
    /// interval has been reached.
    pub fn is_executable(&mut self, dt: f64) -> bool {
        self.accumulated += dt.max(0.0);
        if self.accumulated >= self.min_interval {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn min_interval(&self) -> f64 { self.min_interval }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_fourth_frame() {
        let mut gate = LoopGate::new(0.4);
        let fired: Vec<bool> = (0..8).map(|_| gate.is_executable(0.1 + 1e-9)).collect();
        assert_eq!(fired, [false, false, false, true, false, false, false, true]);
    }

    #[test]
    fn test_large_delta_fires_immediately() {
        let mut gate = LoopGate::new(0.5);
        assert!(gate.is_executable(2.0));
        assert!(!gate.is_executable(0.1));
    }

    #[test]
    fn test_for_fps_interval() {
        assert!((LoopGate::for_fps(40).min_interval() - 0.1).abs() < f64::EPSILON);
        assert!((LoopGate::for_fps(0).min_interval() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut gate = LoopGate::new(0.2);
        assert!(!gate.is_executable(0.1));
        assert!(!gate.is_executable(-1.0));
        assert!(gate.is_executable(0.15));
    }
}
