use glam::DVec2;

use crate::core::orbit::OrbitPath;

/// Attaches an elliptical orbit to a body.
///
/// `speed` is the per-body time scale: the fraction of the path covered per
/// elapsed second. The body's position is a pure function of global elapsed
/// time and these parameters — no velocity or acceleration state.
#[derive(Debug, Clone, Copy)]
pub struct OrbitComponent {
    pub path: OrbitPath,
    pub speed: f64,
}

impl OrbitComponent {
    pub fn new(path: OrbitPath, speed: f64) -> Self {
        Self { path, speed }
    }

    /// Elapsed time scaled by the speed factor, wrapped to `[0, 1)`.
    pub fn time_fraction(&self, elapsed: f64) -> f64 {
        (elapsed * self.speed).rem_euclid(1.0)
    }

    /// Position on the path at the given elapsed time.
    pub fn position(&self, elapsed: f64) -> DVec2 {
        self.path.point_at(self.time_fraction(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mercury_like() -> OrbitComponent {
        OrbitComponent::new(OrbitPath::ellipse(0.0, -10.0, 20.0, 30.0), 0.5)
    }

    #[test]
    fn time_fraction_wraps_to_unit_interval() {
        let orbit = mercury_like();
        // speed 0.5 → one revolution every 2 seconds
        assert!((orbit.time_fraction(1.0) - 0.5).abs() < 1e-12);
        assert!((orbit.time_fraction(3.0) - 0.5).abs() < 1e-12);
        assert!(orbit.time_fraction(1.999) < 1.0);
    }

    #[test]
    fn position_is_periodic_in_elapsed_time() {
        let orbit = mercury_like();
        let a = orbit.position(0.7);
        let b = orbit.position(0.7 + 2.0);
        assert!((a - b).length() < 1e-9);
    }

    #[test]
    fn position_is_pure() {
        let orbit = mercury_like();
        let a = orbit.position(1.3);
        let b = orbit.position(1.3);
        assert_eq!(a, b);
    }
}
