use std::f32::consts::PI;
use std::time::Duration;

/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

impl SpringConfig {
    /// Critically damped spring that settles in about half a second.
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 157.9,
        damping: 25.1,
    };

    /// Build a spring from a damping ratio (0 = undamped, 1 = critically
    /// damped) and the time it should take to settle.
    ///
    /// The period of the undamped oscillation equals `duration`, which keeps
    /// the overshoot visible but finished by the time the animation ends.
    pub fn from_damping_ratio(damping_ratio: f32, duration: Duration) -> Self {
        let response = duration.as_secs_f32().max(1e-3);
        let angular_frequency = 2.0 * PI / response;
        Self {
            mass: 1.0,
            stiffness: angular_frequency * angular_frequency,
            damping: 2.0 * damping_ratio.clamp(0.0, 1.0) * angular_frequency,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State for spring physics simulation
#[derive(Clone, Debug)]
pub struct SpringState {
    /// Current position (0.0 = start, 1.0 = target)
    pub position: f32,
    /// Current velocity
    pub velocity: f32,
    /// Last evaluation time
    pub last_t: f32,
}

impl SpringState {
    pub fn new() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            last_t: 0.0,
        }
    }

    /// Step the simulation to `elapsed_secs` since the animation started.
    /// Returns the current position (can overshoot 1.0).
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let mut remaining = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = elapsed_secs;

        // Sub-step large frames for numerical stability (~120Hz)
        const MAX_DT: f32 = 1.0 / 120.0;
        while remaining > 1e-6 {
            let dt = remaining.min(MAX_DT);
            remaining -= dt;

            let displacement = self.position - 1.0;
            let force = -config.stiffness * displacement - config.damping * self.velocity;
            let acceleration = force / config.mass;

            // Semi-implicit Euler
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
        }

        self.position
    }

    /// Check if the spring has settled (position near target, velocity near zero)
    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

impl Default for SpringState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &SpringConfig, seconds: f32) -> (f32, f32) {
        let mut state = SpringState::new();
        let mut max_position: f32 = 0.0;
        let frames = (seconds * 60.0) as usize;
        for i in 0..=frames {
            let position = state.step(i as f32 / 60.0, config);
            max_position = max_position.max(position);
        }
        (state.position, max_position)
    }

    #[test]
    fn test_spring_reaches_target() {
        let config = SpringConfig::from_damping_ratio(0.5, Duration::from_millis(600));
        let (position, _) = run(&config, 2.0);
        assert!(
            (position - 1.0).abs() < 0.05,
            "Spring should settle near target, got {}",
            position
        );
    }

    #[test]
    fn test_low_damping_overshoots() {
        let config = SpringConfig::from_damping_ratio(0.2, Duration::from_millis(600));
        let (_, max_position) = run(&config, 1.0);
        assert!(
            max_position > 1.0,
            "Under-damped spring should overshoot, max was {}",
            max_position
        );
    }

    #[test]
    fn test_critical_damping_does_not_overshoot() {
        let config = SpringConfig::from_damping_ratio(1.0, Duration::from_millis(600));
        let (_, max_position) = run(&config, 2.0);
        assert!(max_position < 1.01, "max was {}", max_position);
    }
}
