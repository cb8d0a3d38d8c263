// SPDX-License-Identifier: MPL-2.0
//! Damped spring used to return a released surface to its origin.

use crate::config::{DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_MASS, DEFAULT_SPRING_STIFFNESS};
use iced::Vector;
use std::time::Duration;

/// Integration step, small enough to stay stable for stiff springs.
const STEP_SECS: f32 = 1.0 / 240.0;

/// Longest frame simulated in one call. Longer gaps (window hidden,
/// debugger pause) are treated as this long.
const MAX_FRAME_SECS: f32 = 0.1;

/// Distance to the target under which the spring may come to rest.
const REST_DISTANCE: f32 = 0.5;

/// Speed under which the spring may come to rest, in px/s.
const REST_SPEED: f32 = 5.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_SPRING_STIFFNESS,
            damping: DEFAULT_SPRING_DAMPING,
            mass: DEFAULT_SPRING_MASS,
        }
    }
}

/// A spring pulling `position` towards `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: Vector,
    velocity: Vector,
    target: Vector,
}

impl Spring {
    #[must_use]
    pub fn new(config: SpringConfig, from: Vector, to: Vector, velocity: Vector) -> Self {
        Self {
            config,
            position: from,
            velocity,
            target: to,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> Vector {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        let offset = self.position - self.target;
        offset.x.hypot(offset.y) < REST_DISTANCE
            && self.velocity.x.hypot(self.velocity.y) < REST_SPEED
    }

    /// Simulates `dt` of motion and returns the new position.
    pub fn advance(&mut self, dt: Duration) -> Vector {
        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SECS);

        while remaining > 0.0 && !self.is_settled() {
            let h = remaining.min(STEP_SECS);
            self.step(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = Vector::ZERO;
        }

        self.position
    }

    // Semi-implicit Euler: update velocity first, then position.
    fn step(&mut self, h: f32) {
        let stretch = self.position - self.target;
        let force = stretch * -self.config.stiffness - self.velocity * self.config.damping;
        let acceleration = force * (1.0 / self.config.mass.max(0.01));

        self.velocity = self.velocity + acceleration * h;
        self.position = self.position + self.velocity * h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn default_config_matches_release_spring() {
        let config = SpringConfig::default();
        assert_eq!(config.stiffness, 750.0);
        assert_eq!(config.damping, 50.0);
        assert_eq!(config.mass, 1.0);
    }

    #[test]
    fn spring_moves_towards_target() {
        let mut spring = Spring::new(
            SpringConfig::default(),
            Vector::new(80.0, 0.0),
            Vector::ZERO,
            Vector::ZERO,
        );
        let after = spring.advance(FRAME);
        assert!(after.x < 80.0);
        assert!(after.x > 0.0);
    }

    #[test]
    fn spring_settles_exactly_on_target() {
        let mut spring = Spring::new(
            SpringConfig::default(),
            Vector::new(120.0, 0.0),
            Vector::ZERO,
            Vector::new(400.0, 0.0),
        );
        for _ in 0..120 {
            spring.advance(FRAME);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.position(), Vector::ZERO);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = Spring::new(
            SpringConfig::default(),
            Vector::new(60.0, 0.0),
            Vector::ZERO,
            Vector::ZERO,
        );
        let mut reference = capped;

        capped.advance(Duration::from_secs(10));
        reference.advance(Duration::from_millis(100));
        assert_eq!(capped.position(), reference.position());
    }

    #[test]
    fn spring_at_rest_stays_put() {
        let mut spring = Spring::new(
            SpringConfig::default(),
            Vector::ZERO,
            Vector::ZERO,
            Vector::ZERO,
        );
        assert!(spring.is_settled());
        assert_eq!(spring.advance(FRAME), Vector::ZERO);
    }
}
