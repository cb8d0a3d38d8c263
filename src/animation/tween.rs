// SPDX-License-Identifier: MPL-2.0
//! Linear tween used to fly a triggered row off-screen.

use crate::config::DEFAULT_FLY_OFF_MS;
use iced::Vector;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenConfig {
    pub duration: Duration,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_FLY_OFF_MS),
        }
    }
}

/// Moves linearly from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Vector,
    to: Vector,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(config: TweenConfig, from: Vector, to: Vector) -> Self {
        Self {
            from,
            to,
            duration: config.duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Fraction of the tween completed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.progress()
    }

    #[must_use]
    pub fn target(&self) -> Vector {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn advance(&mut self, dt: Duration) -> Vector {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.position()
    }
}
