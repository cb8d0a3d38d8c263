// SPDX-License-Identifier: MPL-2.0
//! Release velocity estimation from recent pointer samples.

use iced::{Point, Vector};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Only samples this recent contribute to the release velocity.
const SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Upper bound on the magnitude of an estimated velocity, in px/s.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Tracks pointer positions to estimate how fast a surface was flung.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Point, Instant)>,
}

impl VelocityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Records a pointer position observed at `at`.
    pub fn record(&mut self, position: Point, at: Instant) {
        self.samples.push_back((position, at));
        while let Some(&(_, oldest)) = self.samples.front() {
            if at.saturating_duration_since(oldest) > SAMPLE_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Average velocity across the sample window, in px/s.
    #[must_use]
    pub fn velocity(&self) -> Vector {
        let (Some(&(first, start)), Some(&(last, end))) =
            (self.samples.front(), self.samples.back())
        else {
            return Vector::ZERO;
        };

        let elapsed = end.saturating_duration_since(start).as_secs_f32();
        if elapsed <= f32::EPSILON {
            return Vector::ZERO;
        }

        let velocity = (last - first) * (1.0 / elapsed);
        let speed = velocity.x.hypot(velocity.y);
        if speed > MAX_FLING_VELOCITY {
            velocity * (MAX_FLING_VELOCITY / speed)
        } else {
            velocity
        }
    }
}
