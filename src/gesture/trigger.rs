// SPDX-License-Identifier: MPL-2.0
//! Trigger threshold evaluation.
//!
//! A swipe becomes a confirmed action once the released displacement along the
//! primary axis reaches the trigger distance in an accepted direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_TRIGGER_DISTANCE;

/// Directions in which a release may trigger the row action.
///
/// On a vertical axis `Right` means downwards and `Left` upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    #[default]
    Right,
    Left,
    Both,
}

/// Side a triggered row leaves the screen on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Outcome of a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Threshold not met, the surface returns to its origin.
    SpringBack,
    /// Threshold met, the row action fires.
    Triggered(Side),
}

impl Release {
    #[must_use]
    pub fn is_triggered(self) -> bool {
        matches!(self, Release::Triggered(_))
    }
}

/// Threshold configuration for a swipeable row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// Minimum displacement in logical pixels.
    pub distance: f32,
    pub direction: SwipeDirection,
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            distance: DEFAULT_TRIGGER_DISTANCE,
            direction: SwipeDirection::default(),
        }
    }
}

impl Trigger {
    #[must_use]
    pub fn new(distance: f32, direction: SwipeDirection) -> Self {
        Self {
            distance,
            direction,
        }
    }

    /// Decides the release outcome for a displacement along the primary axis.
    #[must_use]
    pub fn evaluate(&self, displacement: f32) -> Release {
        let distance = self.distance.abs();
        let reached_right = displacement >= distance;
        let reached_left = displacement <= -distance;

        match self.direction {
            SwipeDirection::Right | SwipeDirection::Both if reached_right => {
                Release::Triggered(Side::Right)
            }
            SwipeDirection::Left | SwipeDirection::Both if reached_left => {
                Release::Triggered(Side::Left)
            }
            _ => Release::SpringBack,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Right => write!(f, "right"),
            SwipeDirection::Left => write!(f, "left"),
            SwipeDirection::Both => write!(f, "both"),
        }
    }
}

impl FromStr for SwipeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" => Ok(SwipeDirection::Right),
            "left" => Ok(SwipeDirection::Left),
            "both" => Ok(SwipeDirection::Both),
            other => Err(format!("invalid swipe direction: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_past_threshold_triggers() {
        // start 100, end 210
        let trigger = Trigger::default();
        assert_eq!(trigger.evaluate(110.0), Release::Triggered(Side::Right));
    }

    #[test]
    fn short_displacement_springs_back() {
        // start 100, end 150
        let trigger = Trigger::default();
        assert_eq!(trigger.evaluate(50.0), Release::SpringBack);
    }

    #[test]
    fn exact_threshold_triggers() {
        let trigger = Trigger::default();
        assert!(trigger.evaluate(DEFAULT_TRIGGER_DISTANCE).is_triggered());
    }

    #[test]
    fn right_direction_ignores_left_swipes() {
        let trigger = Trigger::new(90.0, SwipeDirection::Right);
        assert_eq!(trigger.evaluate(-200.0), Release::SpringBack);
    }

    #[test]
    fn left_direction_triggers_on_negative_travel() {
        let trigger = Trigger::new(90.0, SwipeDirection::Left);
        assert_eq!(trigger.evaluate(-90.0), Release::Triggered(Side::Left));
        assert_eq!(trigger.evaluate(120.0), Release::SpringBack);
    }

    #[test]
    fn both_directions_pick_the_travelled_side() {
        let trigger = Trigger::new(90.0, SwipeDirection::Both);
        assert_eq!(trigger.evaluate(95.0), Release::Triggered(Side::Right));
        assert_eq!(trigger.evaluate(-95.0), Release::Triggered(Side::Left));
        assert_eq!(trigger.evaluate(0.0), Release::SpringBack);
    }

    #[test]
    fn direction_parses_from_str() {
        assert_eq!("LEFT".parse::<SwipeDirection>(), Ok(SwipeDirection::Left));
        assert!("up".parse::<SwipeDirection>().is_err());
    }
}
