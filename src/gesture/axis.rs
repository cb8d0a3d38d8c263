// SPDX-License-Identifier: MPL-2.0
//! Drag axis constraint.

use iced::{Size, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axes along which a swipeable surface may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    /// Unconstrained, the surface follows the pointer on both axes.
    Free,
}

impl Axis {
    /// Zeroes the components of `vector` that this axis locks.
    #[must_use]
    pub fn constrain(self, vector: Vector) -> Vector {
        match self {
            Axis::X => Vector::new(vector.x, 0.0),
            Axis::Y => Vector::new(0.0, vector.y),
            Axis::Free => vector,
        }
    }

    /// Component of `vector` measured against the trigger threshold.
    ///
    /// An unconstrained surface still triggers on horizontal travel.
    #[must_use]
    pub fn primary(self, vector: Vector) -> f32 {
        match self {
            Axis::X | Axis::Free => vector.x,
            Axis::Y => vector.y,
        }
    }

    /// Unit vector pointing in the positive primary direction.
    #[must_use]
    pub fn unit(self) -> Vector {
        match self {
            Axis::X | Axis::Free => Vector::new(1.0, 0.0),
            Axis::Y => Vector::new(0.0, 1.0),
        }
    }

    /// Length of `size` along the primary direction.
    #[must_use]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::X | Axis::Free => size.width,
            Axis::Y => size.height,
        }
    }

    /// Clamps `offset` so the surface never travels further than one
    /// `bounds` length away from its origin on any axis.
    #[must_use]
    pub fn clamp(self, offset: Vector, bounds: Size) -> Vector {
        let offset = self.constrain(offset);
        Vector::new(
            offset.x.clamp(-bounds.width, bounds.width),
            offset.y.clamp(-bounds.height, bounds.height),
        )
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Free => write!(f, "free"),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "free" | "both" => Ok(Axis::Free),
            other => Err(format!("invalid axis: {}", other)),
        }
    }
}
