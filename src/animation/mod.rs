// SPDX-License-Identifier: MPL-2.0
//! Release animations for swipeable surfaces.
//!
//! When a drag ends, [`release_motion`] picks the motion the surface follows
//! from where it was let go:
//!
//! - a triggered release flies the surface off-screen with a linear
//!   [`Tween`] on the side it was swiped towards,
//! - any other release springs back to the origin with a damped [`Spring`]
//!   seeded with the release velocity.
//!
//! Motions are advanced by the application tick, so nothing here owns a
//! timer.

pub mod spring;
pub mod tween;

pub use spring::{Spring, SpringConfig};
pub use tween::{Tween, TweenConfig};

use crate::gesture::{Axis, Release};
use iced::{Size, Vector};
use std::time::Duration;

/// Parameters for both release motions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationConfig {
    pub spring: SpringConfig,
    pub fly_off: TweenConfig,
}

/// A running release animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Spring(Spring),
    Tween(Tween),
}

impl Motion {
    /// Advances the motion by `dt` and returns the new offset.
    pub fn advance(&mut self, dt: Duration) -> Vector {
        match self {
            Motion::Spring(spring) => spring.advance(dt),
            Motion::Tween(tween) => tween.advance(dt),
        }
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        match self {
            Motion::Spring(spring) => spring.position(),
            Motion::Tween(tween) => tween.position(),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        match self {
            Motion::Spring(spring) => spring.is_settled(),
            Motion::Tween(tween) => tween.is_finished(),
        }
    }
}

/// Chooses the motion that follows a release at offset `from`.
///
/// `bounds` is the size of the area the row lives in; a triggered row
/// travels one full extent of it so it ends up entirely off-screen.
#[must_use]
pub fn release_motion(
    from: Vector,
    release: Release,
    velocity: Vector,
    axis: Axis,
    bounds: Size,
    config: &AnimationConfig,
) -> Motion {
    match release {
        Release::Triggered(side) => {
            let to = axis.unit() * (side.sign() * axis.extent(bounds));
            Motion::Tween(Tween::new(config.fly_off, from, to))
        }
        Release::SpringBack => Motion::Spring(Spring::new(
            config.spring,
            from,
            Vector::ZERO,
            axis.constrain(velocity),
        )),
    }
}
