// SPDX-License-Identifier: MPL-2.0
//! Capabilities of a surface that can be dragged by the pointer.

use super::trigger::Release;
use iced::{Point, Vector};
use std::time::Instant;

/// What a drag surface reports once a gesture is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Release point minus origin, constrained to the surface axis.
    pub displacement: Vector,
    /// Estimated pointer velocity at release, in px/s.
    pub velocity: Vector,
    pub release: Release,
}

/// A surface that follows the pointer between a press and a release.
pub trait DragSurface {
    /// Pointer went down on the surface at `position`.
    fn begin_drag(&mut self, position: Point, at: Instant);

    /// Pointer moved while the surface is held.
    fn update_drag(&mut self, position: Point, at: Instant);

    /// Pointer was released. Returns `None` if no drag was in progress.
    fn end_drag(&mut self, position: Point, at: Instant) -> Option<GestureState>;

    /// Current visual displacement of the surface from its origin.
    fn displacement(&self) -> Vector;
}
