// SPDX-License-Identifier: MPL-2.0
//! Drag state store
//!
//! Records where a swipe gesture started and where it was released. Every
//! transition returns a fresh value so rows can be driven reducer-style.

use iced::{Point, Vector};

/// Snapshot of a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer-down position of the current (or last) gesture
    pub drag_start: Point,

    /// Pointer-up position, unset until the gesture is released
    pub drag_end: Option<Point>,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            is_dragging: false,
            drag_start: Point::ORIGIN,
            drag_end: None,
        }
    }
}

/// Discrete transitions accepted by [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    DragStart(Point),
    DragEnd(Point),
    SetDragging(bool),
}

impl DragState {
    /// Records the origin of a new gesture, forgetting the previous release point.
    #[must_use]
    pub fn begin(self, point: Point) -> Self {
        Self {
            drag_start: point,
            drag_end: None,
            ..self
        }
    }

    /// Records the release point of the gesture.
    #[must_use]
    pub fn end(self, point: Point) -> Self {
        Self {
            drag_end: Some(point),
            ..self
        }
    }

    #[must_use]
    pub fn set_dragging(self, is_dragging: bool) -> Self {
        Self {
            is_dragging,
            ..self
        }
    }

    /// Displacement between release and origin, `(0, 0)` until released.
    #[must_use]
    pub fn distance(&self) -> Vector {
        self.drag_end.map_or(Vector::ZERO, |end| end - self.drag_start)
    }
}

/// Applies `action` to `state` and returns the resulting state.
#[must_use]
pub fn reduce(state: DragState, action: DragAction) -> DragState {
    match action {
        DragAction::DragStart(point) => state.begin(point),
        DragAction::DragEnd(point) => state.end(point),
        DragAction::SetDragging(is_dragging) => state.set_dragging(is_dragging),
    }
}
