// SPDX-License-Identifier: MPL-2.0
//! Gesture primitives shared by swipeable surfaces.
//!
//! Nothing in here draws anything: these types turn pointer positions into
//! drag state, displacement and a release decision, and are driven by the
//! widgets in [`crate::ui`].

pub mod axis;
pub mod drag;
pub mod surface;
pub mod trigger;
pub mod velocity;

pub use axis::Axis;
pub use drag::{reduce, DragAction, DragState};
pub use surface::{DragSurface, GestureState};
pub use trigger::{Release, Side, SwipeDirection, Trigger};
pub use velocity::VelocityTracker;
