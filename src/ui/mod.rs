// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`swipe_list`] - The list of swipeable rows and its per-row state machine
//! - [`widgets`] - Custom Iced widgets (the two-layer swipeable surface)
//! - [`styles`] - Container styles for rows and the empty state
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod swipe_list;
pub mod theming;
pub mod widgets;
