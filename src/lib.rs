// SPDX-License-Identifier: MPL-2.0
//! `iced_swipe` is a swipe-to-delete list built with the Iced GUI framework.
//!
//! Each row is a draggable surface over a "Delete" action. Releasing a row
//! past the trigger distance flies it off and removes it; anything shorter
//! springs it back into place.

#![doc(html_root_url = "https://docs.rs/iced_swipe/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gesture;
pub mod i18n;
pub mod ui;
