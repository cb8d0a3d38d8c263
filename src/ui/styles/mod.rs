// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the swipe list components.

pub mod container;
