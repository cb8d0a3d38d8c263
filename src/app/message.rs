// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::swipe_list::{self, ListItem};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    List(swipe_list::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Rows to show instead of the built-in demo records.
    pub items: Option<Vec<ListItem>>,
    /// Overrides `swipe.trigger_distance` from the config file.
    pub trigger_distance: Option<f32>,
}
