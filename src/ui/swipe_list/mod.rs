// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-delete list component.
//!
//! The list owns one [`SwipeRow`] per item, routes pointer messages from the
//! rows' swipeable surfaces to the right row by id, advances release
//! animations on ticks and drops rows whose fly-off finished.
//!
//! Messages for ids that are no longer in the list (a row removed while a
//! pointer was still held) are ignored.

pub mod item;
pub mod row;
mod view;

pub use item::{demo_items, load_items, parse_items, sanitize_items, validate_items, ListItem};
pub use row::{Phase, RowState, SwipeRow, SwipeSettings};
pub use view::ViewContext;

use crate::gesture::GestureState;
use crate::ui::widgets::DragEvent;
use iced::Size;
use std::time::{Duration, Instant};

/// Frame length assumed for the first tick of an animation.
const FIRST_FRAME: Duration = Duration::from_millis(16);

/// Messages for the swipe list.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer message for the row with the given id.
    Row { id: String, message: row::Message },
    /// Animation clock.
    Tick(Instant),
    /// The area the list is shown in changed size.
    Resized(Size),
}

/// Effects produced by the list for its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    DragStarted(DragEvent),
    DragEnded {
        event: DragEvent,
        gesture: GestureState,
    },
    /// Rows whose delete action completed, in list order.
    Deleted(Vec<ListItem>),
}

/// Swipe list state.
#[derive(Debug, Clone)]
pub struct State {
    rows: Vec<SwipeRow>,
    settings: SwipeSettings,
    last_tick: Option<Instant>,
}

impl State {
    /// Builds a list from item records.
    ///
    /// Records with an empty or duplicate id are a caller bug: debug builds
    /// panic, release builds log and skip them.
    #[must_use]
    pub fn new(items: Vec<ListItem>, settings: SwipeSettings) -> Self {
        let (items, problems) = sanitize_items(items);
        debug_assert!(problems.is_empty(), "invalid list items: {problems:?}");
        for problem in &problems {
            tracing::warn!(%problem, "skipping list item");
        }

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(key, item)| SwipeRow::new(key, item, settings))
            .collect();

        Self {
            rows,
            settings,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[SwipeRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, id: &str) -> Option<&SwipeRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    /// True while any row is springing back or flying off.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.rows.iter().any(SwipeRow::is_animating)
    }

    pub fn update(&mut self, message: Message) -> Effect {
        self.update_at(message, Instant::now())
    }

    /// Same as [`State::update`], with pointer messages stamped at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Row { id, message } => {
                let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) else {
                    tracing::trace!(%id, "message for a row that is gone");
                    return Effect::None;
                };

                match row.handle(message, now) {
                    row::Effect::DragStarted(position) => {
                        // Stale ticks must not count the idle time as one frame.
                        if !self.is_animating() {
                            self.last_tick = None;
                        }
                        Effect::DragStarted(DragEvent { uid: id, position })
                    }
                    row::Effect::DragEnded(position, gesture) => Effect::DragEnded {
                        event: DragEvent { uid: id, position },
                        gesture,
                    },
                    row::Effect::None | row::Effect::Removed => Effect::None,
                }
            }
            Message::Tick(now) => self.tick(now),
            Message::Resized(size) => {
                self.settings.bounds.width = size.width;
                let bounds = self.settings.bounds;
                for row in &mut self.rows {
                    row.set_bounds(bounds);
                }
                Effect::None
            }
        }
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let dt = self
            .last_tick
            .map_or(FIRST_FRAME, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);

        let mut removed = Vec::new();
        for row in &mut self.rows {
            if row.advance(dt) == row::Effect::Removed {
                removed.push(row.item().clone());
            }
        }

        if !self.is_animating() {
            self.last_tick = None;
        }

        if removed.is_empty() {
            return Effect::None;
        }

        self.rows.retain(|row| row.phase() != Phase::Removed);
        Effect::Deleted(removed)
    }
}
