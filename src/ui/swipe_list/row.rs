// SPDX-License-Identifier: MPL-2.0
//! Per-row swipe state machine.
//!
//! ```text
//! Idle ──press──▶ Dragging ──release < threshold──▶ SpringingBack ──settled──▶ Idle
//!                    │
//!                    └──release ≥ threshold──▶ FlyingOff ──finished──▶ Removed
//! ```
//!
//! `SpringingBack` reads as `Idle` and `FlyingOff`/`Removed` read as
//! `Triggered` through [`SwipeRow::state`]. Grabbing a springing row
//! interrupts the spring and continues from where the surface is.

use super::item::ListItem;
use crate::animation::{release_motion, AnimationConfig, Motion};
use crate::config::Config;
use crate::gesture::{
    reduce, Axis, DragAction, DragState, DragSurface, GestureState, Trigger, VelocityTracker,
};
use iced::{Point, Size, Vector};
use std::time::{Duration, Instant};

/// Settings shared by every row of a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    pub trigger: Trigger,
    pub axis: Axis,
    pub animation: AnimationConfig,
    /// Area a row may travel within: list width by row height.
    pub bounds: Size,
}

impl SwipeSettings {
    #[must_use]
    pub fn from_config(config: &Config, width: f32) -> Self {
        Self {
            trigger: config.trigger(),
            axis: config.axis(),
            animation: config.animation(),
            bounds: Size::new(width, config.row_height()),
        }
    }
}

/// Lifecycle of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    SpringingBack,
    FlyingOff,
    Removed,
}

/// Observable state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Idle,
    Dragging,
    Triggered,
}

impl Phase {
    #[must_use]
    pub fn state(self) -> RowState {
        match self {
            Phase::Idle | Phase::SpringingBack => RowState::Idle,
            Phase::Dragging => RowState::Dragging,
            Phase::FlyingOff | Phase::Removed => RowState::Triggered,
        }
    }
}

/// Pointer messages for a row, produced by its swipeable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DragStarted(Point),
    DragMoved(Point),
    DragEnded(Point),
}

/// What the list should learn from a row message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    DragStarted(Point),
    DragEnded(Point, GestureState),
    /// The fly-off animation finished; the row should be dropped.
    Removed,
}

/// A list row that can be swiped away.
#[derive(Debug, Clone)]
pub struct SwipeRow {
    key: usize,
    item: ListItem,
    drag: DragState,
    phase: Phase,
    offset: Vector,
    grab_offset: Vector,
    velocity: VelocityTracker,
    motion: Option<Motion>,
    settings: SwipeSettings,
}

impl SwipeRow {
    /// Creates an idle row. `key` must be unique within the list and stable
    /// for the lifetime of the row.
    #[must_use]
    pub fn new(key: usize, item: ListItem, settings: SwipeSettings) -> Self {
        Self {
            key,
            item,
            drag: DragState::default(),
            phase: Phase::Idle,
            offset: Vector::ZERO,
            grab_offset: Vector::ZERO,
            velocity: VelocityTracker::new(),
            motion: None,
            settings,
        }
    }

    #[must_use]
    pub fn key(&self) -> usize {
        self.key
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    #[must_use]
    pub fn item(&self) -> &ListItem {
        &self.item
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> RowState {
        self.phase.state()
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    #[must_use]
    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    /// Updates the travel area, e.g. after the window was resized.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.settings.bounds = bounds;
        if self.phase == Phase::Dragging {
            self.offset = self.settings.axis.clamp(self.offset, bounds);
        }
    }

    /// Handle a pointer message observed at `now`.
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::DragStarted(position) => {
                if !self.accepts_drag() {
                    return Effect::None;
                }
                self.begin_drag(position, now);
                Effect::DragStarted(position)
            }
            Message::DragMoved(position) => {
                self.update_drag(position, now);
                Effect::None
            }
            Message::DragEnded(position) => match self.end_drag(position, now) {
                Some(gesture) => Effect::DragEnded(position, gesture),
                None => Effect::None,
            },
        }
    }

    /// Advances the release animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Effect {
        let Some(motion) = self.motion.as_mut() else {
            return Effect::None;
        };

        self.offset = motion.advance(dt);
        if !motion.is_finished() {
            return Effect::None;
        }

        self.motion = None;
        match self.phase {
            Phase::FlyingOff => {
                self.phase = Phase::Removed;
                Effect::Removed
            }
            _ => {
                self.phase = Phase::Idle;
                Effect::None
            }
        }
    }

    /// Triggered rows are on their way out and ignore new presses.
    fn accepts_drag(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::SpringingBack)
    }
}

impl DragSurface for SwipeRow {
    fn begin_drag(&mut self, position: Point, at: Instant) {
        if !self.accepts_drag() {
            return;
        }

        self.drag = [DragAction::SetDragging(true), DragAction::DragStart(position)]
            .into_iter()
            .fold(self.drag, reduce);
        self.phase = Phase::Dragging;
        self.motion = None;
        self.grab_offset = self.offset;
        self.velocity.reset();
        self.velocity.record(position, at);
    }

    fn update_drag(&mut self, position: Point, at: Instant) {
        if self.phase != Phase::Dragging {
            return;
        }

        self.velocity.record(position, at);
        let travelled = position - self.drag.drag_start;
        self.offset = self
            .settings
            .axis
            .clamp(self.grab_offset + travelled, self.settings.bounds);
    }

    fn end_drag(&mut self, position: Point, at: Instant) -> Option<GestureState> {
        if self.phase != Phase::Dragging {
            return None;
        }

        self.update_drag(position, at);
        self.drag = [DragAction::SetDragging(false), DragAction::DragEnd(position)]
            .into_iter()
            .fold(self.drag, reduce);

        let axis = self.settings.axis;
        let displacement = axis.constrain(self.drag.distance());
        let velocity = axis.constrain(self.velocity.velocity());
        let release = self.settings.trigger.evaluate(axis.primary(displacement));

        let motion = release_motion(
            self.offset,
            release,
            velocity,
            axis,
            self.settings.bounds,
            &self.settings.animation,
        );

        if release.is_triggered() {
            self.phase = Phase::FlyingOff;
            self.motion = Some(motion);
        } else if motion.is_finished() {
            self.phase = Phase::Idle;
            self.offset = Vector::ZERO;
            self.motion = None;
        } else {
            self.phase = Phase::SpringingBack;
            self.motion = Some(motion);
        }

        Some(GestureState {
            displacement,
            velocity,
            release,
        })
    }

    fn displacement(&self) -> Vector {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{Release, Side, SwipeDirection};

    const FRAME: Duration = Duration::from_millis(16);

    fn settings() -> SwipeSettings {
        SwipeSettings::from_config(&Config::default(), 400.0)
    }

    fn row() -> SwipeRow {
        SwipeRow::new(0, ListItem::new("1", "React"), settings())
    }

    fn swipe(row: &mut SwipeRow, from_x: f32, to_x: f32) -> Effect {
        let t0 = Instant::now();
        row.handle(Message::DragStarted(Point::new(from_x, 30.0)), t0);
        row.handle(
            Message::DragMoved(Point::new((from_x + to_x) / 2.0, 30.0)),
            t0 + Duration::from_millis(60),
        );
        row.handle(
            Message::DragEnded(Point::new(to_x, 30.0)),
            t0 + Duration::from_millis(120),
        )
    }

    fn run_animation(row: &mut SwipeRow) -> Vec<Effect> {
        let mut effects = Vec::new();
        for _ in 0..200 {
            if !row.is_animating() {
                break;
            }
            effects.push(row.advance(FRAME));
        }
        effects
    }

    #[test]
    fn new_row_is_idle() {
        let row = row();
        assert_eq!(row.state(), RowState::Idle);
        assert!(!row.drag().is_dragging);
        assert_eq!(row.offset(), Vector::ZERO);
    }

    #[test]
    fn starting_a_drag_sets_dragging() {
        let mut row = row();
        let effect = row.handle(Message::DragStarted(Point::new(100.0, 30.0)), Instant::now());

        assert_eq!(effect, Effect::DragStarted(Point::new(100.0, 30.0)));
        assert!(row.drag().is_dragging);
        assert_eq!(row.state(), RowState::Dragging);
        assert_eq!(row.drag().distance(), Vector::ZERO);
    }

    #[test]
    fn offset_follows_pointer_on_axis() {
        let mut row = row();
        let t0 = Instant::now();
        row.handle(Message::DragStarted(Point::new(100.0, 30.0)), t0);
        row.handle(Message::DragMoved(Point::new(140.0, 55.0)), t0 + FRAME);
        assert_eq!(row.offset(), Vector::new(40.0, 0.0));
    }

    #[test]
    fn offset_is_bounded_by_row_width() {
        let mut row = row();
        let t0 = Instant::now();
        row.handle(Message::DragStarted(Point::new(10.0, 30.0)), t0);
        row.handle(Message::DragMoved(Point::new(900.0, 30.0)), t0 + FRAME);
        assert_eq!(row.offset(), Vector::new(400.0, 0.0));
    }

    #[test]
    fn release_past_threshold_triggers() {
        let mut row = row();
        let effect = swipe(&mut row, 100.0, 210.0);

        match effect {
            Effect::DragEnded(_, gesture) => {
                assert_eq!(gesture.displacement, Vector::new(110.0, 0.0));
                assert_eq!(gesture.release, Release::Triggered(Side::Right));
                assert!(gesture.velocity.x > 0.0);
            }
            other => panic!("expected DragEnded, got {:?}", other),
        }
        assert!(!row.drag().is_dragging);
        assert_eq!(row.state(), RowState::Triggered);
        assert_eq!(row.phase(), Phase::FlyingOff);
    }

    #[test]
    fn triggered_row_flies_off_then_is_removed() {
        let mut row = row();
        swipe(&mut row, 100.0, 210.0);

        let effects = run_animation(&mut row);
        assert_eq!(effects.last(), Some(&Effect::Removed));
        assert_eq!(row.phase(), Phase::Removed);
        assert_eq!(row.offset(), Vector::new(400.0, 0.0));
    }

    #[test]
    fn short_release_springs_back_to_idle() {
        let mut row = row();
        let effect = swipe(&mut row, 100.0, 150.0);

        match effect {
            Effect::DragEnded(_, gesture) => assert_eq!(gesture.release, Release::SpringBack),
            other => panic!("expected DragEnded, got {:?}", other),
        }
        assert!(!row.drag().is_dragging);
        assert_eq!(row.state(), RowState::Idle);
        assert_eq!(row.phase(), Phase::SpringingBack);

        let effects = run_animation(&mut row);
        assert!(effects.iter().all(|e| *e == Effect::None));
        assert_eq!(row.phase(), Phase::Idle);
        assert_eq!(row.offset(), Vector::ZERO);
    }

    #[test]
    fn click_without_movement_settles_immediately() {
        let mut row = row();
        swipe(&mut row, 100.0, 100.0);
        assert_eq!(row.phase(), Phase::Idle);
        assert!(!row.is_animating());
    }

    #[test]
    fn grabbing_a_springing_row_continues_from_current_offset() {
        let mut row = row();
        swipe(&mut row, 100.0, 160.0);
        row.advance(FRAME);
        let mid_spring = row.offset();
        assert!(mid_spring.x > 0.0);

        let t0 = Instant::now();
        row.handle(Message::DragStarted(Point::new(50.0, 30.0)), t0);
        assert_eq!(row.phase(), Phase::Dragging);
        assert!(!row.is_animating());

        row.handle(Message::DragMoved(Point::new(60.0, 30.0)), t0 + FRAME);
        assert_eq!(row.offset(), mid_spring + Vector::new(10.0, 0.0));
    }

    #[test]
    fn flying_row_ignores_new_drags() {
        let mut row = row();
        swipe(&mut row, 100.0, 300.0);
        let effect = row.handle(Message::DragStarted(Point::new(10.0, 30.0)), Instant::now());
        assert_eq!(effect, Effect::None);
        assert_eq!(row.phase(), Phase::FlyingOff);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut row = row();
        let effect = row.handle(Message::DragEnded(Point::new(300.0, 30.0)), Instant::now());
        assert_eq!(effect, Effect::None);
        assert_eq!(row.state(), RowState::Idle);
    }

    #[test]
    fn left_swipe_with_left_direction_flies_left() {
        let mut settings = settings();
        settings.trigger = Trigger::new(90.0, SwipeDirection::Left);
        let mut row = SwipeRow::new(0, ListItem::new("1", "React"), settings);

        swipe(&mut row, 300.0, 180.0);
        assert_eq!(row.state(), RowState::Triggered);
        run_animation(&mut row);
        assert_eq!(row.offset(), Vector::new(-400.0, 0.0));
    }

    #[test]
    fn resize_reclamps_active_drag() {
        let mut row = row();
        let t0 = Instant::now();
        row.handle(Message::DragStarted(Point::new(0.0, 30.0)), t0);
        row.handle(Message::DragMoved(Point::new(350.0, 30.0)), t0 + FRAME);
        row.set_bounds(Size::new(200.0, 60.0));
        assert_eq!(row.offset(), Vector::new(200.0, 0.0));
    }
}
