// SPDX-License-Identifier: MPL-2.0
//! A two-layer widget whose foreground can be dragged off its background.
//!
//! The background (usually an action affordance such as a "Delete" label) is
//! drawn fixed, the foreground is drawn on top of it translated by the offset
//! the owner supplies. The widget itself only turns pointer input into
//! drag-start / drag / drag-end messages; where the foreground sits is decided
//! by the owner's state, so animations stay in the application update loop.

use crate::gesture::Axis;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Pointer event reported by a [`Swipeable`].
#[derive(Debug, Clone, PartialEq)]
pub struct DragEvent {
    /// Identifier given to the widget, for correlating events with rows.
    pub uid: String,
    /// Pointer position in the widget's layout space, which is content
    /// space when the widget sits inside a `scrollable`.
    pub position: Point,
}

type Handler<'a, Message> = Box<dyn Fn(DragEvent) -> Message + 'a>;

/// A background layer with a draggable foreground layer on top.
pub struct Swipeable<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    uid: String,
    background: Element<'a, Message, Theme, Renderer>,
    foreground: Element<'a, Message, Theme, Renderer>,
    axis: Axis,
    offset: Vector,
    width: Length,
    height: Length,
    on_drag_start: Option<Handler<'a, Message>>,
    on_drag: Option<Handler<'a, Message>>,
    on_drag_end: Option<Handler<'a, Message>>,
}

impl<'a, Message, Theme, Renderer> Swipeable<'a, Message, Theme, Renderer> {
    /// Creates a new `Swipeable` with the given background and foreground layers.
    pub fn new(
        uid: impl Into<String>,
        background: impl Into<Element<'a, Message, Theme, Renderer>>,
        foreground: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            uid: uid.into(),
            background: background.into(),
            foreground: foreground.into(),
            axis: Axis::default(),
            offset: Vector::ZERO,
            width: Length::Fill,
            height: Length::Fill,
            on_drag_start: None,
            on_drag: None,
            on_drag_end: None,
        }
    }

    /// Restricts foreground translation to `axis`.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets how far the foreground is drawn from its resting place.
    #[must_use]
    pub fn offset(mut self, offset: Vector) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Message produced when the pointer goes down on the widget.
    #[must_use]
    pub fn on_drag_start(mut self, f: impl Fn(DragEvent) -> Message + 'a) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    /// Message produced for every pointer move while held.
    #[must_use]
    pub fn on_drag(mut self, f: impl Fn(DragEvent) -> Message + 'a) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    /// Message produced when the held pointer is released, wherever it is.
    #[must_use]
    pub fn on_drag_end(mut self, f: impl Fn(DragEvent) -> Message + 'a) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }

    fn handler(&self, gesture: Gesture) -> Option<&Handler<'a, Message>> {
        match gesture {
            Gesture::Start(_) => self.on_drag_start.as_ref(),
            Gesture::Move(_) => self.on_drag.as_ref(),
            Gesture::End(_) => self.on_drag_end.as_ref(),
        }
    }
}

/// Which pointer holds the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Start(Point),
    Move(Point),
    End(Point),
}

impl Gesture {
    fn position(self) -> Point {
        match self {
            Gesture::Start(p) | Gesture::Move(p) | Gesture::End(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct State {
    pointer: Option<Pointer>,
    last_position: Option<Point>,
    /// Offset from raw event positions to the space `cursor` reports in.
    /// Non-zero when an ancestor such as `scrollable` translates the cursor.
    translation: Vector,
}

impl State {
    /// Turns a raw event into a gesture step, tracking which pointer is held.
    ///
    /// Every position is reported in the cursor's space, the same space as
    /// `bounds`.
    fn interpret(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Gesture> {
        let gesture = match (event, self.pointer) {
            (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), None) => {
                let position = cursor.position_over(bounds)?;
                self.pointer = Some(Pointer::Mouse);
                Gesture::Start(position)
            }
            (Event::Mouse(mouse::Event::CursorMoved { position }), Some(Pointer::Mouse)) => {
                Gesture::Move(self.localize(*position, cursor))
            }
            (
                Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
                Some(Pointer::Mouse),
            ) => {
                self.pointer = None;
                Gesture::End(cursor.land().position().or(self.last_position)?)
            }
            (Event::Touch(touch::Event::FingerPressed { id, position }), None) => {
                let position = self.localize(*position, cursor);
                if !bounds.contains(position) {
                    return None;
                }
                self.pointer = Some(Pointer::Finger(*id));
                Gesture::Start(position)
            }
            (
                Event::Touch(touch::Event::FingerMoved { id, position }),
                Some(Pointer::Finger(held)),
            ) if *id == held => Gesture::Move(self.localize(*position, cursor)),
            (
                Event::Touch(
                    touch::Event::FingerLifted { id, position }
                    | touch::Event::FingerLost { id, position },
                ),
                Some(Pointer::Finger(held)),
            ) if *id == held => {
                self.pointer = None;
                Gesture::End(self.localize(*position, cursor))
            }
            _ => return None,
        };

        self.last_position = Some(gesture.position());
        Some(gesture)
    }

    /// Maps a raw event position into the cursor's space, refreshing the
    /// known translation whenever the cursor has a position.
    fn localize(&mut self, raw: Point, cursor: mouse::Cursor) -> Point {
        if let Some(position) = cursor.land().position() {
            self.translation = position - raw;
        }
        raw + self.translation
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Swipeable<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.background), Tree::new(&self.foreground)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.background, &self.foreground]);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);

        let background =
            self.background
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, &limits);
        let foreground =
            self.foreground
                .as_widget_mut()
                .layout(&mut tree.children[1], renderer, &limits);

        let intrinsic = Size::new(
            background.size().width.max(foreground.size().width),
            background.size().height.max(foreground.size().height),
        );
        let size = limits.resolve(self.width, self.height, intrinsic);

        layout::Node::with_children(size, vec![background, foreground])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let mut children = layout.children();
        let (Some(background_layout), Some(foreground_layout)) = (children.next(), children.next())
        else {
            return;
        };
        let translation = self.axis.constrain(self.offset);

        renderer.with_layer(bounds, |renderer| {
            self.background.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                background_layout,
                cursor,
                viewport,
            );

            renderer.with_translation(translation, |renderer| {
                self.foreground.as_widget().draw(
                    &tree.children[1],
                    renderer,
                    theme,
                    style,
                    foreground_layout,
                    cursor,
                    viewport,
                );
            });
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let gesture = tree
            .state
            .downcast_mut::<State>()
            .interpret(event, layout.bounds(), cursor);

        if let Some(gesture) = gesture {
            if let Some(handler) = self.handler(gesture) {
                shell.publish(handler(DragEvent {
                    uid: self.uid.clone(),
                    position: gesture.position(),
                }));
            }
            shell.capture_event();
            return;
        }

        let mut children = layout.children();
        let (Some(background_layout), Some(foreground_layout)) = (children.next(), children.next())
        else {
            return;
        };

        self.foreground.as_widget_mut().update(
            &mut tree.children[1],
            event,
            foreground_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
        self.background.as_widget_mut().update(
            &mut tree.children[0],
            event,
            background_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.pointer.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::None
        }
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        let mut children = layout.children();
        let (Some(background_layout), Some(foreground_layout)) = (children.next(), children.next())
        else {
            return;
        };

        self.background.as_widget_mut().operate(
            &mut tree.children[0],
            background_layout,
            renderer,
            operation,
        );
        self.foreground.as_widget_mut().operate(
            &mut tree.children[1],
            foreground_layout,
            renderer,
            operation,
        );
    }
}

impl<'a, Message, Theme, Renderer> From<Swipeable<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(swipeable: Swipeable<'a, Message, Theme, Renderer>) -> Self {
        Self::new(swipeable)
    }
}

/// Helper function to create a [`Swipeable`].
pub fn swipeable<'a, Message, Theme, Renderer>(
    uid: impl Into<String>,
    background: impl Into<Element<'a, Message, Theme, Renderer>>,
    foreground: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Swipeable<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Swipeable::new(uid, background, foreground)
}
