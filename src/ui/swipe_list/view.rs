// SPDX-License-Identifier: MPL-2.0
//! Rendering of the swipe list.

use super::row::{self, SwipeRow};
use super::{Message, State};
use crate::gesture::SwipeDirection;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{swipeable, DragEvent};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{keyed_column, scrollable, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Renders every row stacked vertically, or a placeholder once the list is empty.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if self.is_empty() {
            return Container::new(Text::new(ctx.i18n.tr("list-empty")).size(typography::BODY_LG))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::empty_list)
                .into();
        }

        let action_label = ctx.i18n.tr("swipe-action-delete");
        let rows = keyed_column(
            self.rows()
                .iter()
                .map(|row| (row.key(), view_row(row, &action_label))),
        )
        .width(Length::Fill);

        scrollable(rows)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn view_row<'a>(row: &'a SwipeRow, action_label: &str) -> Element<'a, Message> {
    let settings = row.settings();

    let label = Text::new(row.item().content.as_str()).size(typography::BODY_LG);
    let foreground = Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::row_foreground);

    let surface = swipeable(
        row.id(),
        action_layer(settings.trigger.direction, action_label),
        foreground,
    )
    .axis(settings.axis)
    .offset(row.offset())
    .on_drag_start(|event: DragEvent| Message::Row {
        id: event.uid,
        message: row::Message::DragStarted(event.position),
    })
    .on_drag(|event: DragEvent| Message::Row {
        id: event.uid,
        message: row::Message::DragMoved(event.position),
    })
    .on_drag_end(|event: DragEvent| Message::Row {
        id: event.uid,
        message: row::Message::DragEnded(event.position),
    });

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fixed(settings.bounds.height))
        .clip(true)
        .into()
}

/// The layer uncovered by the swipe: the action label sits on the side the
/// foreground moves away from.
fn action_layer<'a>(direction: SwipeDirection, label: &str) -> Element<'a, Message> {
    let label_at = |align: Horizontal| {
        Container::new(Text::new(label.to_owned()).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([0.0, spacing::LG])
            .align_x(align)
            .align_y(Vertical::Center)
    };

    let content: Element<'a, Message> = match direction {
        SwipeDirection::Right => label_at(Horizontal::Left).into(),
        SwipeDirection::Left => label_at(Horizontal::Right).into(),
        SwipeDirection::Both => Row::new()
            .push(label_at(Horizontal::Left))
            .push(label_at(Horizontal::Right))
            .into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::row_action)
        .into()
}
