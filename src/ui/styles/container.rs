// SPDX-License-Identifier: MPL-2.0
//! Container styles for swipeable rows.

use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Foreground layer of a row: the content surface that follows the pointer.
///
/// Uses the theme background so the row stays opaque over the action layer,
/// outlined by a faint separator.
pub fn row_foreground(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let divider_base = if extended.is_dark {
        palette::WHITE
    } else {
        palette::BLACK
    };

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::DIVIDER,
                ..divider_base
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Background layer of a row: the destructive action revealed by a swipe.
pub fn row_action(theme: &Theme) -> container::Style {
    let fill = if theme.extended_palette().is_dark {
        palette::DANGER_700
    } else {
        palette::DANGER_500
    };

    container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder shown once every row has been swiped away.
pub fn empty_list(theme: &Theme) -> container::Style {
    let text = theme.extended_palette().background.base.text;

    container::Style {
        text_color: Some(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..text
        }),
        ..Default::default()
    }
}
