// SPDX-License-Identifier: MPL-2.0
//! Application root state: one swipe list mounted in a window.
//!
//! The `App` struct wires the list to localization and persisted settings
//! and turns list effects into log records. Rows are removed from the list
//! itself; the app only keeps the record of what was deleted.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::swipe_list::{self, demo_items, ListItem, SwipeSettings};
use crate::ui::theming::ThemeMode;
use iced::widget::Container;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    list: swipe_list::State,
    theme_mode: ThemeMode,
    /// Items swiped away during this session, oldest first.
    deleted: Vec<ListItem>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("rows", &self.list.len())
            .field("deleted", &self.deleted.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 280;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Flags::default(), Config::default())
    }
}

impl App {
    /// Loads the persisted config and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    /// Builds the state from an already loaded config.
    pub fn with_config(flags: Flags, mut config: Config) -> Self {
        if let Some(distance) = flags.trigger_distance {
            config.swipe.trigger_distance = Some(distance);
        }

        let i18n = I18n::new(flags.lang, &config);
        let settings = SwipeSettings::from_config(&config, WINDOW_DEFAULT_WIDTH as f32);
        tracing::debug!(
            trigger_distance = settings.trigger.distance,
            direction = %settings.trigger.direction,
            axis = %settings.axis,
            "swipe settings"
        );

        let items = flags.items.unwrap_or_else(demo_items);

        Self {
            i18n,
            list: swipe_list::State::new(items, settings),
            theme_mode: config.general.theme_mode,
            deleted: Vec::new(),
        }
    }

    #[must_use]
    pub fn list(&self) -> &swipe_list::State {
        &self.list
    }

    #[must_use]
    pub fn deleted(&self) -> &[ListItem] {
        &self.deleted
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.list.is_animating()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::List(message) => {
                let effect = self.list.update(message);
                self.handle_list_effect(effect);
            }
        }
        Task::none()
    }

    fn handle_list_effect(&mut self, effect: swipe_list::Effect) {
        match effect {
            swipe_list::Effect::None => {}
            swipe_list::Effect::DragStarted(event) => {
                tracing::debug!(
                    uid = %event.uid,
                    x = event.position.x,
                    y = event.position.y,
                    "drag start"
                );
            }
            swipe_list::Effect::DragEnded { event, gesture } => {
                tracing::debug!(
                    uid = %event.uid,
                    displacement = ?gesture.displacement,
                    velocity = ?gesture.velocity,
                    release = ?gesture.release,
                    "drag end"
                );
            }
            swipe_list::Effect::Deleted(items) => {
                for item in &items {
                    tracing::info!(id = %item.id, content = %item.content, "item deleted");
                }
                self.deleted.extend(items);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let list = self
            .list
            .view(swipe_list::ViewContext { i18n: &self.i18n })
            .map(Message::List);

        Container::new(list)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::swipe_list::{row, RowState};
    use iced::Point;

    fn row_message(id: &str, message: row::Message) -> Message {
        Message::List(swipe_list::Message::Row {
            id: id.to_string(),
            message,
        })
    }

    fn settle(app: &mut App) {
        let mut now = std::time::Instant::now();
        for _ in 0..200 {
            if !app.list().is_animating() {
                break;
            }
            now += std::time::Duration::from_millis(16);
            let _ = app.update(Message::List(swipe_list::Message::Tick(now)));
        }
    }

    #[test]
    fn default_app_mounts_demo_items() {
        let app = App::default();
        assert_eq!(app.list().len(), 6);
        assert!(app.deleted().is_empty());
    }

    #[test]
    fn flags_replace_demo_items() {
        let flags = Flags {
            items: Some(vec![ListItem::new("a", "Alpha")]),
            ..Flags::default()
        };
        let app = App::with_config(flags, Config::default());
        assert_eq!(app.list().rows()[0].id(), "a");
        assert_eq!(app.list().len(), 1);
    }

    #[test]
    fn trigger_distance_flag_overrides_config() {
        let flags = Flags {
            trigger_distance: Some(150.0),
            ..Flags::default()
        };
        let app = App::with_config(flags, Config::default());
        assert_eq!(app.list().settings().trigger.distance, 150.0);
    }

    #[test]
    fn long_swipe_records_deletion() {
        let mut app = App::default();
        let _ = app.update(row_message("1", row::Message::DragStarted(Point::new(10.0, 10.0))));
        assert_eq!(
            app.list().row("1").map(|row| row.state()),
            Some(RowState::Dragging)
        );
        let _ = app.update(row_message("1", row::Message::DragMoved(Point::new(150.0, 10.0))));
        let _ = app.update(row_message("1", row::Message::DragEnded(Point::new(200.0, 10.0))));
        settle(&mut app);

        assert_eq!(app.deleted(), &[ListItem::new("1", "React")]);
        assert_eq!(app.list().len(), 5);
    }

    #[test]
    fn short_swipe_keeps_everything() {
        let mut app = App::default();
        let _ = app.update(row_message("2", row::Message::DragStarted(Point::new(10.0, 10.0))));
        let _ = app.update(row_message("2", row::Message::DragEnded(Point::new(60.0, 10.0))));
        settle(&mut app);

        assert!(app.deleted().is_empty());
        assert_eq!(app.list().len(), 6);
    }

    #[test]
    fn title_is_localized() {
        let flags = Flags {
            lang: Some("fr".into()),
            ..Flags::default()
        };
        let app = App::with_config(flags, Config::default());
        assert_eq!(app.title(), "Glisser pour supprimer");
    }
}
