// SPDX-License-Identifier: MPL-2.0
use iced::Point;
use iced_swipe::app::{App, Flags};
use iced_swipe::config::{self, Config, DEFAULT_TRIGGER_DISTANCE};
use iced_swipe::gesture::{Axis, SwipeDirection};
use iced_swipe::i18n::fluent::I18n;
use iced_swipe::ui::swipe_list::{self, load_items, row, RowState, SwipeSettings};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn row_message(id: &str, message: row::Message) -> swipe_list::Message {
    swipe_list::Message::Row {
        id: id.to_string(),
        message,
    }
}

fn settle(list: &mut swipe_list::State, mut now: Instant) -> Vec<swipe_list::Effect> {
    let mut effects = Vec::new();
    for _ in 0..500 {
        if !list.is_animating() {
            break;
        }
        now += Duration::from_millis(16);
        effects.push(list.update_at(swipe_list::Message::Tick(now), now));
    }
    effects
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("swipe-action-delete"), "Supprimer");
}

#[test]
fn config_file_drives_swipe_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[swipe]\ntrigger_distance = 40.0\ndirection = \"left\"\n\n[list]\nrow_height = 80.0\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = SwipeSettings::from_config(&config, 300.0);
    assert_eq!(settings.trigger.distance, 40.0);
    assert_eq!(settings.trigger.direction, SwipeDirection::Left);
    assert_eq!(settings.axis, Axis::X);
    assert_eq!(settings.bounds.height, 80.0);
    assert_eq!(settings.bounds.width, 300.0);
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[swipe\n").expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(config.trigger().distance, DEFAULT_TRIGGER_DISTANCE);
}

#[test]
fn items_file_feeds_the_list() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("items.toml");
    std::fs::write(
        &path,
        "[[items]]\nid = \"mail\"\ncontent = \"Mail\"\n\n[[items]]\nid = \"news\"\ncontent = \"News\"\n",
    )
    .expect("write items");

    let items = load_items(&path).expect("valid items file");
    let app = App::with_config(
        Flags {
            items: Some(items),
            ..Flags::default()
        },
        Config::default(),
    );

    let ids: Vec<_> = app.list().rows().iter().map(|row| row.id()).collect();
    assert_eq!(ids, vec!["mail", "news"]);
}

#[test]
fn swipe_past_threshold_removes_the_row() {
    let settings = SwipeSettings::from_config(&Config::default(), 400.0);
    let mut list = swipe_list::State::new(swipe_list::demo_items(), settings);
    let t0 = Instant::now();

    list.update_at(row_message("5", row::Message::DragStarted(Point::new(100.0, 20.0))), t0);
    list.update_at(
        row_message("5", row::Message::DragMoved(Point::new(160.0, 20.0))),
        t0 + Duration::from_millis(50),
    );
    list.update_at(
        row_message("5", row::Message::DragEnded(Point::new(210.0, 20.0))),
        t0 + Duration::from_millis(100),
    );
    assert_eq!(list.row("5").map(|row| row.state()), Some(RowState::Triggered));

    let effects = settle(&mut list, t0);
    assert!(matches!(
        effects.last(),
        Some(swipe_list::Effect::Deleted(items)) if items.len() == 1 && items[0].id == "5"
    ));
    assert!(list.row("5").is_none());
    assert_eq!(list.len(), 5);
}

#[test]
fn swipe_short_of_threshold_springs_back() {
    let settings = SwipeSettings::from_config(&Config::default(), 400.0);
    let mut list = swipe_list::State::new(swipe_list::demo_items(), settings);
    let t0 = Instant::now();

    list.update_at(row_message("1", row::Message::DragStarted(Point::new(100.0, 20.0))), t0);
    list.update_at(
        row_message("1", row::Message::DragEnded(Point::new(150.0, 20.0))),
        t0 + Duration::from_millis(100),
    );

    settle(&mut list, t0);
    let row = list.row("1").expect("row is kept");
    assert_eq!(row.state(), RowState::Idle);
    assert_eq!(row.offset(), iced::Vector::ZERO);
    assert_eq!(list.len(), 6);
}
