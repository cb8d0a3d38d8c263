// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the list.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The display locale is taken from the `--lang` flag, then
//! the `general.language` setting, then the system locale, and falls back to
//! `en-US`.

pub mod fluent;
