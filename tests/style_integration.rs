// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::{Background, Theme};
    use iced_swipe::ui::design_tokens::{opacity, palette, spacing, typography};
    use iced_swipe::ui::styles::container;
    use iced_swipe::ui::theming::ThemeMode;

    #[test]
    fn all_container_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::row_foreground(&theme);
            let _ = container::row_action(&theme);
            let _ = container::empty_list(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::DANGER_500;
        let _ = spacing::LG;
        let _ = opacity::DIVIDER;
        let _ = typography::BODY_LG;
    }

    #[test]
    fn action_layer_is_darker_in_dark_mode() {
        let light = container::row_action(&ThemeMode::Light.theme());
        let dark = container::row_action(&ThemeMode::Dark.theme());

        match (light.background, dark.background) {
            (Some(Background::Color(light)), Some(Background::Color(dark))) => {
                assert!(light.r > dark.r);
            }
            other => panic!("expected solid backgrounds, got {:?}", other),
        }
    }

    #[test]
    fn foreground_follows_theme_background() {
        let light = container::row_foreground(&Theme::Light);
        let dark = container::row_foreground(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
