// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and type sizes shared by the swipe list styles.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Border**: Border width scale

## Examples

```
use iced_swipe::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let divider = Color {
    a: opacity::DIVIDER,
    ..palette::BLACK
};

let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Destructive action surface
    pub const DANGER_500: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const DANGER_700: Color = Color::from_rgb(0.75, 0.0, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Row separator line
    pub const DIVIDER: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Row content text
    pub const BODY_LG: f32 = 16.0;

    /// Action label behind the row
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Row separator width
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::LG > 0.0);
    assert!(spacing::LG % 8.0 == 0.0);

    assert!(opacity::DIVIDER > 0.0 && opacity::DIVIDER < opacity::OPAQUE);

    assert!(typography::BODY_LG > typography::BODY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_shades_darken_on_press() {
        assert!(palette::DANGER_700.r < palette::DANGER_500.r);
        assert_eq!(palette::DANGER_700.g, 0.0);
    }

    #[test]
    fn overlay_is_translucent() {
        assert!(opacity::OVERLAY_MEDIUM > opacity::DIVIDER);
        assert!(opacity::OVERLAY_MEDIUM < opacity::OPAQUE);
    }
}
