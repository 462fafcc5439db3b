// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every colour, spacing, size and shadow the catalog renders comes from this
module. The palette is the Hakka Daikon brand palette shown on the Colors
section.

## Organization

- **Palette**: Brand and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Hard "game" shadows

## Examples

```
use hakka_showcase::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::INK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Brand
    /// Salmon, the primary brand colour (#f98476).
    pub const SALMON: Color = Color::from_rgb8(0xf9, 0x84, 0x76);
    /// Gold accent (#ffcc00).
    pub const GOLD: Color = Color::from_rgb8(0xff, 0xcc, 0x00);
    /// Green used for success states (#88d66c).
    pub const GREEN: Color = Color::from_rgb8(0x88, 0xd6, 0x6c);
    /// Sky blue used for informational states (#74b9ff).
    pub const SKY: Color = Color::from_rgb8(0x74, 0xb9, 0xff);
    /// Ink, used for borders, text and the sidebar (#2d3436).
    pub const INK: Color = Color::from_rgb8(0x2d, 0x34, 0x36);
    /// Cream page background (#fff4f2).
    pub const CREAM: Color = Color::from_rgb8(0xff, 0xf4, 0xf2);
    /// Deep shadow tone (#1e272e).
    pub const SHADOW: Color = Color::from_rgb8(0x1e, 0x27, 0x2e);

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.94);

    // Semantic colors
    pub const DANGER: Color = Color::from_rgb8(0xf8, 0x71, 0x71);
    pub const SUCCESS: Color = GREEN;
    pub const INFO: Color = SKY;
    /// Accent for toasts whose category is not one of the known ones.
    pub const NEUTRAL: Color = GRAY_400;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SIDEBAR_WIDTH: f32 = 280.0;
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 480.0;
    pub const DRAWER_WIDTH: f32 = 340.0;
    pub const SWATCH_WIDTH: f32 = 150.0;
    pub const SWATCH_HEIGHT: f32 = 96.0;
    pub const CAROUSEL_HEIGHT: f32 = 140.0;
    pub const STEP_DOT: f32 = 32.0;
    pub const PAGE_BUTTON: f32 = 36.0;
    pub const FORM_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale. Pixel-style display sizes for headings, body sizes
    //! for data and labels.

    /// Hero heading on the Introduction section.
    pub const DISPLAY: f32 = 56.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 36.0;

    /// Showcase card titles, modal titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Sub-headings inside cards.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Badges, hex codes, hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 2.0;

    /// Card and swatch outlines.
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    //! Hard, unblurred offsets give the "pressable" look.
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::INK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const GAME_SM: Shadow = Shadow {
        color: palette::INK,
        offset: Vector { x: 2.0, y: 2.0 },
        blur_radius: 0.0,
    };

    pub const GAME: Shadow = Shadow {
        color: palette::INK,
        offset: Vector { x: 4.0, y: 4.0 },
        blur_radius: 0.0,
    };

    pub const GAME_LG: Shadow = Shadow {
        color: palette::INK,
        offset: Vector { x: 8.0, y: 8.0 },
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_LG > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_colors_match_published_hex_codes() {
        let salmon = palette::SALMON.into_rgba8();
        assert_eq!(salmon, [0xf9, 0x84, 0x76, 0xff]);

        let ink = palette::INK.into_rgba8();
        assert_eq!(ink, [0x2d, 0x34, 0x36, 0xff]);
    }
}
