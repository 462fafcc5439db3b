// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, INK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn outlined(width: f32, rad: f32) -> Border {
    Border {
        color: INK,
        width,
        radius: rad.into(),
    }
}

/// Showcase card surface. Follows the theme background so cards stay
/// readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        text_color: Some(theme.palette().text),
        border: outlined(border::WIDTH_LG, radius::MD),
        shadow: shadow::GAME,
        ..Default::default()
    }
}

/// Page background behind the sections.
pub fn page(theme: &Theme) -> container::Style {
    let background = if theme.extended_palette().is_dark {
        palette::SHADOW
    } else {
        palette::CREAM
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Dark navigation column.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(INK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Top bar holding the search box and preference toggles.
pub fn header(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        text_color: Some(theme.palette().text),
        border: Border {
            color: INK,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Pill with a solid fill (badges, chips, step dots).
pub fn pill(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(INK),
        border: outlined(border::WIDTH_SM, radius::FULL),
        ..Default::default()
    }
}

/// Alert box: tinted body with a solid accent outline.
pub fn alert(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(theme.palette().text),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Code snippet background.
pub fn code(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(INK)),
        text_color: Some(palette::CREAM),
        border: outlined(border::WIDTH_SM, radius::SM),
        ..Default::default()
    }
}

/// Dimmed layer behind modals and drawers.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog and drawer panel surface.
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::GAME_LG,
        ..card(theme)
    }
}

/// Slide in the carousel demo.
pub fn slide(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        text_color: Some(INK),
        border: outlined(border::WIDTH_LG, radius::MD),
        ..Default::default()
    }
}

/// Placeholder block shown while content loads.
pub fn skeleton(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Row of a bulleted list.
pub fn list_item(theme: &Theme) -> container::Style {
    container::Style {
        border: outlined(border::WIDTH_SM, radius::NONE),
        shadow: shadow::GAME_SM,
        ..card(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_outline_and_hard_shadow() {
        let style = card(&Theme::Light);
        assert_eq!(style.border.color, INK);
        assert_eq!(style.shadow.blur_radius, 0.0);
        assert!(style.background.is_some());
    }

    #[test]
    fn page_background_follows_theme() {
        assert_ne!(page(&Theme::Light).background, page(&Theme::Dark).background);
    }

    #[test]
    fn alert_tints_accent_color() {
        let style = alert(palette::DANGER)(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert_eq!(bg.a, opacity::OVERLAY_SUBTLE);
        assert_eq!(style.border.color, palette::DANGER);
    }

    #[test]
    fn dialog_shadow_is_larger_than_card() {
        assert!(dialog(&Theme::Dark).shadow.offset.x > card(&Theme::Dark).shadow.offset.x);
    }
}
