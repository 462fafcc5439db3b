// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Catalog buttons use the "game" look: a thick ink outline and a hard
//! offset shadow that shrinks on hover and disappears when pressed.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, INK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn game_border(rad: f32) -> Border {
    Border {
        color: INK,
        width: border::WIDTH_SM,
        radius: rad.into(),
    }
}

fn pressable_shadow(status: button::Status) -> Shadow {
    match status {
        button::Status::Active => shadow::GAME,
        button::Status::Hovered => shadow::GAME_SM,
        button::Status::Pressed | button::Status::Disabled => shadow::NONE,
    }
}

/// Solid "game" button with the given fill and label colours.
pub fn game(fill: Color, text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| match status {
        button::Status::Disabled => disabled_style(),
        _ => button::Style {
            background: Some(Background::Color(fill)),
            text_color,
            border: game_border(radius::SM),
            shadow: pressable_shadow(status),
            snap: true,
        },
    }
}

/// Borderless button that only tints on hover.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let tint = |alpha: f32| Some(Background::Color(Color { a: alpha, ..INK }));

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: if status == button::Status::Disabled {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            }
        } else {
            text_color
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar navigation entry; the active section is filled with the brand colour.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match (active, status) {
            (true, _) => Some(Background::Color(palette::SALMON)),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                }))
            }
            (false, _) => None,
        };

        button::Style {
            background,
            text_color: if active { INK } else { WHITE },
            border: if active {
                game_border(radius::SM)
            } else {
                Border::default()
            },
            shadow: if active { shadow::GAME_SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Toggle-group entry (tabs, page numbers, Preview/Code switch).
pub fn segment(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if status == button::Status::Disabled {
            return disabled_style();
        }
        let (fill, text_color) = if selected {
            (palette::GOLD, INK)
        } else {
            (
                theme.extended_palette().background.base.color,
                theme.palette().text,
            )
        };
        button::Style {
            background: Some(Background::Color(fill)),
            text_color,
            border: game_border(radius::SM),
            shadow: if selected {
                shadow::NONE
            } else {
                pressable_shadow(status)
            },
            snap: true,
        }
    }
}

/// Colour swatch card; pressing it copies the colour.
pub fn swatch(fill: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(fill)),
        text_color: INK,
        border: Border {
            color: INK,
            width: border::WIDTH_LG,
            radius: radius::MD.into(),
        },
        shadow: pressable_shadow(status),
        snap: true,
    }
}

/// Inline text link (links, breadcrumb trail, menu entries).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(palette::GOLD)), INK)
        }
        button::Status::Active => (None, palette::SALMON),
        button::Status::Disabled => (None, theme.palette().text),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_button_uses_given_fill() {
        let style = game(palette::SALMON, INK)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::SALMON)));
        assert_eq!(style.border.color, INK);
    }

    #[test]
    fn game_shadow_shrinks_when_pressed() {
        let style_fn = game(palette::GOLD, INK);
        let active = style_fn(&Theme::Light, button::Status::Active);
        let hovered = style_fn(&Theme::Light, button::Status::Hovered);
        let pressed = style_fn(&Theme::Light, button::Status::Pressed);

        assert!(active.shadow.offset.x > hovered.shadow.offset.x);
        assert_eq!(pressed.shadow.offset.x, 0.0);
    }

    #[test]
    fn disabled_game_button_is_grayed_out() {
        let style = game(palette::SALMON, INK)(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_200)));
    }

    #[test]
    fn nav_item_highlights_active_section() {
        let active = nav_item(true)(&Theme::Dark, button::Status::Active);
        let idle = nav_item(false)(&Theme::Dark, button::Status::Active);
        assert!(active.background.is_some());
        assert!(idle.background.is_none());
    }

    #[test]
    fn ghost_button_tints_on_hover() {
        let idle = ghost(&Theme::Light, button::Status::Active);
        let hover = ghost(&Theme::Light, button::Status::Hovered);
        assert_ne!(idle.background, hover.background);
    }
}
