// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a category-coloured badge, a title, a
//! description and a dismiss button. The overlay stacks them in the
//! bottom-right corner, oldest on top.

use super::manager::{Manager, Message};
use super::notification::{Category, Notification};
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let category = notification.category();
        let accent = category.color();

        let badge = Container::new(Text::new(category.glyph()).size(typography::BODY_LG))
            .width(Length::Fixed(sizing::STEP_DOT))
            .height(Length::Fixed(sizing::STEP_DOT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| badge_style(accent));

        let label = Text::new(Self::category_label(category, i18n))
            .size(typography::CAPTION)
            .color(accent);

        let body = Column::new()
            .spacing(spacing::XXS)
            .push(label)
            .push(Text::new(notification.title()).size(typography::BODY_LG))
            .push(
                Text::new(notification.description())
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_STRONG,
                            ..theme.palette().text
                        }),
                    }),
            );

        let dismiss_button = button(Text::new("✕").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders all active toasts, bottom-right, in publish order.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    /// Translated label for known categories, the raw text otherwise.
    fn category_label(category: &Category, i18n: &I18n) -> String {
        match category {
            Category::Success => i18n.tr("toast-category-success"),
            Category::Error => i18n.tr("toast-category-error"),
            Category::Info => i18n.tr("toast-category-info"),
            Category::Other(raw) => raw.clone(),
        }
    }
}

fn badge_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent)),
        text_color: Some(palette::INK),
        border: Border {
            color: palette::INK,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent,
            width: border::WIDTH_LG,
            radius: radius::MD.into(),
        },
        shadow: shadow::GAME,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS);
        assert_eq!(style.border.color, palette::SUCCESS);
        assert!(style.background.is_some());
    }

    #[test]
    fn unknown_category_label_is_raw_text() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let label = Toast::category_label(&Category::parse("Quest!"), &i18n);
        assert_eq!(label, "Quest!");
    }

    #[test]
    fn known_category_labels_are_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for category in [Category::Success, Category::Error, Category::Info] {
            assert!(!Toast::category_label(&category, &i18n).starts_with("MISSING"));
        }
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let active = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);
        drop(_empty);
        let _ = manager.publish("t", "d", "weird");
        let _filled = Toast::view_overlay(&manager, &i18n);
    }
}
