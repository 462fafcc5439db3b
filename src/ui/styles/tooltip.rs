// SPDX-License-Identifier: MPL-2.0
//! Tooltip and popover styles.
//!
//! Tooltips are dark ink bubbles with cream text in both themes, matching the
//! sidebar, so they always stand out from the page.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Style for the tooltip bubble.
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette::SHADOW,
        },
        shadow: shadow::GAME_SM,
        text_color: Some(palette::CREAM),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// tooltip::styled(swatch, "Click to copy", tooltip::Position::Top)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_is_dark_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = tooltip_container(&theme);
            assert_eq!(style.background, Some(Background::Color(palette::INK)));
            assert_eq!(style.text_color, Some(palette::CREAM));
        }
    }
}
