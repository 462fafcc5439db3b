// SPDX-License-Identifier: MPL-2.0
//! Small pill label.

use super::button::Variant;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Container, Text};
use iced::{Color, Element};

/// Fill colour of a badge. Ghost badges fall back to a light gray pill.
#[must_use]
pub fn fill(variant: Variant) -> Color {
    variant.fill().unwrap_or(palette::GRAY_100)
}

pub fn badge<'a, Message: 'a>(label: impl Into<String>, variant: Variant) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(container_styles::pill(fill(variant)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_badge_still_has_a_fill() {
        assert_eq!(fill(Variant::Ghost), palette::GRAY_100);
        assert_eq!(fill(Variant::Accent), palette::GOLD);
    }
}
