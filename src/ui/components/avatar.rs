// SPDX-License-Identifier: MPL-2.0
//! Round avatar showing the owner's initials.

use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Font, Length};

/// Shown when the name has no usable letters.
pub const FALLBACK_INITIALS: &str = "HD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Diameter and font size.
    #[must_use]
    pub fn metrics(self) -> (f32, f32) {
        match self {
            Size::Sm => (40.0, typography::CAPTION),
            Size::Md => (56.0, typography::TITLE_MD),
            Size::Lg => (96.0, typography::TITLE_LG),
        }
    }
}

/// Uppercased first letters of the first two words of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        letters
    }
}

pub fn avatar<'a, Message: 'a>(name: &str, size: Size) -> Element<'a, Message> {
    let (diameter, font_size) = size.metrics();
    Container::new(
        Text::new(initials(name))
            .size(font_size)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::MONOSPACE
            }),
    )
    .width(Length::Fixed(diameter))
    .height(Length::Fixed(diameter))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(container_styles::pill(palette::GOLD))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_first_two_words() {
        assert_eq!(initials("Daikon Knight"), "DK");
        assert_eq!(initials("radish rogue of the east"), "RR");
        assert_eq!(initials("Mochi"), "M");
    }

    #[test]
    fn blank_name_falls_back() {
        assert_eq!(initials(""), FALLBACK_INITIALS);
        assert_eq!(initials("   "), FALLBACK_INITIALS);
        assert_eq!(initials("!! ??"), FALLBACK_INITIALS);
    }

    #[test]
    fn leading_punctuation_is_skipped() {
        assert_eq!(initials("(sesame) sage"), "SS");
    }
}
