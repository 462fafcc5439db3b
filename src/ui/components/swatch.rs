// SPDX-License-Identifier: MPL-2.0
//! Colour swatches of the brand palette.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, tooltip};
use iced::widget::{button, container, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// A named palette colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Color,
}

impl Swatch {
    /// Lower-case `#rrggbb` code.
    #[must_use]
    pub fn hex(&self) -> String {
        let [r, g, b, _] = self.color.into_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Swatches displayed on the Colors section, in display order.
pub const BRAND: [Swatch; 7] = [
    Swatch { name: "Salmon", color: palette::SALMON },
    Swatch { name: "Gold", color: palette::GOLD },
    Swatch { name: "Green", color: palette::GREEN },
    Swatch { name: "Sky", color: palette::SKY },
    Swatch { name: "Ink", color: palette::INK },
    Swatch { name: "Cream", color: palette::CREAM },
    Swatch { name: "Shadow", color: palette::SHADOW },
];

/// Renders a pressable swatch card.
pub fn view<'a, Message: Clone + 'a>(
    swatch: Swatch,
    tip: impl Into<String>,
    on_press: Message,
) -> Element<'a, Message> {
    let chip = Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SWATCH_HEIGHT - spacing::XXL));

    let label = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(swatch.name).size(typography::BODY_LG))
        .push(Text::new(swatch.hex()).size(typography::CAPTION));

    let card = button(
        Column::new().push(chip).push(
            container(label)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        ),
    )
    .width(Length::Fixed(sizing::SWATCH_WIDTH))
    .height(Length::Fixed(sizing::SWATCH_HEIGHT))
    .padding(spacing::SM)
    .on_press(on_press)
    .style(button_styles::swatch(swatch.color));

    tooltip::styled(card, tip, iced::widget::tooltip::Position::Top).into()
}
