// SPDX-License-Identifier: MPL-2.0
//! Inline text link.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Text};
use iced::{Element, Font};

pub fn link<'a, Message: Clone + 'a>(label: impl Into<String>, on_press: Message) -> Element<'a, Message> {
    button(
        Text::new(label.into())
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::MONOSPACE
            })
            .size(typography::BODY),
    )
    .padding([0.0, spacing::XXS])
    .on_press(on_press)
    .style(button_styles::link)
    .into()
}
