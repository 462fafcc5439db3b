// SPDX-License-Identifier: MPL-2.0
//! Monospace snippet with a copy button.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};

pub fn code_block<'a, Message: Clone + 'a>(
    code: &'a str,
    copy_label: impl Into<String>,
    on_copy: Message,
) -> Element<'a, Message> {
    let toolbar = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(copy_label.into()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .on_press(on_copy)
                .style(button_styles::game(palette::GOLD, palette::INK)),
        );

    let snippet = Text::new(code)
        .font(Font::MONOSPACE)
        .size(typography::BODY_SM);

    Container::new(Column::new().spacing(spacing::XS).push(toolbar).push(snippet))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::code)
        .into()
}
