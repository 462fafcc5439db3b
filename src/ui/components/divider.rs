// SPDX-License-Identifier: MPL-2.0
//! Horizontal separator, optionally with a centred label.

use crate::ui::design_tokens::{border, palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{rule, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn divider<'a, Message: 'a>(label: Option<String>) -> Element<'a, Message> {
    let line = || Container::new(rule::horizontal(border::WIDTH_LG)).width(Length::Fill);

    match label {
        None => line().into(),
        Some(label) => Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(line())
            .push(
                Container::new(Text::new(label.to_uppercase()).size(typography::TITLE_SM))
                    .padding([spacing::XXS, spacing::MD])
                    .style(container_styles::pill(palette::GOLD)),
            )
            .push(line())
            .into(),
    }
}
