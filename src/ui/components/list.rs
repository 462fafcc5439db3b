// SPDX-License-Identifier: MPL-2.0
//! Bulleted list with one outlined row per item.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

const BULLET_SIZE: f32 = 8.0;

pub fn list<'a, Message: 'a>(items: &[String]) -> Element<'a, Message> {
    let column = items.iter().fold(Column::new().spacing(spacing::XS), |column, item| {
        let bullet = Container::new(Space::new().width(BULLET_SIZE).height(BULLET_SIZE))
            .style(container_styles::pill(palette::SALMON));
        column.push(
            Container::new(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(bullet)
                    .push(Text::new(item.clone()).size(typography::BODY)),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(container_styles::list_item),
        )
    });
    column.into()
}
