// SPDX-License-Identifier: MPL-2.0
//! Type scale specimen and text link.

use super::{heading, Message, Section, ViewContext};
use crate::ui::components::link::link;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

const SCALE: [(&str, f32); 8] = [
    ("Display", typography::DISPLAY),
    ("Title LG", typography::TITLE_LG),
    ("Title MD", typography::TITLE_MD),
    ("Title SM", typography::TITLE_SM),
    ("Body LG", typography::BODY_LG),
    ("Body", typography::BODY),
    ("Body SM", typography::BODY_SM),
    ("Caption", typography::CAPTION),
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sample = ctx.i18n.tr("typography-sample");

    let specimens = SCALE
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, (name, size)| {
            column.push(
                Row::new()
                    .spacing(spacing::LG)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Text::new(format!("{name} · {size}px"))
                            .font(Font::MONOSPACE)
                            .size(typography::CAPTION)
                            .width(Length::Fixed(140.0)),
                    )
                    .push(Text::new(sample.clone()).size(*size)),
            )
        })
        .push(link(ctx.i18n.tr("typography-link"), Message::JumpTo(Section::Intro)));

    heading(Section::Typography, "typography-subtitle", ctx)
        .spacing(spacing::LG)
        .push(
            Container::new(specimens)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(container_styles::card),
        )
        .into()
}
