// SPDX-License-Identifier: MPL-2.0
//! Inline alert box with a title and message.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Error,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Info, Kind::Success, Kind::Error];

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Info => palette::INFO,
            Kind::Success => palette::SUCCESS,
            Kind::Error => palette::DANGER,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Info => "i",
            Kind::Success => "✓",
            Kind::Error => "!",
        }
    }
}

pub fn alert<'a, Message: 'a>(
    kind: Kind,
    title: impl Into<String>,
    message: impl Into<String>,
) -> Element<'a, Message> {
    let accent = kind.color();

    let icon = Container::new(Text::new(kind.glyph()).size(typography::BODY_LG))
        .padding([spacing::XXS, spacing::XS])
        .style(container_styles::pill(accent));

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title.into()).size(typography::BODY_LG))
        .push(Text::new(message.into()).size(typography::BODY_SM));

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(container_styles::alert(accent))
    .into()
}
