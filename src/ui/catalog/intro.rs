// SPDX-License-Identifier: MPL-2.0
//! Hero banner at the top of the page.

use super::{Message, Section, ViewContext};
use crate::ui::components::badge::badge;
use crate::ui::components::button::{GameButton, Size, Variant};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badges = Row::new()
        .spacing(spacing::XS)
        .push(badge(i18n.tr("intro-badge-version"), Variant::Accent))
        .push(badge(i18n.tr("intro-badge-license"), Variant::Success));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            GameButton::new(i18n.tr("intro-get-started"))
                .size(Size::Lg)
                .on_press(Message::JumpTo(Section::Colors))
                .view(),
        )
        .push(
            GameButton::new(i18n.tr("intro-browse-components"))
                .variant(Variant::Secondary)
                .size(Size::Lg)
                .on_press(Message::JumpTo(Section::Buttons))
                .view(),
        );

    let hero = Column::new()
        .spacing(spacing::LG)
        .push(badges)
        .push(Text::new(i18n.tr("intro-title")).size(typography::DISPLAY))
        .push(Text::new(i18n.tr("intro-tagline")).size(typography::BODY_LG))
        .push(actions);

    Container::new(hero)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .style(container_styles::card)
        .into()
}
