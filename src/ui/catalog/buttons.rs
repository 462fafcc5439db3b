// SPDX-License-Identifier: MPL-2.0
//! Button variants, sizes and states.

use super::{heading, showcase_labels, Demo, Message, Section, State, ViewContext};
use crate::ui::components::badge::badge;
use crate::ui::components::button::{GameButton, Size, Variant};
use crate::ui::components::showcase::Showcase;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Row, Text};
use iced::{alignment, Element};

pub const CODE: &str = r#"GameButton::new("Start Quest")
    .variant(Variant::Primary)
    .size(Size::Lg)
    .on_press(Message::Start)
    .view()"#;

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let variants = Variant::ALL
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, variant| {
            row.push(
                GameButton::new(i18n.tr(variant.label_key()))
                    .variant(*variant)
                    .on_press(Message::DemoButtonPressed(*variant))
                    .view(),
            )
        })
        .wrap();

    let sizes = Size::ALL
        .iter()
        .zip(["button-size-sm", "button-size-md", "button-size-lg"])
        .fold(
            Row::new().spacing(spacing::MD).align_y(alignment::Vertical::Center),
            |row, (size, key)| {
                row.push(
                    GameButton::new(i18n.tr(key))
                        .variant(Variant::Accent)
                        .size(*size)
                        .on_press(Message::DemoButtonPressed(Variant::Accent))
                        .view(),
                )
            },
        );

    let mut loading_button = GameButton::new(i18n.tr("button-save"))
        .variant(Variant::Success)
        .on_press(Message::DemoButtonPressed(Variant::Success));
    if state.loading {
        loading_button = loading_button.loading(i18n.tr("button-loading"));
    }

    let states = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(loading_button.view())
        .push(
            GameButton::new(i18n.tr(if state.loading {
                "button-stop-loading"
            } else {
                "button-start-loading"
            }))
            .variant(Variant::Ghost)
            .on_press(Message::ToggleLoading)
            .view(),
        )
        .push(GameButton::<Message>::new(i18n.tr("button-disabled")).view())
        .push(badge(i18n.tr("button-badge-new"), Variant::Danger));

    let preview = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("button-variants")).size(typography::TITLE_SM))
        .push(variants)
        .push(Text::new(i18n.tr("button-sizes")).size(typography::TITLE_SM))
        .push(sizes)
        .push(Text::new(i18n.tr("button-states")).size(typography::TITLE_SM))
        .push(states);

    let card = Showcase::new(i18n.tr("button-card-title"), preview)
        .description(i18n.tr("button-card-description"))
        .code(
            CODE,
            state.mode(Demo::Buttons),
            |mode| Message::ModeChanged(Demo::Buttons, mode),
            Message::CopyCode(Demo::Buttons),
        )
        .view(&showcase_labels(i18n));

    heading(Section::Buttons, "buttons-subtitle", ctx)
        .spacing(spacing::LG)
        .push(card)
        .into()
}
