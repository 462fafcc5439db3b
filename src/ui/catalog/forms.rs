// SPDX-License-Identifier: MPL-2.0
//! Form controls: switches, checkbox, radio, text inputs, select, slider,
//! file upload with an initials avatar.

use super::{heading, showcase_labels, Demo, Message, Plan, Region, Section, State, ViewContext};
use crate::ui::components::avatar;
use crate::ui::components::button::{GameButton, Variant};
use crate::ui::components::showcase::Showcase;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{checkbox, pick_list, radio, slider, text_input, toggler, Column, Row, Text};
use iced::{alignment, Element, Length};

pub const CODE: &str = r#"text_input("Enter your hero name", &state.name)
    .on_input(Message::NameChanged)
    .on_submit(Message::Submit)
    .padding(8)"#;

fn field<'a>(
    label: String,
    input: impl Into<Element<'a, Message>>,
    hint: Option<(String, bool)>,
) -> Column<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input);
    if let Some((text, is_error)) = hint {
        let hint = Text::new(text).size(typography::CAPTION);
        column = column.push(if is_error {
            hint.color(palette::DANGER)
        } else {
            hint
        });
    }
    column
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let switches = Column::new()
        .spacing(spacing::SM)
        .push(
            toggler(state.notifications_enabled)
                .label(i18n.tr("forms-switch-notifications"))
                .on_toggle(Message::NotificationsToggled)
                .size(20.0),
        )
        .push(
            toggler(state.sound_enabled)
                .label(i18n.tr("forms-switch-sound"))
                .on_toggle(Message::SoundToggled)
                .size(20.0),
        )
        .push(
            checkbox(state.accept_terms)
                .label(i18n.tr("forms-terms"))
                .on_toggle(Message::TermsToggled)
                .text_size(typography::BODY),
        );

    let plans = [Plan::Monthly, Plan::Yearly]
        .into_iter()
        .fold(Row::new().spacing(spacing::LG), |row, plan| {
            row.push(radio(
                i18n.tr(plan.label_key()),
                plan,
                Some(state.plan),
                Message::PlanSelected,
            ))
        });

    let name = field(
        i18n.tr("forms-name-label"),
        text_input(&i18n.tr("forms-name-placeholder"), &state.character_name)
            .on_input(Message::NameChanged)
            .on_submit(Message::SubmitForm)
            .padding(spacing::XS),
        None,
    );

    let email_hint = (!state.email.is_empty() && !state.email_is_valid())
        .then(|| (i18n.tr("forms-error-email-invalid"), true));
    let email = field(
        i18n.tr("forms-email-label"),
        text_input("hero@daikon.dev", &state.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::SubmitForm)
            .padding(spacing::XS),
        email_hint,
    );

    let birth_hint = match state.birth_date_error() {
        Some(key) => (i18n.tr(key), true),
        None => (i18n.tr("forms-birth-date-hint"), false),
    };
    let birth_date = field(
        i18n.tr("forms-birth-date-label"),
        text_input("1994-03-02", &state.birth_date)
            .on_input(Message::BirthDateChanged)
            .padding(spacing::XS),
        Some(birth_hint),
    );

    let bio = field(
        i18n.tr("forms-bio-label"),
        text_input(&i18n.tr("forms-bio-placeholder"), &state.bio)
            .on_input(Message::BioChanged)
            .padding(spacing::XS),
        None,
    );

    let region = field(
        i18n.tr("forms-region-label"),
        pick_list(Region::ALL, state.region, Message::RegionSelected)
            .placeholder(i18n.tr("forms-region-placeholder")),
        None,
    );

    let volume = field(
        i18n.tr_with_args(
            "forms-volume-label",
            &[("value", format!("{}", state.volume.round() as u32).as_str())],
        ),
        slider(0.0..=100.0, state.volume, Message::VolumeChanged).step(1.0),
        None,
    );

    let avatar_label = state
        .avatar
        .clone()
        .unwrap_or_else(|| i18n.tr("forms-avatar-none"));
    let upload = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            GameButton::new(i18n.tr("forms-avatar-upload"))
                .variant(Variant::Secondary)
                .on_press(Message::PickAvatar)
                .view(),
        )
        .push(avatar::avatar(&state.character_name, avatar::Size::Md))
        .push(Text::new(avatar_label).size(typography::BODY_SM));

    let submit = GameButton::new(i18n.tr("forms-submit"))
        .on_press(Message::SubmitForm)
        .view();

    let preview = Column::new()
        .spacing(spacing::LG)
        .push(switches)
        .push(plans)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(Column::new().spacing(spacing::MD).push(name).push(email).push(birth_date))
                .push(Column::new().spacing(spacing::MD).push(bio).push(region).push(volume))
                .wrap(),
        )
        .push(upload)
        .push(submit);

    let card = Showcase::new(i18n.tr("forms-card-title"), preview)
        .description(i18n.tr("forms-card-description"))
        .code(
            CODE,
            state.mode(Demo::Inputs),
            |mode| Message::ModeChanged(Demo::Inputs, mode),
            Message::CopyCode(Demo::Inputs),
        )
        .view(&showcase_labels(i18n));

    heading(Section::Forms, "forms-subtitle", ctx)
        .spacing(spacing::LG)
        .push(card)
        .into()
}
