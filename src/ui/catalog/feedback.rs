// SPDX-License-Identifier: MPL-2.0
//! Alerts, loading states, overlays, tooltips, progress and the toast
//! playground.

use super::{heading, showcase_labels, Demo, Message, Section, State, ViewContext};
use crate::ui::components::alert::{self, Kind};
use crate::ui::components::button::{GameButton, Size, Variant};
use crate::ui::components::progress;
use crate::ui::components::showcase::Showcase;
use crate::ui::components::skeleton::skeleton;
use crate::ui::components::spinner;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Category;
use crate::ui::styles::{container as container_styles, tooltip};
use iced::widget::{text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub const ALERT_CODE: &str = r#"alert(Kind::Success, "Quest complete", "You earned 50 gold.")"#;

pub const TOAST_CODE: &str = r#"// In App::update
let (_id, expiry) = self.notifications.publish(
    "Quest Updated",
    "You completed the tutorial.",
    Category::Success,
);
return expiry.map(Message::Notification);"#;

/// Skeleton line widths while the loading demo runs.
const SKELETON_WIDTHS: [f32; 2] = [160.0, 96.0];
const SKELETON_HEIGHT: f32 = 16.0;

const PROGRESS_SAMPLES: [(f32, f32); 3] = [(25.0, 100.0), (65.0, 100.0), (100.0, 100.0)];

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let labels = showcase_labels(i18n);

    let alerts = Kind::ALL
        .iter()
        .zip([
            ("alert-info-title", "alert-info-message"),
            ("alert-success-title", "alert-success-message"),
            ("alert-error-title", "alert-error-message"),
        ])
        .fold(Column::new().spacing(spacing::SM), |column, (kind, (title, body))| {
            column.push(alert::alert(*kind, i18n.tr(title), i18n.tr(body)))
        })
        .push(loading_row(state, ctx));

    let alert_card = Showcase::new(i18n.tr("alert-card-title"), alerts)
        .code(
            ALERT_CODE,
            state.mode(Demo::Alerts),
            |mode| Message::ModeChanged(Demo::Alerts, mode),
            Message::CopyCode(Demo::Alerts),
        )
        .view(&labels);

    let mut popover = Column::new().spacing(spacing::XS).push(
        GameButton::new(i18n.tr("overlay-popover-open"))
            .variant(Variant::Accent)
            .on_press(Message::TogglePopover)
            .view(),
    );
    if state.popover_open {
        popover = popover.push(
            Container::new(Text::new(i18n.tr("overlay-popover-body")).size(typography::BODY_SM))
                .padding(spacing::SM)
                .max_width(240.0)
                .style(container_styles::dialog),
        );
    }

    let overlays = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Top)
        .push(
            GameButton::new(i18n.tr("overlay-modal-open"))
                .on_press(Message::OpenModal)
                .view(),
        )
        .push(
            GameButton::new(i18n.tr("overlay-drawer-open"))
                .variant(Variant::Secondary)
                .on_press(Message::OpenDrawer)
                .view(),
        )
        .push(popover)
        .push(tooltip::styled(
            GameButton::new(i18n.tr("overlay-tooltip-target"))
                .variant(Variant::Ghost)
                .on_press(Message::TogglePopover)
                .view(),
            i18n.tr("overlay-tooltip-body"),
            iced::widget::tooltip::Position::Top,
        ));

    let overlay_card = Showcase::new(i18n.tr("overlay-card-title"), overlays)
        .description(i18n.tr("overlay-card-description"))
        .view(&labels);

    let bars = PROGRESS_SAMPLES
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, (value, max)| {
            column.push(progress::view(*value, *max))
        });
    let progress_card = Showcase::new(i18n.tr("progress-card-title"), bars).view(&labels);

    heading(Section::Feedback, "feedback-subtitle", ctx)
        .spacing(spacing::LG)
        .push(alert_card)
        .push(overlay_card)
        .push(progress_card)
        .push(playground(state, ctx))
        .into()
}

/// Spinner and skeleton placeholders, toggled by the loading demo.
fn loading_row<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let toggle_key = if state.loading {
        "button-stop-loading"
    } else {
        "button-start-loading"
    };

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            GameButton::new(i18n.tr(toggle_key))
                .variant(Variant::Ghost)
                .size(Size::Sm)
                .on_press(Message::ToggleLoading)
                .view(),
        );

    if state.loading {
        row = row.push(state.spinner.view(spinner::Size::Md));
        row = SKELETON_WIDTHS
            .iter()
            .fold(row, |row, width| row.push(skeleton(*width, SKELETON_HEIGHT)));
    } else {
        row = row.push(Text::new(i18n.tr("loading-done")).size(typography::BODY_SM));
    }
    row.into()
}

/// Publishes arbitrary toasts, including categories the queue does not know.
fn playground<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let input = |label: String, value: &str, on_input: fn(String) -> Message| {
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::FillPortion(1))
            .push(Text::new(label).size(typography::BODY_SM))
            .push(
                text_input("", value)
                    .on_input(on_input)
                    .on_submit(Message::PublishPlayground)
                    .padding(spacing::XS),
            )
    };

    let inputs = Row::new()
        .spacing(spacing::MD)
        .push(input(
            i18n.tr("playground-title-label"),
            &state.playground.title,
            Message::PlaygroundTitleChanged,
        ))
        .push(input(
            i18n.tr("playground-description-label"),
            &state.playground.description,
            Message::PlaygroundDescriptionChanged,
        ))
        .push(input(
            i18n.tr("playground-category-label"),
            &state.playground.category,
            Message::PlaygroundCategoryChanged,
        ));

    let quick = [
        (Category::Success, Variant::Success, "playground-quick-success"),
        (Category::Error, Variant::Danger, "playground-quick-error"),
        (Category::Info, Variant::Secondary, "playground-quick-info"),
    ]
    .into_iter()
    .fold(
        Row::new().spacing(spacing::SM).align_y(alignment::Vertical::Center),
        |row, (category, variant, key)| {
            row.push(
                GameButton::new(i18n.tr(key))
                    .variant(variant)
                    .size(Size::Sm)
                    .on_press(Message::QuickToast(category))
                    .view(),
            )
        },
    )
    .push(Space::new().width(Length::Fill))
    .push(
        GameButton::new(i18n.tr("playground-publish"))
            .on_press(Message::PublishPlayground)
            .view(),
    );

    let preview = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("playground-hint")).size(typography::BODY_SM))
        .push(inputs)
        .push(quick);

    Showcase::new(i18n.tr("playground-card-title"), preview)
        .code(
            TOAST_CODE,
            state.mode(Demo::Toasts),
            |mode| Message::ModeChanged(Demo::Toasts, mode),
            Message::CopyCode(Demo::Toasts),
        )
        .view(&showcase_labels(i18n))
}

/// Body of the demo modal dialog.
pub fn modal_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("overlay-modal-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("overlay-modal-body")).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Space::new().width(Length::Fill))
                .push(
                    GameButton::new(i18n.tr("overlay-cancel"))
                        .variant(Variant::Ghost)
                        .on_press(Message::CloseModal)
                        .view(),
                )
                .push(
                    GameButton::new(i18n.tr("overlay-confirm"))
                        .on_press(Message::CloseModal)
                        .view(),
                ),
        )
        .into()
}

/// Body of the demo side drawer.
pub fn drawer_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("overlay-drawer-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("overlay-drawer-body")).size(typography::BODY))
        .push(Space::new().height(Length::Fill))
        .push(
            GameButton::new(i18n.tr("overlay-close"))
                .variant(Variant::Secondary)
                .on_press(Message::CloseDrawer)
                .view(),
        )
        .into()
}
