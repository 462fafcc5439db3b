// SPDX-License-Identifier: MPL-2.0
//! Brand palette. Pressing a swatch copies its hex code.

use super::{heading, Message, Section, ViewContext};
use crate::ui::components::swatch::{self, BRAND};
use crate::ui::design_tokens::spacing;
use iced::widget::Row;
use iced::Element;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tip = ctx.i18n.tr("colors-copy-hint");

    let swatches = BRAND
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::MD), |row, (index, entry)| {
            row.push(swatch::view(*entry, tip.clone(), Message::CopySwatch(index)))
        })
        .wrap();

    heading(Section::Colors, "colors-subtitle", ctx)
        .spacing(spacing::LG)
        .push(swatches)
        .into()
}
