// SPDX-License-Identifier: MPL-2.0
//! Data display: table, list, chips and badges.

use super::{heading, showcase_labels, Message, Section, State, ViewContext};
use crate::ui::components::badge::badge;
use crate::ui::components::button::{GameButton, Size, Variant};
use crate::ui::components::chip::chip;
use crate::ui::components::list::list;
use crate::ui::components::showcase::Showcase;
use crate::ui::components::table::table;
use crate::ui::design_tokens::spacing;
use iced::widget::Row;
use iced::{alignment, Element};

/// Leaderboard rows: player, class, level, guild.
const LEADERBOARD: [[&str; 4]; 4] = [
    ["Radish Rogue", "Rogue", "42", "Daikon Club"],
    ["Turnip Titan", "Warrior", "39", "Root Cellar"],
    ["Mochi Mage", "Mage", "37", "Daikon Club"],
    ["Sesame Sage", "Cleric", "31", "Hakka Guild"],
];

const INVENTORY: [&str; 3] = ["Sword of Truth", "Shield of Valor", "Potion of Healing"];

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let labels = showcase_labels(i18n);

    let headers: Vec<String> = [
        "data-column-player",
        "data-column-class",
        "data-column-level",
        "data-column-guild",
    ]
    .iter()
    .map(|key| i18n.tr(key))
    .collect();
    let rows: Vec<Vec<String>> = LEADERBOARD
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let table_card = Showcase::new(i18n.tr("data-table-title"), table(&headers, &rows)).view(&labels);

    let inventory: Vec<String> = INVENTORY.iter().map(ToString::to_string).collect();
    let list_card = Showcase::new(i18n.tr("data-list-title"), list(&inventory)).view(&labels);

    let chips = state
        .chips
        .iter()
        .enumerate()
        .fold(
            Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center),
            |row, (index, label)| row.push(chip(label.clone(), Some(Message::RemoveChip(index)))),
        )
        .push(
            GameButton::new(i18n.tr("data-chips-reset"))
                .variant(Variant::Ghost)
                .size(Size::Sm)
                .on_press(Message::ResetChips)
                .view(),
        )
        .wrap();
    let chip_card = Showcase::new(i18n.tr("data-chips-title"), chips).view(&labels);

    let badges = Variant::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, variant| {
            row.push(badge(i18n.tr(variant.label_key()), *variant))
        });
    let badge_card = Showcase::new(i18n.tr("data-badges-title"), badges).view(&labels);

    heading(Section::Data, "data-subtitle", ctx)
        .spacing(spacing::LG)
        .push(table_card)
        .push(list_card)
        .push(chip_card)
        .push(badge_card)
        .into()
}
