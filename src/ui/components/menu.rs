// SPDX-License-Identifier: MPL-2.0
//! Dropdown menu opened from a trigger button.

use super::button::{GameButton, Variant};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

const PANEL_WIDTH: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    len: usize,
    open: bool,
    selected: Option<usize>,
}

impl Menu {
    /// A closed menu with `len` entries and nothing selected.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: false,
            selected: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks an entry and closes the menu. Out-of-range indices and picks
    /// on a closed menu are ignored.
    pub fn select(&mut self, index: usize) {
        if !self.open || index >= self.len {
            return;
        }
        self.selected = Some(index);
        self.open = false;
    }
}

/// Renders the trigger and, when open, the entry list below it.
pub fn view<'a, Message: Clone + 'static>(
    menu: &Menu,
    trigger: String,
    items: &[String],
    on_toggle: Message,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).push(
        GameButton::new(format!("{trigger} {}", if menu.is_open() { "▴" } else { "▾" }))
            .variant(Variant::Secondary)
            .on_press(on_toggle)
            .view(),
    );

    if menu.is_open() {
        let entries = items
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::XXS), |entries, (index, item)| {
                entries.push(
                    button(Text::new(item.clone()).size(typography::BODY_SM))
                        .width(Length::Fill)
                        .padding([spacing::XS, spacing::MD])
                        .on_press(on_select(index))
                        .style(button_styles::ghost),
                )
            });
        column = column.push(
            Container::new(entries)
                .width(Length::Fixed(PANEL_WIDTH))
                .padding(spacing::XXS)
                .style(container_styles::dialog),
        );
    }

    column.into()
}
