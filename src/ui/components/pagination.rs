// SPDX-License-Identifier: MPL-2.0
//! One-based page selector.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    current: usize,
}

impl Pagination {
    /// Creates a selector on page 1. `total` is at least 1.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total: total.max(1),
            current: 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    /// Moves to `page`, clamped into `1..=total`.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total);
    }
}

pub fn view<'a, Message: Clone + 'a>(
    pagination: &Pagination,
    on_prev: Message,
    on_next: Message,
    on_page: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let page_button = |label: String, selected: bool, message: Option<Message>| {
        button(
            Text::new(label)
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fixed(sizing::PAGE_BUTTON))
        .on_press_maybe(message)
        .style(button_styles::segment(selected))
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(page_button(
            "‹".to_string(),
            false,
            pagination.has_prev().then_some(on_prev),
        ));

    (1..=pagination.total())
        .fold(row, |row, page| {
            row.push(page_button(
                page.to_string(),
                page == pagination.current(),
                Some(on_page(page)),
            ))
        })
        .push(page_button(
            "›".to_string(),
            false,
            pagination.has_next().then_some(on_next),
        ))
        .into()
}
