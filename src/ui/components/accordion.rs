// SPDX-License-Identifier: MPL-2.0
//! Accordion with at most one open item.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// The first item starts open.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: (len > 0).then_some(0),
        }
    }

    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, closing any other item. Toggling the open item closes it.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

/// Renders `(question, answer)` items.
pub fn view<'a, Message: Clone + 'a>(
    accordion: &Accordion,
    items: &[(String, String)],
    on_toggle: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let column = items.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |column, (index, (question, answer))| {
            let open = accordion.is_open(index);
            let header = button(
                Row::new()
                    .push(Text::new(question.clone()).size(typography::BODY_LG))
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(if open { "−" } else { "+" }).size(typography::BODY_LG)),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .on_press(on_toggle(index))
            .style(button_styles::segment(open));

            let mut item = Column::new().push(header);
            if open {
                item = item.push(
                    Container::new(Text::new(answer.clone()).size(typography::BODY))
                        .width(Length::Fill)
                        .padding(spacing::SM)
                        .style(container_styles::card),
                );
            }
            column.push(item)
        },
    );
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_open_by_default() {
        assert_eq!(Accordion::new(3).open(), Some(0));
        assert_eq!(Accordion::new(0).open(), None);
    }

    #[test]
    fn only_one_item_open_at_a_time() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(2);
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(0);
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(5);
        assert_eq!(accordion.open(), Some(0));
    }
}
