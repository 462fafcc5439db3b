// SPDX-License-Identifier: MPL-2.0
//! Carousel index arithmetic and its view.
//!
//! Navigation wraps around both ends. An empty carousel ignores every
//! command and stays at index 0.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

const SLIDE_COLORS: [Color; 3] = [palette::SALMON, palette::GOLD, palette::SKY];

/// Renders the current slide with prev/next arrows and position dots.
pub fn view<'a, Message: Clone + 'a>(
    carousel: &Carousel,
    slides: &[String],
    on_prev: Message,
    on_next: Message,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let title = slides.get(carousel.current()).cloned().unwrap_or_default();
    let fill = SLIDE_COLORS[carousel.current() % SLIDE_COLORS.len()];

    let slide = Container::new(Text::new(title).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::slide(fill));

    let arrow = |glyph: &'static str, message: Message| {
        button(Text::new(glyph).size(typography::TITLE_SM))
            .on_press(message)
            .style(button_styles::game(palette::WHITE, palette::INK))
    };

    let dots = (0..carousel.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
        row.push(
            button(Text::new(""))
                .width(Length::Fixed(spacing::SM))
                .height(Length::Fixed(spacing::SM))
                .on_press(on_select(index))
                .style(button_styles::segment(index == carousel.current())),
        )
    });

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(arrow("◀", on_prev))
                .push(slide)
                .push(arrow("▶", on_next)),
        )
        .push(dots)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.select(1);
        assert_eq!(carousel.current(), 1);
        carousel.select(3);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.select(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), 0);
    }
}
