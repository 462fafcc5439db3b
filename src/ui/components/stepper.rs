// SPDX-License-Identifier: MPL-2.0
//! Horizontal progress stepper.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{rule, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

impl StepState {
    /// State of step `index` when `current` is the active step.
    #[must_use]
    pub fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Done,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Pending,
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            StepState::Done => palette::SUCCESS,
            StepState::Current => palette::GOLD,
            StepState::Pending => palette::GRAY_200,
        }
    }
}

pub fn view<'a, Message: 'a>(labels: &[String], current: usize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    for (index, label) in labels.iter().enumerate() {
        if index > 0 {
            row = row.push(Container::new(rule::horizontal(2)).width(Length::Fill));
        }
        let state = StepState::of(index, current);
        let glyph = match state {
            StepState::Done => "✓".to_string(),
            _ => (index + 1).to_string(),
        };
        let dot = Container::new(Text::new(glyph).size(typography::BODY))
            .width(Length::Fixed(sizing::STEP_DOT))
            .height(Length::Fixed(sizing::STEP_DOT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(container_styles::pill(state.color()));

        row = row.push(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(dot)
                .push(Text::new(label.clone()).size(typography::CAPTION)),
        );
    }

    row.into()
}
