// SPDX-License-Identifier: MPL-2.0
//! Progress bar with a percentage label.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{progress_bar, Row, Text};
use iced::{alignment, Element};

/// `value / max` as a percentage in `0..=100`. A non-positive `max` yields 0.
#[must_use]
pub fn percentage(value: f32, max: f32) -> f32 {
    if max <= 0.0 || !value.is_finite() || !max.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

pub fn view<'a, Message: 'a>(value: f32, max: f32) -> Element<'a, Message> {
    let percent = percentage(value, max);
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(progress_bar(0.0..=100.0, percent))
        .push(Text::new(format!("{}%", percent.round() as u32)).size(typography::BODY_SM))
        .into()
}
