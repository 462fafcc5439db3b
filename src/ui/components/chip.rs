// SPDX-License-Identifier: MPL-2.0
//! Removable tag chip.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element};

/// Renders `label`; a close button is shown when `on_remove` is set.
pub fn chip<'a, Message: Clone + 'a>(
    label: impl Into<String>,
    on_remove: Option<Message>,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label.into()).size(typography::BODY_SM));

    if let Some(message) = on_remove {
        row = row.push(
            button(Text::new("✕").size(typography::CAPTION))
                .padding(0.0)
                .on_press(message)
                .style(button_styles::ghost),
        );
    }

    Container::new(row)
        .padding([spacing::XXS, spacing::SM])
        .style(container_styles::pill(palette::SKY))
        .into()
}
