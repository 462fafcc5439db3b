// SPDX-License-Identifier: MPL-2.0
//! Modal dialog and side drawer layered over the page.
//!
//! Both dim the page behind them and emit `on_close` when that dimmed area
//! is clicked. Clicks on the panel itself are swallowed by `opaque`.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles::container as container_styles;
use iced::widget::{center, mouse_area, opaque, Container, Stack};
use iced::{alignment, Element, Length};

/// Centered dialog over `base`.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_close: Message,
) -> Element<'a, Message> {
    let dialog = Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(container_styles::dialog);

    Stack::new()
        .push(base)
        .push(opaque(
            mouse_area(center(opaque(dialog)).style(container_styles::scrim)).on_press(on_close),
        ))
        .into()
}

/// Full-height panel docked to the right edge of `base`.
pub fn drawer<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_close: Message,
) -> Element<'a, Message> {
    let panel = Container::new(content)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::dialog);

    let layer = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .style(container_styles::scrim);

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(layer).on_press(on_close)))
        .into()
}
