// SPDX-License-Identifier: MPL-2.0
//! Grey placeholder block standing in for content that is still loading.

use crate::ui::styles::container as container_styles;
use iced::widget::{Container, Space};
use iced::Element;

pub fn skeleton<'a, Message: 'a>(width: f32, height: f32) -> Element<'a, Message> {
    Container::new(Space::new().width(width).height(height))
        .style(container_styles::skeleton)
        .into()
}
