// SPDX-License-Identifier: MPL-2.0
//! Tab strip with a single selected tab.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Row, Text};
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tabs {
    len: usize,
    selected: usize,
}

impl Tabs {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, selected: 0 }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selects `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }
}

pub fn view<'a, Message: Clone + 'a>(
    tabs: &Tabs,
    labels: &[String],
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    labels
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, label)| {
            row.push(
                button(Text::new(label.clone()).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(on_select(index))
                    .style(button_styles::segment(index == tabs.selected())),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_changes_tab() {
        let mut tabs = Tabs::new(3);
        tabs.select(2);
        assert_eq!(tabs.selected(), 2);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut tabs = Tabs::new(3);
        tabs.select(1);
        tabs.select(3);
        assert_eq!(tabs.selected(), 1);
    }
}
