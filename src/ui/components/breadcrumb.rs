// SPDX-License-Identifier: MPL-2.0
//! Breadcrumb trail. Every crumb but the last is a link.

use super::link::link;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Row, Text};
use iced::{alignment, Element, Font};

const SEPARATOR: &str = "›";

/// Returns true for the crumb of the current page, which is not clickable.
#[must_use]
pub fn is_current(index: usize, len: usize) -> bool {
    index + 1 == len
}

pub fn view<'a, Message: Clone + 'a>(
    crumbs: &[String],
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let row = crumbs.iter().enumerate().fold(
        Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center),
        |mut row, (index, label)| {
            if index > 0 {
                row = row.push(
                    Text::new(SEPARATOR)
                        .size(typography::BODY)
                        .color(palette::GRAY_400),
                );
            }
            if is_current(index, crumbs.len()) {
                row.push(
                    Text::new(label.clone())
                        .size(typography::BODY)
                        .font(Font {
                            weight: iced::font::Weight::Bold,
                            ..Font::MONOSPACE
                        }),
                )
            } else {
                row.push(link(label.clone(), on_select(index)))
            }
        },
    );
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_crumb_is_current() {
        assert!(!is_current(0, 3));
        assert!(!is_current(1, 3));
        assert!(is_current(2, 3));
    }

    #[test]
    fn single_crumb_is_current() {
        assert!(is_current(0, 1));
    }
}
