// SPDX-License-Identifier: MPL-2.0
//! Section navigation column.
//!
//! Lists the catalog sections whose translated label matches the header
//! search query. Selecting one marks it active and asks the application to
//! scroll the catalog to it.

use crate::app::i18n::fluent::I18n;
use crate::ui::catalog::Section;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub query: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
}

/// Process a sidebar message, updating the active section.
pub fn update(message: Message, active: &mut Section) -> Event {
    match message {
        Message::Select(section) => {
            *active = section;
            Event::ScrollTo(section)
        }
    }
}

/// Sections whose translated label matches `query`, in display order.
pub fn visible_sections(i18n: &I18n, query: &str) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| Section::matches(&i18n.tr(section.label_key()), query))
        .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let sections = visible_sections(ctx.i18n, ctx.query);

    let mut entries = Column::new().spacing(spacing::XXS);
    if sections.is_empty() {
        entries = entries.push(
            Text::new(ctx.i18n.tr("sidebar-no-results"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );
    }
    for section in sections {
        entries = entries.push(
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::Select(section))
                .style(button_styles::nav_item(section == ctx.active)),
        );
    }

    let brand = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("sidebar-brand"))
                .size(typography::TITLE_MD)
                .color(palette::SALMON),
        )
        .push(
            Text::new(ctx.i18n.tr("sidebar-tagline"))
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(brand)
            .push(scrollable(entries).height(Length::Fill)),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::sidebar)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn select_marks_section_active_and_scrolls() {
        let mut active = Section::Intro;
        let event = update(Message::Select(Section::Forms), &mut active);
        assert_eq!(active, Section::Forms);
        assert_eq!(event, Event::ScrollTo(Section::Forms));
    }

    #[test]
    fn empty_query_lists_every_section() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(visible_sections(&i18n, ""), Section::ALL.to_vec());
    }

    #[test]
    fn query_filters_by_translated_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(visible_sections(&i18n, "COLO"), vec![Section::Colors]);
        assert!(visible_sections(&i18n, "zzz").is_empty());
    }
}
