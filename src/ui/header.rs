// SPDX-License-Identifier: MPL-2.0
//! Top bar: section search, theme toggle and language selector.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text_input, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    CycleTheme,
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

/// Process a header message. The search query is owned by the caller.
pub fn update(message: Message, query: &mut String, theme_mode: ThemeMode) -> Event {
    match message {
        Message::SearchChanged(value) => {
            *query = value;
            Event::None
        }
        Message::ClearSearch => {
            query.clear();
            Event::None
        }
        Message::CycleTheme => Event::ThemeChanged(theme_mode.next()),
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut search = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text_input(&i18n.tr("header-search-placeholder"), ctx.query)
                .on_input(Message::SearchChanged)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::FORM_WIDTH)),
        );
    if !ctx.query.is_empty() {
        search = search.push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::ClearSearch)
                .style(button_styles::ghost),
        );
    }

    let theme_label = i18n.tr_with_args(
        "header-theme",
        &[("mode", i18n.tr(ctx.theme_mode.label_key()).as_str())],
    );

    let language = pick_list(
        i18n.available_locales.as_slice(),
        Some(i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY_SM);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(search)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(theme_label).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::CycleTheme)
                .style(button_styles::segment(false)),
        )
        .push(language);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .style(container_styles::header)
        .into()
}
