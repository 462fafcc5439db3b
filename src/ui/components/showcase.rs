// SPDX-License-Identifier: MPL-2.0
//! Showcase card: a titled demo with a Preview/Code switch.
//!
//! The card does not own its mode; the catalog stores one [`Mode`] per card
//! and passes it in, receiving the new mode through `on_mode`.

use super::code_block::code_block;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Preview,
    Code,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Preview => Mode::Code,
            Mode::Code => Mode::Preview,
        }
    }
}

/// Localized labels for the card chrome.
#[derive(Debug, Clone)]
pub struct Labels {
    pub preview: String,
    pub code: String,
    pub copy: String,
}

pub struct Showcase<'a, Message> {
    title: String,
    description: Option<String>,
    preview: Element<'a, Message>,
    code: Option<&'a str>,
    mode: Mode,
    on_mode: Option<Box<dyn Fn(Mode) -> Message + 'a>>,
    on_copy: Option<Message>,
}

impl<'a, Message: Clone + 'a> Showcase<'a, Message> {
    pub fn new(title: impl Into<String>, preview: impl Into<Element<'a, Message>>) -> Self {
        Self {
            title: title.into(),
            description: None,
            preview: preview.into(),
            code: None,
            mode: Mode::Preview,
            on_mode: None,
            on_copy: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Enables the Code tab. `on_copy` is emitted by its copy button.
    pub fn code(
        mut self,
        code: &'a str,
        mode: Mode,
        on_mode: impl Fn(Mode) -> Message + 'a,
        on_copy: Message,
    ) -> Self {
        self.code = Some(code);
        self.mode = mode;
        self.on_mode = Some(Box::new(on_mode));
        self.on_copy = Some(on_copy);
        self
    }

    pub fn view(self, labels: &Labels) -> Element<'a, Message> {
        let mut header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(self.title).size(typography::TITLE_MD))
            .push(Space::new().width(Length::Fill));

        if let Some(on_mode) = &self.on_mode {
            for (mode, label) in [(Mode::Preview, &labels.preview), (Mode::Code, &labels.code)] {
                header = header.push(
                    button(Text::new(label.clone()).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::XS])
                        .on_press(on_mode(mode))
                        .style(button_styles::segment(self.mode == mode)),
                );
            }
        }

        let mut column = Column::new().spacing(spacing::SM).push(header);
        if let Some(description) = self.description {
            column = column.push(Text::new(description).size(typography::BODY_SM));
        }

        let body = match (self.mode, self.code, self.on_copy) {
            (Mode::Code, Some(code), Some(on_copy)) => code_block(code, labels.copy.clone(), on_copy),
            _ => self.preview,
        };

        Container::new(column.push(body))
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(container_styles::card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(Mode::Preview.toggled(), Mode::Code);
        assert_eq!(Mode::Code.toggled(), Mode::Preview);
        assert_eq!(Mode::default(), Mode::Preview);
    }
}
