// SPDX-License-Identifier: MPL-2.0
//! Game-styled button with variants, sizes and a loading state.
//!
//! # Usage
//!
//! ```ignore
//! GameButton::new("Start Quest")
//!     .variant(Variant::Primary)
//!     .size(Size::Lg)
//!     .on_press(Message::Start)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Text};
use iced::{Color, Element, Padding};

/// Colour scheme of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Ghost,
    Danger,
    Success,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Accent,
        Variant::Ghost,
        Variant::Danger,
        Variant::Success,
    ];

    /// Fill colour. Ghost buttons have no fill.
    #[must_use]
    pub fn fill(self) -> Option<Color> {
        match self {
            Variant::Primary => Some(palette::SALMON),
            Variant::Secondary => Some(palette::WHITE),
            Variant::Accent => Some(palette::GOLD),
            Variant::Ghost => None,
            Variant::Danger => Some(palette::DANGER),
            Variant::Success => Some(palette::SUCCESS),
        }
    }

    /// i18n key of the variant's name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Variant::Primary => "button-variant-primary",
            Variant::Secondary => "button-variant-secondary",
            Variant::Accent => "button-variant-accent",
            Variant::Ghost => "button-variant-ghost",
            Variant::Danger => "button-variant-danger",
            Variant::Success => "button-variant-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    #[must_use]
    pub fn padding(self) -> Padding {
        match self {
            Size::Sm => Padding::from([spacing::XXS, spacing::SM]),
            Size::Md => Padding::from([spacing::XS, spacing::MD]),
            Size::Lg => Padding::from([spacing::SM, spacing::LG]),
        }
    }

    #[must_use]
    pub fn text_size(self) -> f32 {
        match self {
            Size::Sm => typography::CAPTION,
            Size::Md => typography::BODY,
            Size::Lg => typography::TITLE_SM,
        }
    }
}

/// Builder for a catalog button.
#[derive(Debug, Clone)]
pub struct GameButton<Message> {
    label: String,
    variant: Variant,
    size: Size,
    loading: Option<String>,
    on_press: Option<Message>,
}

impl<Message: Clone + 'static> GameButton<Message> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            loading: None,
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Shows `label` instead of the normal label and ignores presses.
    pub fn loading(mut self, label: impl Into<String>) -> Self {
        self.loading = Some(label.into());
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Returns whether a press would emit a message.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.on_press.is_some() && self.loading.is_none()
    }

    pub fn view(self) -> Element<'static, Message> {
        let interactive = self.is_interactive();
        let label = self.loading.unwrap_or(self.label);

        let widget = button(Text::new(label).size(self.size.text_size()))
            .padding(self.size.padding())
            .on_press_maybe(if interactive { self.on_press } else { None });

        match self.variant.fill() {
            Some(fill) => widget.style(button_styles::game(fill, palette::INK)).into(),
            None => widget.style(button_styles::ghost).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Press,
    }

    #[test]
    fn button_with_message_is_interactive() {
        let button = GameButton::new("Go").on_press(TestMessage::Press);
        assert!(button.is_interactive());
    }

    #[test]
    fn loading_button_ignores_presses() {
        let button = GameButton::new("Save")
            .on_press(TestMessage::Press)
            .loading("Loading...");
        assert!(!button.is_interactive());
    }

    #[test]
    fn button_without_message_is_disabled() {
        let button: GameButton<TestMessage> = GameButton::new("Locked");
        assert!(!button.is_interactive());
    }

    #[test]
    fn only_ghost_variant_has_no_fill() {
        for variant in Variant::ALL {
            assert_eq!(variant.fill().is_none(), variant == Variant::Ghost);
        }
    }

    #[test]
    fn larger_sizes_use_larger_text() {
        assert!(Size::Sm.text_size() < Size::Md.text_size());
        assert!(Size::Md.text_size() < Size::Lg.text_size());
    }
}
