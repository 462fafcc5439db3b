// SPDX-License-Identifier: MPL-2.0
//! Animated loading spinner.
//!
//! The spinner is a glyph cycled by [`Spinner::tick`]. The owner subscribes
//! to a timer only while something is loading and forwards each tick here.

use crate::ui::design_tokens::palette;
use iced::widget::Text;
use iced::Element;
use std::time::Duration;

/// Time between two animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(120);

const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Sm,
    Md,
    Lg,
}

impl Size {
    #[must_use]
    pub fn pixels(self) -> f32 {
        match self {
            Size::Sm => 16.0,
            Size::Md => 24.0,
            Size::Lg => 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Advances one frame, wrapping after the last.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }

    pub fn view<'a, Message: 'a>(&self, size: Size) -> Element<'a, Message> {
        Text::new(self.glyph())
            .size(size.pixels())
            .color(palette::SALMON)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_cycles_through_every_frame() {
        let mut spinner = Spinner::default();
        let first = spinner.glyph();
        let mut seen = vec![first];
        for _ in 1..FRAMES.len() {
            spinner.tick();
            seen.push(spinner.glyph());
        }
        seen.dedup();
        assert_eq!(seen.len(), FRAMES.len());

        spinner.tick();
        assert_eq!(spinner.glyph(), first);
    }

    #[test]
    fn reset_returns_to_first_frame() {
        let mut spinner = Spinner::default();
        spinner.tick();
        spinner.reset();
        assert_eq!(spinner, Spinner::default());
    }

    #[test]
    fn sizes_grow() {
        assert!(Size::Sm.pixels() < Size::Md.pixels());
        assert!(Size::Md.pixels() < Size::Lg.pixels());
    }
}
