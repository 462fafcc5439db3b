// SPDX-License-Identifier: MPL-2.0
//! Reusable catalog components.
//!
//! Stateless widgets are plain functions or builders that render an
//! `Element`. Components with behaviour (carousel, pagination, accordion,
//! tabs, menu, spinner) keep a small state struct next to their view
//! function; the catalog owns those structs and calls their methods from
//! `update`.
//!
//! # Components
//!
//! - [`button`] - Game-styled button with variants, sizes and loading state
//! - [`badge`] - Pill label
//! - [`alert`] - Info/Success/Error message box
//! - [`chip`] - Removable tag
//! - [`table`] - Header plus data rows
//! - [`showcase`] - Demo card with a Preview/Code switch
//! - [`swatch`] - Palette colour card
//! - [`code_block`] - Monospace snippet with copy button
//! - [`carousel`] - Wrapping slide index
//! - [`pagination`] - Clamped 1-based page index
//! - [`accordion`] - Single-open disclosure list
//! - [`tabs`] - Tab strip
//! - [`stepper`] - Done/Current/Pending step markers
//! - [`progress`] - Clamped percentage bar
//! - [`overlay`] - Modal and drawer layers
//! - [`avatar`] - Initials avatar
//! - [`breadcrumb`] - Link trail ending at the current page
//! - [`divider`] - Horizontal rule with optional label
//! - [`link`] - Inline text link
//! - [`list`] - Bulleted list
//! - [`menu`] - Dropdown menu
//! - [`skeleton`] - Loading placeholder
//! - [`spinner`] - Tick-driven loading spinner

pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod carousel;
pub mod chip;
pub mod code_block;
pub mod divider;
pub mod link;
pub mod list;
pub mod menu;
pub mod overlay;
pub mod pagination;
pub mod progress;
pub mod showcase;
pub mod skeleton;
pub mod spinner;
pub mod stepper;
pub mod swatch;
pub mod table;
pub mod tabs;
