// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`catalog`] - Scrollable catalog of every design-system section
//! - [`sidebar`] - Section navigation filtered by the search query
//! - [`header`] - Search box, theme toggle and language selector
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable design-system widgets (buttons, alerts, tabs...)
//! - [`notifications`] - Toast notification queue for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod catalog;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod notifications;
pub mod sidebar;
pub mod styles;
pub mod theming;
