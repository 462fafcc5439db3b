// SPDX-License-Identifier: MPL-2.0
//! `hakka_showcase` is an interactive catalog of the Hakka Daikon design
//! system built with the Iced GUI framework.
//!
//! Every reusable component is rendered live next to a copyable code sample.
//! Transient feedback goes through a toast queue
//! ([`ui::notifications`]) whose entries expire on their own or are dismissed
//! by the user.

pub mod app;
pub mod error;
pub mod logging;
pub mod ui;
