// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the catalog.

pub mod button;
pub mod container;
pub mod tooltip;
