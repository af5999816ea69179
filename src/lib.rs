// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` shows transient, stacked notification banners ("snacks")
//! at the top or bottom of an iced window.
//!
//! Snacks are grouped by [`Alignment`](snack::Alignment). Each group is a
//! presentation queue whose nodes form a linked list: every snack anchors
//! to the container edge or to its predecessor, so insertions, removals and
//! promotions only touch neighbors. Adding a snack whose identity is
//! already shown moves the existing one to the growing edge instead of
//! duplicating it. Snacks leave on their own after their duration unless it
//! is zero.
//!
//! ```
//! use iced_snackbar::manager::Manager;
//! use iced_snackbar::snack::{Alignment, Snack};
//!
//! let mut manager = Manager::new();
//! manager.add(Snack::new("Saved").with_alignment(Alignment::Bottom));
//! manager.add(Snack::new("Saved").with_alignment(Alignment::Bottom));
//! assert_eq!(manager.snacks(Alignment::Bottom).len(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod accessibility;
pub mod animation;
pub mod clock;
pub mod config;
pub mod deadline;
pub mod diagnostics;
pub mod error;
pub mod manager;
pub mod queue;
pub mod snack;
pub mod surface;
pub mod ui;

#[cfg(test)]
mod test_utils;
