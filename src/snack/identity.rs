// SPDX-License-Identifier: MPL-2.0
//! Logical identity of a snack.
//!
//! Two snacks are the same logical snack when they share a reuse
//! identifier, or, when neither has one, when both title and message match.
//! Identity drives deduplication (promote-on-duplicate), removal lookup and
//! deadline bookkeeping.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnackIdentity {
    /// Identified by a non-empty reuse identifier only.
    Reuse(String),
    /// Identified by its content.
    Content {
        title: Option<String>,
        message: String,
    },
}

impl fmt::Display for SnackIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnackIdentity::Reuse(id) => write!(f, "reuse:{}", id),
            SnackIdentity::Content {
                title: Some(title),
                message,
            } => write!(f, "content:{}/{}", title, message),
            SnackIdentity::Content {
                title: None,
                message,
            } => write!(f, "content:{}", message),
        }
    }
}
