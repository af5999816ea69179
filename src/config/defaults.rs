// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Snack**: Display duration and minimum height of a single snack
//! - **Text**: Metrics used to predict how tall a snack is drawn
//! - **Animation**: Durations and spring parameters for insert/rearrange/remove
//! - **Layout**: Spacing, insets and container width
//! - **Ticking**: Frame interval used while snacks are on screen
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Snack Defaults
// ==========================================================================

/// Default time a snack stays on screen before auto-dismissal (in seconds).
pub const DEFAULT_SNACK_DURATION_SECS: f64 = 4.0;

/// Minimum height of a snack, whatever its content.
pub const DEFAULT_SNACK_HEIGHT: f32 = 64.0;

// ==========================================================================
// Text Metrics
// ==========================================================================

/// Line height of snack labels, relative to their font size.
pub const LABEL_LINE_HEIGHT: f32 = 1.3;

/// Average glyph advance relative to the font size, used to predict wrapping.
pub const AVERAGE_GLYPH_WIDTH: f32 = 0.6;

/// Padding around the dismiss button glyph.
pub const DISMISS_BUTTON_PADDING: f32 = 4.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the insert animation (in seconds).
pub const DEFAULT_INSERT_DURATION_SECS: f64 = 0.4;

/// Duration of the rearrange (promote) animation (in seconds).
pub const DEFAULT_REARRANGE_DURATION_SECS: f64 = 0.4;

/// Duration of the remove animation (in seconds).
pub const DEFAULT_REMOVE_DURATION_SECS: f64 = 0.4;

/// Damping ratio of the default insert spring.
pub const DEFAULT_SPRING_DAMPING: f32 = 0.6;

/// Initial velocity of the default insert spring.
pub const DEFAULT_SPRING_VELOCITY: f32 = 0.4;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical spacing between two stacked snacks.
pub const DEFAULT_INTER_ITEM_SPACING: f32 = 16.0;

/// Distance between the container and the display surface edges.
pub const DEFAULT_CONTENT_INSET: f32 = 16.0;

/// Maximum width of the snack container.
pub const DEFAULT_MAX_CONTAINER_WIDTH: f32 = 428.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval between animation/deadline ticks while snacks are visible (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum number of diagnostic events kept in memory.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum number of diagnostic events kept in memory.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SNACK_DURATION_SECS > 0.0);
    assert!(DEFAULT_SNACK_HEIGHT > 0.0);

    assert!(LABEL_LINE_HEIGHT >= 1.0);
    assert!(AVERAGE_GLYPH_WIDTH > 0.0);
    assert!(DISMISS_BUTTON_PADDING >= 0.0);

    assert!(DEFAULT_INSERT_DURATION_SECS > 0.0);
    assert!(DEFAULT_REARRANGE_DURATION_SECS > 0.0);
    assert!(DEFAULT_REMOVE_DURATION_SECS > 0.0);
    assert!(DEFAULT_SPRING_DAMPING > 0.0);

    assert!(DEFAULT_INTER_ITEM_SPACING >= 0.0);
    assert!(DEFAULT_CONTENT_INSET >= 0.0);
    assert!(DEFAULT_MAX_CONTAINER_WIDTH > 0.0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
