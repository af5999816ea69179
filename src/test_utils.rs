// SPDX-License-Identifier: MPL-2.0
//! Float assertions shared by the unit tests.
//!
//! Offsets, heights and opacities come out of animation curves and padding
//! arithmetic, so tests compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for layout values that should match exactly.
pub const F32_EPSILON: f32 = 1e-6;
