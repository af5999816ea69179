// SPDX-License-Identifier: MPL-2.0
//! Per-snack visual style.
//!
//! The core reads [`Elevation::extent`] (to know how far off-screen a snack
//! must rest before it slides in) and [`SnackStyle::content_height`] (to
//! stack snacks without gaps); everything else is consumed by the toast
//! renderer.

use crate::config::defaults::{
    AVERAGE_GLYPH_WIDTH, DEFAULT_SNACK_HEIGHT, DISMISS_BUTTON_PADDING, LABEL_LINE_HEIGHT,
};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Distances from the four edges of a box, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl Insets {
    /// Same inset on all four edges.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::all(0.0)
    }
}

impl From<Insets> for iced::Padding {
    fn from(insets: Insets) -> Self {
        iced::Padding {
            top: insets.top,
            right: insets.trailing,
            bottom: insets.bottom,
            left: insets.leading,
        }
    }
}

/// Color and size of one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
}

/// Box shadow drawn beneath a snack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elevation {
    pub x_offset: f32,
    pub y_offset: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
    pub opacity: f32,
}

impl Elevation {
    /// How far the shadow reaches past each edge of the snack.
    #[must_use]
    pub fn extent(&self) -> Insets {
        let radius = self.blur / 2.0 + self.spread;
        Insets {
            top: (radius - self.y_offset).max(0.0),
            leading: (radius - self.x_offset).max(0.0),
            bottom: (radius + self.y_offset).max(0.0),
            trailing: (radius + self.x_offset).max(0.0),
        }
    }

    /// The shadow as iced draws it.
    #[must_use]
    pub fn shadow(&self) -> iced::Shadow {
        iced::Shadow {
            color: Color {
                a: self.color.a * self.opacity,
                ..self.color
            },
            offset: iced::Vector::new(self.x_offset, self.y_offset),
            blur_radius: self.blur,
        }
    }
}

impl Default for Elevation {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 2.33,
            blur: 6.33,
            spread: -0.33,
            color: Color::BLACK,
            opacity: 0.46,
        }
    }
}

/// Spacing and sizing inside a snack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackLayout {
    pub content_inset: Insets,
    /// Vertical spacing between title and message.
    pub label_spacing: f32,
    /// Horizontal spacing between icon and labels.
    pub icon_to_label_spacing: f32,
    pub corner_radius: f32,
    pub icon_size: f32,
}

impl Default for SnackLayout {
    fn default() -> Self {
        Self {
            content_inset: Insets::all(16.0),
            label_spacing: 8.0,
            icon_to_label_spacing: 16.0,
            corner_radius: 4.0,
            icon_size: 32.0,
        }
    }
}

/// Complete appearance of a snack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackStyle {
    pub title: TextStyle,
    pub message: TextStyle,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub elevation: Elevation,
    pub layout: SnackLayout,
}

impl SnackStyle {
    /// Side of the square dismiss button.
    #[must_use]
    pub fn dismiss_button_size(&self) -> f32 {
        self.message.size * LABEL_LINE_HEIGHT + 2.0 * DISMISS_BUTTON_PADDING
    }

    /// Height of a snack with these labels when drawn `width` wide.
    ///
    /// Wrapping is predicted from [`AVERAGE_GLYPH_WIDTH`]. The result never
    /// drops below [`DEFAULT_SNACK_HEIGHT`].
    #[must_use]
    pub fn content_height(
        &self,
        title: Option<&str>,
        message: &str,
        has_icon: bool,
        width: f32,
    ) -> f32 {
        let layout = &self.layout;
        let dismiss = self.dismiss_button_size();
        let icon = if has_icon { layout.icon_size } else { 0.0 };

        // Row: [icon] [labels] [dismiss]
        let mut label_width =
            width - layout.content_inset.horizontal() - layout.icon_to_label_spacing - dismiss;
        if has_icon {
            label_width -= icon + layout.icon_to_label_spacing;
        }

        let mut labels = label_block_height(message, self.message.size, label_width);
        if let Some(title) = title {
            labels += label_block_height(title, self.title.size, label_width) + layout.label_spacing;
        }

        let content = labels.max(dismiss).max(icon);
        (content + layout.content_inset.top + layout.content_inset.bottom).max(DEFAULT_SNACK_HEIGHT)
    }
}

#[allow(clippy::cast_precision_loss)] // line counts are small
fn label_block_height(text: &str, size: f32, width: f32) -> f32 {
    wrapped_lines(text, size, width) as f32 * size * LABEL_LINE_HEIGHT
}

/// Lines `text` takes at font `size` in a box `width` wide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // floored and at least 1
fn wrapped_lines(text: &str, size: f32, width: f32) -> usize {
    let glyph = (size * AVERAGE_GLYPH_WIDTH).max(f32::EPSILON);
    let per_line = (width / glyph).floor().max(1.0) as usize;
    text.split('\n')
        .map(|line| line.chars().count().div_ceil(per_line).max(1))
        .sum()
}

impl Default for SnackStyle {
    fn default() -> Self {
        Self {
            title: TextStyle {
                color: Color::from_rgb(0.1, 0.1, 0.1),
                size: 16.0,
            },
            message: TextStyle {
                color: Color::from_rgb(0.1, 0.1, 0.1),
                size: 14.0,
            },
            background: Color::WHITE,
            border_color: Color::from_rgb(0.1, 0.1, 0.1),
            border_width: 0.0,
            elevation: Elevation::default(),
            layout: SnackLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_elevation_extends_further_below_than_above() {
        let extent = Elevation::default().extent();
        assert!(extent.bottom > extent.top);
        assert!(extent.top >= 0.0);
    }

    #[test]
    fn flat_elevation_has_no_extent() {
        let flat = Elevation {
            x_offset: 0.0,
            y_offset: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::BLACK,
            opacity: 0.0,
        };
        assert_eq!(flat.extent(), Insets::all(0.0));
    }

    #[test]
    fn single_line_snack_keeps_minimum_height() {
        let style = SnackStyle::default();
        assert_eq!(
            style.content_height(None, "Saved", false, 428.0),
            DEFAULT_SNACK_HEIGHT
        );
    }

    #[test]
    fn title_adds_a_line_and_spacing() {
        let style = SnackStyle::default();
        let height = style.content_height(Some("Upload"), "Done", false, 428.0);
        // 16 + 16 * 1.3 + 8 + 14 * 1.3 + 16
        assert!((height - 79.0).abs() < 1e-3, "height was {height}");
    }

    #[test]
    fn long_message_wraps_in_narrow_width() {
        let style = SnackStyle::default();
        let message = "word ".repeat(40);
        let wide = style.content_height(None, &message, false, 2000.0);
        let narrow = style.content_height(None, &message, false, 300.0);
        assert!(narrow > wide);
        assert_eq!(wrapped_lines("a\nb", 14.0, 300.0), 2);
        assert_eq!(wrapped_lines("", 14.0, 300.0), 1);
    }

    #[test]
    fn icon_sets_a_floor_and_narrows_labels() {
        let mut style = SnackStyle::default();
        style.layout.icon_size = 80.0;
        let height = style.content_height(None, "a", true, 428.0);
        assert!((height - 112.0).abs() < 1e-3, "height was {height}");
    }

    #[test]
    fn insets_convert_to_padding() {
        let padding: iced::Padding = Insets {
            top: 1.0,
            leading: 2.0,
            bottom: 3.0,
            trailing: 4.0,
        }
        .into();
        assert_eq!(padding.top, 1.0);
        assert_eq!(padding.left, 2.0);
        assert_eq!(padding.bottom, 3.0);
        assert_eq!(padding.right, 4.0);
    }
}
