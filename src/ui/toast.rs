// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering one snack, and the overlay stacking all of them.
//!
//! The overlay places each toast at the offset and opacity sampled from the
//! presentation queue, so what iced draws follows the layout engine. Toasts
//! still resting off-screen are clamped to the container edge; their
//! opacity carries the transition. Each toast is drawn at the height the
//! queue measured for it, so consecutive toasts are exactly one spacing
//! apart.

use crate::config::{AppearanceConfig, DISMISS_BUTTON_PADDING, LABEL_LINE_HEIGHT};
use crate::manager::{Manager, Message};
use crate::queue::NodeFrame;
use crate::snack::{Alignment, Snack, SnackStyle};
use iced::widget::{button, container, image, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single snack at `opacity`, as tall as its content.
    pub fn view(snack: &Snack, opacity: f32) -> Element<'_, Message> {
        body(snack, opacity, Length::Shrink)
    }

    /// Renders every node of both alignment groups, ordered by z-index.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let appearance = manager.appearance();
        let mut layers: Vec<(u32, Element<'_, Message>)> = Vec::new();
        for alignment in Alignment::ALL {
            for frame in manager.frames(alignment) {
                layers.push((frame.z_index, positioned(frame, alignment, appearance)));
            }
        }

        if layers.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        layers.sort_by_key(|(z_index, _)| *z_index);
        layers
            .into_iter()
            .fold(Stack::new(), |stack, (_, layer)| stack.push(layer))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn body(snack: &Snack, opacity: f32, height: Length) -> Element<'_, Message> {
    let style = *snack.style();
    let layout = style.layout;

    let mut labels = Column::new().spacing(layout.label_spacing);
    if let Some(title) = snack.title() {
        labels = labels.push(label(title, style.title.size, style.title.color, opacity));
    }
    labels = labels.push(label(
        snack.message(),
        style.message.size,
        style.message.color,
        opacity,
    ));

    let dismiss_button = button(
        text("\u{2715}")
            .size(style.message.size)
            .line_height(LABEL_LINE_HEIGHT),
    )
    .on_press(Message::Dismiss {
        alignment: snack.alignment(),
        identity: snack.identity(),
    })
    .padding(DISMISS_BUTTON_PADDING)
    .width(Length::Fixed(style.dismiss_button_size()))
    .style(dismiss_button_style);

    // Layout: [icon] [title / message] [dismiss]
    let mut content = Row::new()
        .spacing(layout.icon_to_label_spacing)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = snack.icon() {
        content = content.push(
            image(icon.clone())
                .width(Length::Fixed(layout.icon_size))
                .height(Length::Fixed(layout.icon_size))
                .opacity(opacity),
        );
    }
    let content = content
        .push(Container::new(labels).width(Length::Fill))
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fill)
        .height(height)
        .align_y(alignment::Vertical::Center)
        .padding(layout.content_inset)
        .clip(true)
        .style(move |_theme: &Theme| snack_container_style(&style, opacity))
        .into()
}

fn label(content: &str, size: f32, color: Color, opacity: f32) -> Text<'_> {
    Text::new(content)
        .size(size)
        .line_height(LABEL_LINE_HEIGHT)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(color, opacity)),
        })
}

/// Places a toast `frame.offset` away from the container edge of `alignment`,
/// exactly `frame.height` tall so the next toast starts where the queue
/// expects it.
fn positioned<'a>(
    frame: NodeFrame<'a>,
    alignment: Alignment,
    appearance: &AppearanceConfig,
) -> Element<'a, Message> {
    let padding = edge_padding(alignment, frame.offset, appearance);
    let toast = Container::new(body(frame.snack, frame.opacity, Length::Fixed(frame.height)))
        .width(Length::Fill)
        .max_width(appearance.max_container_width);

    Container::new(toast)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding)
        .align_x(alignment::Horizontal::Center)
        .align_y(match alignment {
            Alignment::Top => alignment::Vertical::Top,
            Alignment::Bottom => alignment::Vertical::Bottom,
        })
        .into()
}

fn edge_padding(alignment: Alignment, offset: f32, appearance: &AppearanceConfig) -> Padding {
    let inset = appearance.content_inset;
    let offset = offset.max(0.0);
    let (top, bottom) = match alignment {
        Alignment::Top => (inset.top + offset, 0.0),
        Alignment::Bottom => (0.0, inset.bottom + offset),
    };
    Padding {
        top,
        right: inset.trailing,
        bottom,
        left: inset.leading,
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Style function for the toast container.
fn snack_container_style(style: &SnackStyle, opacity: f32) -> container::Style {
    let mut shadow = style.elevation.shadow();
    shadow.color = faded(shadow.color, opacity);

    container::Style {
        background: Some(iced::Background::Color(faded(style.background, opacity))),
        border: iced::Border {
            color: faded(style.border_color, opacity),
            width: style.border_width,
            radius: style.layout.corner_radius.into(),
        },
        shadow,
        text_color: Some(faded(style.message.color, opacity)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..Color::from_rgb(0.6, 0.6, 0.6)
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => highlight(0.15),
        button::Status::Pressed => highlight(0.3),
    };
    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: 4.0_f32.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
