// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with category-colored backgrounds and a dismiss button.
//! Entry and exit effects are applied here by scaling every color's alpha
//! with the record's current opacity, so a fade covers the whole card.

use crate::area::Message;
use crate::config::Anchor;
use crate::manager::{Manager, Record};
use crate::notification::Category;
use crate::style::{border, opacity as opacity_tokens, palette, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Shadow, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at the given opacity.
    pub fn view(record: &Record, opacity: f32, width: Length) -> Element<'_, Message> {
        let notification = record.notification();
        let category = notification.category();

        let glyph_widget = Text::new(category.glyph().to_string())
            .size(typography::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(category.accent(), opacity)),
            });

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(category.text_color(), opacity)),
            });

        let notification_id = notification.id();
        let dismiss_button = button(
            Container::new(Text::new("\u{2715}").size(typography::CLOSE))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Dismiss(notification_id))
        .width(Length::Fixed(sizing::CLOSE_BUTTON_WIDTH))
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, status| dismiss_button_style(status, category, opacity));

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph_widget)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(width)
            .height(Length::Fixed(sizing::TOAST_HEIGHT))
            .align_y(alignment::Vertical::Center)
            .padding(Padding {
                top: 0.0,
                right: spacing::XS,
                bottom: 0.0,
                left: spacing::SM,
            })
            .style(move |_theme: &Theme| toast_container_style(category, opacity))
            .into()
    }

    /// Renders the toast overlay with all displayed notifications.
    ///
    /// The stack is positioned according to the configured [`Anchor`]; the
    /// host layers the returned element over its content, typically with
    /// `iced::widget::Stack`.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let anchor = manager.config().anchor();
        let width = if anchor.is_banner() {
            Length::Fill
        } else {
            Length::Fixed(sizing::TOAST_WIDTH)
        };

        let mut toasts: Vec<Element<'_, Message>> = manager
            .active()
            .map(|record| Self::view(record, manager.opacity(record, now), width))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        // Bottom stacks mirror top stacks: the oldest toast sits nearest
        // the window edge either way.
        if !anchor.is_top() {
            toasts.reverse();
        }

        let stack = Column::with_children(toasts)
            .spacing(spacing::XS)
            .width(width);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(anchor_align_x(anchor))
            .align_y(if anchor.is_top() {
                alignment::Vertical::Top
            } else {
                alignment::Vertical::Bottom
            })
            .padding(stack_padding(anchor))
            .into()
    }
}

fn anchor_align_x(anchor: Anchor) -> alignment::Horizontal {
    match anchor {
        Anchor::Top | Anchor::Bottom => alignment::Horizontal::Center,
        Anchor::TopLeft | Anchor::BottomLeft => alignment::Horizontal::Left,
        Anchor::TopRight | Anchor::BottomRight => alignment::Horizontal::Right,
    }
}

/// Banner stacks keep wide side margins; corner stacks sit a regular
/// padding step away from the window edges.
fn stack_padding(anchor: Anchor) -> Padding {
    if anchor.is_banner() {
        Padding::from([sizing::STACK_EDGE_MARGIN, sizing::STACK_SIDE_MARGIN])
    } else {
        Padding::new(spacing::MD)
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(category: Category, opacity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(
            category.background(),
            opacity,
        ))),
        border: iced::Border {
            color: faded(category.accent(), opacity),
            width: border::WIDTH_MD,
            radius: border::RADIUS.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, opacity),
            ..shadow::MD
        },
        text_color: Some(faded(category.text_color(), opacity)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(status: button::Status, category: Category, opacity: f32) -> button::Style {
    let text_color = faded(category.text_color(), opacity);

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity_tokens::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
                opacity,
            ))),
            text_color,
            border: iced::Border {
                radius: border::RADIUS_SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity_tokens::OVERLAY_MEDIUM,
                    ..palette::GRAY_400
                },
                opacity,
            ))),
            text_color,
            border: iced::Border {
                radius: border::RADIUS_SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: text_color.a * opacity_tokens::OVERLAY_MEDIUM,
                ..text_color
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
