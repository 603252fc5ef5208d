// SPDX-License-Identifier: MPL-2.0
//! Stacked, auto-dismissing toast notifications for Iced applications.
//!
//! This crate provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, stacked at a configurable window anchor.
//!
//! The host application keeps ownership of its window and event loop; the
//! library contributes state, display policy, and view functions.
//!
//! # Components
//!
//! - [`notification`] - Core [`Notification`] struct with severity categories
//! - [`manager`] - [`Manager`] for queuing and lifecycle management
//! - [`area`] - [`NotificationArea`], the facade a host application embeds
//! - [`toast`] - Toast widget component for rendering notifications
//! - [`effect`] - Entry/exit effects and their timing
//! - [`config`] - Display policy with TOML persistence
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::{self as toasts, NotificationArea};
//!
//! struct App {
//!     toasts: NotificationArea,
//!     // ...
//! }
//!
//! enum Message {
//!     Toasts(toasts::Message),
//!     SaveFinished,
//!     // ...
//! }
//!
//! impl App {
//!     fn update(&mut self, message: Message) {
//!         match message {
//!             Message::Toasts(message) => self.toasts.update(message),
//!             Message::SaveFinished => {
//!                 self.toasts.success("Image saved");
//!             }
//!         }
//!     }
//!
//!     fn view(&self) -> iced::Element<'_, Message> {
//!         iced::widget::Stack::new()
//!             .push(self.content())
//!             .push(self.toasts.view().map(Message::Toasts))
//!             .into()
//!     }
//!
//!     fn subscription(&self) -> iced::Subscription<Message> {
//!         self.toasts.subscription().map(Message::Toasts)
//!     }
//! }
//! ```
//!
//! # Display policy
//!
//! At most [`Config::max_visible`] toasts are displayed at once; further
//! notifications queue in arrival order and are promoted when an exit
//! effect completes. A notification's auto-dismiss timeout starts when it
//! is displayed, not when it is pushed, so queued toasts get their full
//! display time.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.2.0")]

pub mod area;
pub mod config;
pub mod effect;
pub mod error;
pub mod manager;
pub mod notification;
pub mod style;
pub mod toast;

pub use area::{Message, NotificationArea};
pub use config::{Anchor, Config};
pub use effect::Effect;
pub use error::{Error, Result};
pub use manager::{Cadence, Manager, Record, Stage};
pub use notification::{Category, Notification, NotificationId};
pub use toast::Toast;
