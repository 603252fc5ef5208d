// SPDX-License-Identifier: MPL-2.0
//! The notification area: the overlay container a host application embeds.
//!
//! `NotificationArea` owns the lifecycle [`Manager`] and translates between
//! it and the iced application loop. The host forwards this widget's
//! [`Message`]s from its `update`, layers [`NotificationArea::view`] over
//! its content, and merges [`NotificationArea::subscription`] into its own.
//!
//! The subscription is conditional: it ticks at animation rate while an
//! effect is in flight, coarsely while only timeouts are armed, and not at
//! all when the area is idle, so an idle host stays event-driven.

use crate::config::Config;
use crate::effect::Effect;
use crate::manager::{Cadence, Manager};
use crate::notification::{Category, Notification, NotificationId};
use crate::toast::Toast;
use iced::{time, Element, Subscription};
use std::time::{Duration, Instant};

/// Tick interval while an entry or exit effect is in flight.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick interval while only auto-dismiss timeouts are armed.
const TIMEOUT_TICK: Duration = Duration::from_millis(100);

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Periodic tick driving effects and auto-dismiss timers.
    Tick(Instant),
}

/// Overlay container managing the notification stack and queue.
#[derive(Debug, Clone)]
pub struct NotificationArea {
    manager: Manager,
    /// The most recent instant observed through [`NotificationArea::update`].
    /// Views are pure, so effects are sampled against this instead of the
    /// wall clock.
    now: Instant,
}

impl Default for NotificationArea {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationArea {
    /// Creates an empty notification area with the default display policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty notification area with the given display policy.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            manager: Manager::with_config(config),
            now: Instant::now(),
        }
    }

    /// Pushes a notification, displaying it immediately if a slot is free
    /// and queueing it otherwise.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.now = Instant::now();
        self.manager.push(notification, self.now)
    }

    /// Pushes a primary notification.
    pub fn primary(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::new(Category::Primary, message))
    }

    /// Pushes a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::new(Category::Success, message))
    }

    /// Pushes an info notification.
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::new(Category::Info, message))
    }

    /// Pushes a warning notification.
    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::new(Category::Warning, message))
    }

    /// Pushes a danger notification. Danger notifications are sticky by
    /// default and stay until dismissed.
    pub fn danger(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::new(Category::Danger, message))
    }

    /// Begins removal of a notification. Returns `false` when the id is
    /// unknown or the notification is already on its way out.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.now = Instant::now();
        self.manager.dismiss(id, self.now)
    }

    /// Begins removal of every notification and drops the queue.
    pub fn dismiss_all(&mut self) {
        self.now = Instant::now();
        self.manager.dismiss_all(self.now);
    }

    /// Destroys all notifications immediately, skipping exit effects.
    pub fn clear(&mut self) {
        self.manager.clear();
    }

    /// Sets the effect played when a toast appears.
    pub fn set_entry_effect(&mut self, effect: Effect, duration: Duration) {
        let config = self.manager.config_mut();
        config.entry_effect = Some(effect);
        config.entry_duration_ms = Some(duration.as_millis() as u64);
    }

    /// Sets the effect played when a toast is removed.
    pub fn set_exit_effect(&mut self, effect: Effect, duration: Duration) {
        let config = self.manager.config_mut();
        config.exit_effect = Some(effect);
        config.exit_duration_ms = Some(duration.as_millis() as u64);
    }

    /// Handles a notification area message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.now = Instant::now();
                self.manager.dismiss(id, self.now);
            }
            Message::Tick(instant) => {
                self.now = instant;
                self.manager.tick(instant);
            }
        }
    }

    /// Renders the stacked overlay.
    ///
    /// Layer this over the host content, e.g. with `iced::widget::Stack`;
    /// positioning within the window is handled by the configured anchor.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(&self.manager, self.now)
    }

    /// Creates the periodic tick subscription for this area.
    ///
    /// Returns `Subscription::none()` when no notification needs driving.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.manager.cadence() {
            Cadence::Animating => time::every(ANIMATION_TICK).map(Message::Tick),
            Cadence::Waiting => time::every(TIMEOUT_TICK).map(Message::Tick),
            Cadence::Idle => Subscription::none(),
        }
    }

    /// Returns the underlying lifecycle manager.
    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Returns the number of displayed notifications, exiting ones included.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.manager.active_count()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.manager.pending_count()
    }

    /// Returns whether any notification is displayed or queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.manager.has_notifications()
    }
}
