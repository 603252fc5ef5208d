// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Category` enum
//! used throughout the library.

use crate::error::Error;
use crate::style::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Category determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Highlighted announcement (brand blue, white text, 3s duration).
    Primary,
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (yellow, 5s duration).
    Warning,
    /// Failure requiring attention (red, manual dismiss).
    Danger,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Primary,
        Category::Success,
        Category::Info,
        Category::Warning,
        Category::Danger,
    ];

    /// Returns the background color for this category.
    #[must_use]
    pub fn background(&self) -> Color {
        match self {
            Category::Primary => palette::PRIMARY_BG,
            Category::Success => palette::SUCCESS_BG,
            Category::Info => palette::INFO_BG,
            Category::Warning => palette::WARNING_BG,
            Category::Danger => palette::DANGER_BG,
        }
    }

    /// Returns the text color for this category.
    ///
    /// Only `Primary` uses a filled accent background, so it is the only
    /// category rendered with light text.
    #[must_use]
    pub fn text_color(&self) -> Color {
        match self {
            Category::Primary => palette::WHITE,
            _ => palette::BLACK,
        }
    }

    /// Returns the accent color used for the toast border and icon.
    #[must_use]
    pub fn accent(&self) -> Color {
        match self {
            Category::Primary => palette::PRIMARY_ACCENT,
            Category::Success => palette::SUCCESS_ACCENT,
            Category::Info => palette::INFO_ACCENT,
            Category::Warning => palette::WARNING_ACCENT,
            Category::Danger => palette::DANGER_ACCENT,
        }
    }

    /// Returns the glyph drawn in front of the message.
    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            Category::Primary => '\u{25CF}', // ●
            Category::Success => '\u{2713}', // ✓
            Category::Info => 'i',
            Category::Warning => '!',
            Category::Danger => '\u{2717}', // ✗
        }
    }

    /// Returns the auto-dismiss duration for this category.
    /// Returns `None` for danger (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Category::Primary | Category::Success | Category::Info => Some(Duration::from_secs(3)),
            Category::Warning => Some(Duration::from_secs(5)),
            Category::Danger => None, // Manual dismiss required
        }
    }

    /// Returns the lowercase name of this category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Success => "success",
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Danger => "danger",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Category::Primary),
            "success" => Ok(Category::Success),
            "info" => Ok(Category::Info),
            "warning" => Ok(Category::Warning),
            "danger" => Ok(Category::Danger),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Category (determines color and auto-dismiss behavior).
    category: Category,
    /// The message text. Localization is the host application's concern.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// Auto-dismiss timeout, counted from the moment the notification is
    /// displayed. `None` keeps the notification until it is dismissed.
    timeout: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given category and message.
    ///
    /// The timeout starts as the category default and can be overridden
    /// with [`Notification::timeout`] or [`Notification::sticky`].
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            category,
            message: message.into(),
            created_at: Instant::now(),
            timeout: category.auto_dismiss_duration(),
        }
    }

    /// Creates a primary notification.
    pub fn primary(message: impl Into<String>) -> Self {
        Self::new(Category::Primary, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    /// Creates a danger notification.
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Category::Danger, message)
    }

    /// Sets a custom auto-dismiss timeout, overriding the category default.
    ///
    /// Useful for notifications that need more time to read (e.g., long
    /// file lists).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disables the auto-dismiss timeout entirely. The notification stays
    /// until dismissed through its close button or the area API.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the effective auto-dismiss timeout.
    #[must_use]
    pub fn effective_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether this notification stays until manually dismissed.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.timeout.is_none()
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn category_backgrounds_are_distinct() {
        let mut seen = Vec::new();
        for category in Category::ALL {
            let color = category.background();
            assert!(!seen.contains(&color), "{category} reuses a background");
            seen.push(color);
        }
    }

    #[test]
    fn danger_category_has_no_auto_dismiss() {
        assert!(Category::Danger.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Category::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Category::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn notification_constructors_set_correct_category() {
        assert_eq!(Notification::primary("").category(), Category::Primary);
        assert_eq!(Notification::success("").category(), Category::Success);
        assert_eq!(Notification::info("").category(), Category::Info);
        assert_eq!(Notification::warning("").category(), Category::Warning);
        assert_eq!(Notification::danger("").category(), Category::Danger);
    }

    #[test]
    fn timeout_override_takes_precedence() {
        let notification = Notification::success("saved").timeout(Duration::from_millis(1200));
        assert_eq!(
            notification.effective_timeout(),
            Some(Duration::from_millis(1200))
        );
    }

    #[test]
    fn sticky_disables_category_default() {
        let notification = Notification::info("hold on").sticky();
        assert!(notification.is_sticky());
        assert_eq!(notification.effective_timeout(), None);
    }

    #[test]
    fn category_names_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_name_is_rejected() {
        assert!("fatal".parse::<Category>().is_err());
    }

    #[test]
    fn primary_text_is_light_others_dark() {
        assert_eq!(Category::Primary.text_color(), palette::WHITE);
        assert_eq!(Category::Success.text_color(), palette::BLACK);
    }
}
