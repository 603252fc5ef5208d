// SPDX-License-Identifier: MPL-2.0
//! Notification area configuration, including loading and saving the policy
//! block to a TOML file.
//!
//! Every field is optional so hosts can persist only what they change;
//! resolved accessors fall back to the library defaults. Paths are always
//! explicit; where the file lives is the host application's decision.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use std::path::Path;
//!
//! let mut config = config::load_from_path(Path::new("toasts.toml")).unwrap_or_default();
//! config.max_visible = Some(5);
//! config::save_to_path(&config, Path::new("toasts.toml")).expect("Failed to save config");
//! ```

use crate::effect::{self, Effect};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Maximum number of toasts visible at once, unless configured otherwise.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Window edge or corner the toast stack is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Full-width banners along the top edge.
    #[default]
    Top,
    /// Full-width banners along the bottom edge.
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// All anchors, in display order.
    pub const ALL: [Anchor; 6] = [
        Anchor::Top,
        Anchor::Bottom,
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    /// Returns whether the stack hangs from the top edge of the window.
    /// Bottom-anchored stacks grow upwards, so their newest toast is last.
    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(self, Anchor::Top | Anchor::TopLeft | Anchor::TopRight)
    }

    /// Returns whether toasts span the window width instead of using the
    /// fixed corner width.
    #[must_use]
    pub fn is_banner(&self) -> bool {
        matches!(self, Anchor::Top | Anchor::Bottom)
    }

    /// Returns the kebab-case name of this anchor.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::Top),
            "bottom" => Ok(Anchor::Bottom),
            "top-left" => Ok(Anchor::TopLeft),
            "top-right" => Ok(Anchor::TopRight),
            "bottom-left" => Ok(Anchor::BottomLeft),
            "bottom-right" => Ok(Anchor::BottomRight),
            other => Err(Error::UnknownAnchor(other.to_string())),
        }
    }
}

/// Display policy of a notification area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Concurrency cap: notifications beyond this count are queued.
    #[serde(default)]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub anchor: Option<Anchor>,
    #[serde(default)]
    pub entry_effect: Option<Effect>,
    #[serde(default)]
    pub entry_duration_ms: Option<u64>,
    #[serde(default)]
    pub exit_effect: Option<Effect>,
    #[serde(default)]
    pub exit_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            anchor: Some(Anchor::Top),
            entry_effect: Some(Effect::Fade),
            entry_duration_ms: Some(effect::DEFAULT_ENTRY_DURATION.as_millis() as u64),
            exit_effect: Some(Effect::Fade),
            exit_duration_ms: Some(effect::DEFAULT_EXIT_DURATION.as_millis() as u64),
        }
    }
}

impl Config {
    /// Resolved concurrency cap. A configured cap of 0 is clamped to 1 so
    /// the area can always make progress.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE).max(1)
    }

    /// Resolved stack anchor.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor.unwrap_or_default()
    }

    /// Resolved entry effect.
    #[must_use]
    pub fn entry_effect(&self) -> Effect {
        self.entry_effect.unwrap_or_default()
    }

    /// Resolved entry effect duration.
    #[must_use]
    pub fn entry_duration(&self) -> Duration {
        self.entry_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(effect::DEFAULT_ENTRY_DURATION)
    }

    /// Resolved exit effect.
    #[must_use]
    pub fn exit_effect(&self) -> Effect {
        self.exit_effect.unwrap_or_default()
    }

    /// Resolved exit effect duration.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        self.exit_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(effect::DEFAULT_EXIT_DURATION)
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
