// SPDX-License-Identifier: MPL-2.0
//! Entry and exit effects.
//!
//! Effects are sampled, not scheduled: the notification area records when a
//! stage started and derives the current opacity from the elapsed time on
//! every tick. A dropped tick therefore never leaves a toast stuck mid-fade.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Default duration of the entry effect.
pub const DEFAULT_ENTRY_DURATION: Duration = Duration::from_millis(250);

/// Default duration of the exit effect.
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(500);

/// Visual effect played when a toast enters or leaves the notification area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Show or remove the toast instantly.
    None,
    /// Linear opacity ramp.
    #[default]
    Fade,
}

impl Effect {
    /// All effects, in display order.
    pub const ALL: [Effect; 2] = [Effect::None, Effect::Fade];

    /// Returns whether this effect completes in a single frame.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Opacity of an entering toast at the given effect progress.
    #[must_use]
    pub fn entry_opacity(&self, progress: f32) -> f32 {
        match self {
            Effect::None => 1.0,
            Effect::Fade => progress.clamp(0.0, 1.0),
        }
    }

    /// Opacity of an exiting toast at the given effect progress, starting
    /// from the opacity the toast had when its removal began.
    #[must_use]
    pub fn exit_opacity(&self, from: f32, progress: f32) -> f32 {
        match self {
            Effect::None => 0.0,
            Effect::Fade => from * (1.0 - progress.clamp(0.0, 1.0)),
        }
    }

    /// Returns the lowercase name of this effect.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::None => "none",
            Effect::Fade => "fade",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Effect::None),
            "fade" => Ok(Effect::Fade),
            other => Err(Error::UnknownEffect(other.to_string())),
        }
    }
}

/// Fraction of `duration` elapsed between `started` and `now`, clamped to `0.0..=1.0`.
///
/// A zero duration reports full progress so instant effects complete on the
/// first tick that observes them.
#[must_use]
pub fn progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_unit_interval() {
        let started = Instant::now();
        let duration = Duration::from_millis(200);

        assert_eq!(progress(started, duration, started), 0.0);
        assert_eq!(
            progress(started, duration, started + Duration::from_millis(100)),
            0.5
        );
        assert_eq!(
            progress(started, duration, started + Duration::from_secs(5)),
            1.0
        );
    }

    #[test]
    fn progress_before_start_is_zero() {
        let started = Instant::now();
        let earlier = started - Duration::from_millis(50);
        assert_eq!(progress(started, Duration::from_millis(200), earlier), 0.0);
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let started = Instant::now();
        assert_eq!(progress(started, Duration::ZERO, started), 1.0);
    }

    #[test]
    fn fade_entry_tracks_progress() {
        assert_eq!(Effect::Fade.entry_opacity(0.0), 0.0);
        assert_eq!(Effect::Fade.entry_opacity(0.25), 0.25);
        assert_eq!(Effect::Fade.entry_opacity(1.0), 1.0);
    }

    #[test]
    fn fade_exit_starts_from_current_opacity() {
        // A toast dismissed halfway through its entry fades out from 0.5
        assert_eq!(Effect::Fade.exit_opacity(0.5, 0.0), 0.5);
        assert_eq!(Effect::Fade.exit_opacity(0.5, 1.0), 0.0);
    }

    #[test]
    fn instant_effect_is_fully_opaque_or_gone() {
        assert_eq!(Effect::None.entry_opacity(0.1), 1.0);
        assert_eq!(Effect::None.exit_opacity(1.0, 0.1), 0.0);
    }

    #[test]
    fn effect_parses_lowercase_names() {
        for effect in Effect::ALL {
            assert_eq!(effect.as_str().parse::<Effect>().unwrap(), effect);
        }
        assert!("wobble".parse::<Effect>().is_err());
    }
}
