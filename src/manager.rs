// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of simultaneously visible toasts,
//! arms auto-dismiss timeouts, and sequences entry and exit effects.
//!
//! Time is injected (`now: Instant`) instead of read from the clock, so
//! every transition is reproducible in tests. The host feeds the manager a
//! periodic tick; [`Manager::cadence`] reports how often that tick needs to
//! arrive.

use crate::config::Config;
use crate::effect;
use crate::notification::{Notification, NotificationId};
use log::{debug, trace};
use std::collections::VecDeque;
use std::time::Instant;

/// Lifecycle stage of a displayed notification.
///
/// Queued notifications have no stage; they enter the lifecycle when a
/// display slot frees up. A record leaves the lifecycle when its exit
/// effect completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The entry effect is playing. The auto-dismiss timeout is already
    /// counting down.
    Entering,
    /// Fully visible.
    Shown,
    /// The exit effect is playing. The record keeps occupying its display
    /// slot until the effect completes.
    Exiting,
}

/// A notification occupying a display slot, with its lifecycle bookkeeping.
#[derive(Debug, Clone)]
pub struct Record {
    notification: Notification,
    stage: Stage,
    /// When the current stage began.
    stage_started: Instant,
    /// When the notification was first displayed. The auto-dismiss timeout
    /// counts from here, not from creation, so time spent in the queue
    /// never eats into display time.
    shown_at: Instant,
    /// Opacity at the moment removal began. The exit effect ramps down
    /// from here so a toast dismissed mid-entry does not flash to full
    /// opacity first.
    exit_from: f32,
}

impl Record {
    /// Returns the notification held by this record.
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns the current lifecycle stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns when the notification was first displayed.
    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

/// Tick cadence the notification area should request from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// An entry or exit effect is in flight; tick at animation rate.
    Animating,
    /// Timeouts are armed or notifications are queued; a coarse tick is
    /// enough.
    Waiting,
    /// Nothing to drive; no ticks needed.
    Idle,
}

/// Manages the notification queue and the visible notifications.
#[derive(Debug, Clone)]
pub struct Manager {
    /// Displayed notifications in arrival order.
    active: Vec<Record>,
    /// Notifications waiting for a display slot, in arrival order.
    pending: VecDeque<Notification>,
    /// Display policy: concurrency cap, anchor, effects.
    config: Config,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with the default display policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty manager with the given display policy.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            active: Vec::new(),
            pending: VecDeque::new(),
            config,
        }
    }

    /// Returns the display policy.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the display policy for modification.
    ///
    /// Policy changes apply from the next transition on; records already
    /// mid-effect finish under whatever the policy says when the next tick
    /// observes them.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Pushes a new notification.
    ///
    /// If a display slot is free it is displayed immediately; otherwise it
    /// is queued and shown when a slot frees up. Returns the notification's
    /// id so the caller can dismiss it programmatically.
    pub fn push(&mut self, notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        if self.active.len() < self.config.max_visible() {
            self.activate(notification, now);
        } else {
            trace!(
                "notification {id:?} queued behind {} others",
                self.pending.len()
            );
            self.pending.push_back(notification);
        }
        id
    }

    /// Begins removal of a notification.
    ///
    /// An active notification starts its exit effect; a queued one is
    /// dropped silently. Returns `false` when the id is unknown or the
    /// notification is already exiting, so a user close racing a timeout
    /// close triggers exactly one exit.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(index) = self.active.iter().position(|r| r.notification.id() == id) {
            if self.active[index].stage == Stage::Exiting {
                trace!("notification {id:?} is already exiting, dismiss ignored");
                return false;
            }
            debug!("notification {id:?} dismissed");
            self.begin_exit(index, now);
            self.reap(now);
            return true;
        }

        if let Some(index) = self.pending.iter().position(|n| n.id() == id) {
            self.pending.remove(index);
            trace!("notification {id:?} dropped from queue");
            return true;
        }

        false
    }

    /// Begins removal of every active notification and drops the queue.
    pub fn dismiss_all(&mut self, now: Instant) {
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            trace!("dropped {dropped} queued notifications");
        }
        for index in 0..self.active.len() {
            if self.active[index].stage != Stage::Exiting {
                self.begin_exit(index, now);
            }
        }
        self.reap(now);
    }

    /// Destroys all notifications immediately, skipping exit effects.
    pub fn clear(&mut self) {
        debug!(
            "cleared {} active and {} queued notifications",
            self.active.len(),
            self.pending.len()
        );
        self.active.clear();
        self.pending.clear();
    }

    /// Drives the state machine: completes entry effects, expires
    /// timeouts, destroys records whose exit effect finished, and promotes
    /// queued notifications into freed slots.
    pub fn tick(&mut self, now: Instant) {
        let entry_effect = self.config.entry_effect();
        let entry_duration = self.config.entry_duration();
        for record in &mut self.active {
            if record.stage == Stage::Entering
                && (entry_effect.is_instant()
                    || effect::progress(record.stage_started, entry_duration, now) >= 1.0)
            {
                record.stage = Stage::Shown;
                record.stage_started = now;
            }
        }

        // A timeout may fire mid-entry; the exit then fades from whatever
        // opacity the entry had reached.
        let expired: Vec<usize> = self
            .active
            .iter()
            .enumerate()
            .filter(|(_, record)| matches!(record.stage, Stage::Entering | Stage::Shown))
            .filter(|(_, record)| {
                record
                    .notification
                    .effective_timeout()
                    .is_some_and(|timeout| {
                        now.saturating_duration_since(record.shown_at) >= timeout
                    })
            })
            .map(|(index, _)| index)
            .collect();
        for index in expired {
            debug!(
                "notification {:?} timed out",
                self.active[index].notification.id()
            );
            self.begin_exit(index, now);
        }

        self.reap(now);
    }

    /// Presentation opacity of a record at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, record: &Record, now: Instant) -> f32 {
        match record.stage {
            Stage::Entering => self.config.entry_effect().entry_opacity(effect::progress(
                record.stage_started,
                self.config.entry_duration(),
                now,
            )),
            Stage::Shown => 1.0,
            Stage::Exiting => self.config.exit_effect().exit_opacity(
                record.exit_from,
                effect::progress(record.stage_started, self.config.exit_duration(), now),
            ),
        }
    }

    /// Tick cadence required to make progress from the current state.
    #[must_use]
    pub fn cadence(&self) -> Cadence {
        if self.active.iter().any(|r| r.stage != Stage::Shown) {
            return Cadence::Animating;
        }
        let timeout_armed = self
            .active
            .iter()
            .any(|r| r.notification.effective_timeout().is_some());
        if timeout_armed || !self.pending.is_empty() {
            Cadence::Waiting
        } else {
            Cadence::Idle
        }
    }

    /// Returns the displayed notifications in arrival order.
    pub fn active(&self) -> impl Iterator<Item = &Record> {
        self.active.iter()
    }

    /// Returns the number of displayed notifications, exiting ones included.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether any notification is displayed or queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty() || !self.pending.is_empty()
    }

    fn activate(&mut self, notification: Notification, now: Instant) {
        // An instant entry skips straight to Shown; there is nothing to
        // animate and the next tick would only do the same transition.
        let stage = if self.config.entry_effect().is_instant() {
            Stage::Shown
        } else {
            Stage::Entering
        };
        debug!("notification {:?} displayed", notification.id());
        self.active.push(Record {
            notification,
            stage,
            stage_started: now,
            shown_at: now,
            exit_from: 1.0,
        });
    }

    fn begin_exit(&mut self, index: usize, now: Instant) {
        let from = self.opacity(&self.active[index], now);
        let record = &mut self.active[index];
        trace!(
            "notification {:?} exiting from opacity {from:.2}",
            record.notification.id()
        );
        record.stage = Stage::Exiting;
        record.stage_started = now;
        record.exit_from = from;
    }

    /// Destroys records whose exit effect has completed and promotes queued
    /// notifications into the freed slots. A slot frees only here, never
    /// when an exit starts.
    fn reap(&mut self, now: Instant) {
        let exit_effect = self.config.exit_effect();
        let exit_duration = self.config.exit_duration();
        self.active.retain(|record| {
            let done = record.stage == Stage::Exiting
                && (exit_effect.is_instant()
                    || effect::progress(record.stage_started, exit_duration, now) >= 1.0);
            if done {
                debug!("notification {:?} destroyed", record.notification.id());
            }
            !done
        });

        while self.active.len() < self.config.max_visible() {
            let Some(notification) = self.pending.pop_front() else {
                break;
            };
            debug!("notification {:?} promoted from queue", notification.id());
            self.activate(notification, now);
        }
    }
}
