//! Hero banner reveal sequencing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero runs a fixed five-second choreography on mount (first name, then
//! the garbled last name, then a flip that corrects it) alongside a perpetual
//! status rotation. Everything is a function of elapsed time since
//! activation; the component only supplies a clock, a sleep and a cancel
//! signal to `drive_reveal`.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use std::future::Future;
use std::pin::pin;

use futures::channel::oneshot;
use futures::future::{Either, select};

use crate::data::profile::{LAST_NAME, LAST_NAME_REVERSED};
use crate::util::timeline::{Cadence, Cue, Timeline};

pub const FIRST_NAME_AT_MS: u64 = 800;
pub const LAST_NAME_AT_MS: u64 = 1_800;
pub const FLIP_START_AT_MS: u64 = LAST_NAME_AT_MS + 2_000;
pub const FLIP_END_AT_MS: u64 = FLIP_START_AT_MS + 1_200;
pub const STATUS_PERIOD_MS: u64 = 5_000;

/// Flags consumed by the hero component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroState {
    pub first_name_visible: bool,
    pub last_name_visible: bool,
    pub last_name_reversed: bool,
    pub is_flipping: bool,
    pub status_index: usize,
}

impl Default for HeroState {
    fn default() -> Self {
        Self {
            first_name_visible: false,
            last_name_visible: false,
            last_name_reversed: true,
            is_flipping: false,
            status_index: 0,
        }
    }
}

impl HeroState {
    /// Last name as currently displayed.
    #[must_use]
    pub fn displayed_last_name(&self) -> &'static str {
        if self.last_name_reversed { LAST_NAME_REVERSED } else { LAST_NAME }
    }

    fn apply(&mut self, cue: HeroCue) {
        match cue {
            HeroCue::ShowFirstName => self.first_name_visible = true,
            HeroCue::ShowLastName => self.last_name_visible = true,
            HeroCue::StartFlip => self.is_flipping = true,
            HeroCue::FinishFlip => {
                self.last_name_reversed = false;
                self.is_flipping = false;
            }
        }
    }
}

/// One-shot steps of the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroCue {
    ShowFirstName,
    ShowLastName,
    StartFlip,
    /// Corrects the last name and ends the flip in one update.
    FinishFlip,
}

/// The reveal schedule, offsets from activation.
#[must_use]
pub fn reveal_cues() -> Vec<Cue<HeroCue>> {
    vec![
        Cue::new(FIRST_NAME_AT_MS, HeroCue::ShowFirstName),
        Cue::new(LAST_NAME_AT_MS, HeroCue::ShowLastName),
        Cue::new(FLIP_START_AT_MS, HeroCue::StartFlip),
        Cue::new(FLIP_END_AT_MS, HeroCue::FinishFlip),
    ]
}

/// Drives `HeroState` from elapsed time since activation.
#[derive(Clone, Debug)]
pub struct HeroSequencer {
    state: HeroState,
    timeline: Timeline<HeroCue>,
    status_cadence: Option<Cadence>,
    status_len: usize,
    active: bool,
}

impl HeroSequencer {
    /// Build an inactive sequencer rotating over `status_len` phrases.
    #[must_use]
    pub fn new(status_len: usize) -> Self {
        Self {
            state: HeroState::default(),
            timeline: Timeline::new(Vec::new()),
            status_cadence: None,
            status_len,
            active: false,
        }
    }

    /// Reset every flag and schedule the full timeline from t0.
    pub fn activate(&mut self) {
        self.state = HeroState::default();
        self.timeline = Timeline::new(reveal_cues());
        self.status_cadence = (self.status_len > 0).then(|| Cadence::new(STATUS_PERIOD_MS));
        self.active = true;
    }

    /// Cancel everything pending. No state change is produced afterwards.
    pub fn deactivate(&mut self) {
        self.timeline.clear();
        self.status_cadence = None;
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn state(&self) -> &HeroState {
        &self.state
    }

    /// Apply every cue and status tick due by `elapsed_ms`.
    ///
    /// Returns the new state when anything changed. All changes due at the
    /// same instant land in a single returned state.
    pub fn advance_to(&mut self, elapsed_ms: u64) -> Option<HeroState> {
        if !self.active {
            return None;
        }
        let before = self.state.clone();

        for cue in self.timeline.due(elapsed_ms) {
            self.state.apply(cue);
        }
        if let Some(cadence) = self.status_cadence.as_mut() {
            let ticks = cadence.ticks_until(elapsed_ms);
            if ticks > 0 {
                let step = usize::try_from(ticks % self.status_len as u64).unwrap_or(0);
                self.state.status_index = (self.state.status_index + step) % self.status_len;
            }
        }

        (self.state != before).then(|| self.state.clone())
    }

    /// Earliest pending offset, cue or status tick.
    #[must_use]
    pub fn next_wake_ms(&self) -> Option<u64> {
        if !self.active {
            return None;
        }
        let cadence = self.status_cadence.as_ref().map(Cadence::next_at_ms);
        match (self.timeline.next_at_ms(), cadence) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Run `sequencer` from activation until `cancel` fires or is dropped.
///
/// Each sleep is raced against `cancel`, so cancelling drops the pending
/// sleep at once instead of waiting for it to elapse. Nothing is published
/// after cancellation.
pub async fn drive_reveal<Sl, F>(
    sequencer: &mut HeroSequencer,
    now_ms: impl Fn() -> u64,
    sleep: Sl,
    mut cancel: oneshot::Receiver<()>,
    mut publish: impl FnMut(HeroState),
) where
    Sl: Fn(u64) -> F,
    F: Future<Output = ()>,
{
    sequencer.activate();
    let started_ms = now_ms();

    while let Some(wake_ms) = sequencer.next_wake_ms() {
        let wait_ms = wake_ms.saturating_sub(now_ms().saturating_sub(started_ms));
        let woke = matches!(select(pin!(sleep(wait_ms)), &mut cancel).await, Either::Left(_));
        // A cancel that raced the timer still wins.
        if !woke || !matches!(cancel.try_recv(), Ok(None)) {
            sequencer.deactivate();
            return;
        }
        if let Some(next) = sequencer.advance_to(now_ms().saturating_sub(started_ms)) {
            publish(next);
        }
    }
}
