//! The timer state machine.
//!
//! All timer state lives in [`TimerController`]; the view layer only calls
//! its operations and reads its derived values. The controller talks to two
//! capabilities: a [`Clock`] that delivers one tick per second while
//! running, and an [`AlertSink`] that sounds at every phase transition.

use crate::alert::AlertSink;
use crate::clock::{Clock, TickHandle};
use crate::time_format::format_minutes_seconds;

const MINUTE: u32 = 60;
const MAX_LEN_SECS: u32 = 60 * 60;
pub const DEFAULT_SESSION_SECS: u32 = 60 * 25;
pub const DEFAULT_BREAK_SECS: u32 = 60 * 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Session,
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Break => "Break",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

pub struct TimerController<C: Clock, A: AlertSink> {
    clock: C,
    alert: A,
    phase: Phase,
    session_len: u32,
    break_len: u32,
    remaining: u32,
    // At most one live subscription; presence means Running.
    tick_handle: Option<C::Handle>,
}

impl<C: Clock, A: AlertSink> TimerController<C, A> {
    pub fn new(clock: C, alert: A) -> Self {
        Self::with_lengths(clock, alert, DEFAULT_SESSION_SECS, DEFAULT_BREAK_SECS)
    }

    /// Start from custom phase lengths, e.g. CLI overrides. Out-of-bound or
    /// sub-minute values fall back to the defaults.
    pub fn with_lengths(clock: C, alert: A, session_len: u32, break_len: u32) -> Self {
        let session_len = if whole_minutes_in_bounds(session_len) {
            session_len
        } else {
            DEFAULT_SESSION_SECS
        };
        let break_len = if whole_minutes_in_bounds(break_len) {
            break_len
        } else {
            DEFAULT_BREAK_SECS
        };

        Self {
            clock,
            alert,
            phase: Phase::Session,
            session_len,
            break_len,
            remaining: session_len,
            tick_handle: None,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Move the session length by whole minutes, silently rejecting any
    /// result outside `(0, 60]` minutes. An applied change always reseeds
    /// `remaining` with the new length, even mid-break or mid-run; that
    /// quirk is kept from the original product behavior.
    pub fn adjust_session(&mut self, delta_minutes: i32) {
        let new = self.session_len as i64 + delta_minutes as i64 * MINUTE as i64;
        if in_bounds(new) {
            self.session_len = new as u32;
            self.remaining = self.session_len;
            self.settle_zero_crossing();
        }
    }

    /// Move the break length by whole minutes, same bounds as the session
    /// length. Never touches `remaining`.
    pub fn adjust_break(&mut self, delta_minutes: i32) {
        let new = self.break_len as i64 + delta_minutes as i64 * MINUTE as i64;
        if in_bounds(new) {
            self.break_len = new as u32;
        }
    }

    /// Start the countdown if stopped, stop it if running.
    pub fn toggle_running(&mut self) {
        match self.tick_handle.take() {
            Some(handle) => handle.cancel(),
            None => self.tick_handle = Some(self.clock.schedule()),
        }
    }

    /// One second has elapsed. Ticks arriving after the subscription was
    /// cancelled are dropped, so a stale tick can never decrement.
    pub fn tick(&mut self) {
        if self.tick_handle.is_none() {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.settle_zero_crossing();
    }

    /// Back to the initial state: stopped, Session phase, default lengths.
    /// Also silences any alert still playing.
    pub fn reset(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            handle.cancel();
        }
        self.alert.reset();
        self.phase = Phase::Session;
        self.session_len = DEFAULT_SESSION_SECS;
        self.break_len = DEFAULT_BREAK_SECS;
        self.remaining = DEFAULT_SESSION_SECS;
    }

    /// Runs after every change to `remaining`, whatever caused it. Phase
    /// lengths are always positive, so a single flip settles the loop.
    fn settle_zero_crossing(&mut self) {
        while self.remaining == 0 {
            self.alert.play();
            match self.phase {
                Phase::Session => {
                    self.phase = Phase::Break;
                    self.remaining = self.break_len;
                }
                Phase::Break => {
                    self.phase = Phase::Session;
                    self.remaining = self.session_len;
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn run_state(&self) -> RunState {
        if self.tick_handle.is_some() {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn start_stop_label(&self) -> &'static str {
        if self.is_running() {
            "Stop"
        } else {
            "Start"
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_label(&self) -> &'static str {
        self.phase.label()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn formatted_remaining(&self) -> String {
        format_minutes_seconds(self.remaining)
    }

    pub fn session_minutes(&self) -> u32 {
        self.session_len / MINUTE
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_len / MINUTE
    }

    /// Full length of the phase currently counting down.
    pub fn active_len_secs(&self) -> u32 {
        match self.phase {
            Phase::Session => self.session_len,
            Phase::Break => self.break_len,
        }
    }
}

fn in_bounds(len_secs: i64) -> bool {
    len_secs > 0 && len_secs <= MAX_LEN_SECS as i64
}

fn whole_minutes_in_bounds(len_secs: u32) -> bool {
    in_bounds(len_secs as i64) && len_secs % MINUTE == 0
}

// ======================================================================
// Tests
// ======================================================================
