//! Capture-convert-replace workflow.
//!
//! One run walks `Idle → Snapshotting → Capturing → Converting → Replacing → Restoring → Idle`.
//! A failed capture or any faulting step diverts to `Aborted` before `Restoring`. The
//! clipboard snapshot is held by a [`ClipboardGuard`], so restoration happens on every path.

use std::{
    panic::{self, AssertUnwindSafe},
    thread,
    time::Duration,
};

use akshara_shift_core::{EncodingTag, ProfileSet};

use super::{
    busy::BusyFlag,
    clipboard::{Clipboard, ClipboardGuard},
    input::InputSimulator,
};
use crate::{
    domain::outcome::{ConversionError, ConversionOutcome, Replacement, SkipReason},
    utils::tracing::DIAGNOSTICS_TARGET,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConversionState {
    Idle,
    Snapshotting,
    Capturing,
    Converting,
    Replacing,
    Restoring,
    Aborted,
}

/// Delays and retry bound of the workflow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timings {
    /// How many times the clipboard is polled for the copied selection.
    pub capture_attempts: u32,
    /// Sleep before each poll.
    pub capture_poll: Duration,
    /// Sleep after clearing the clipboard, before the synthetic copy.
    pub clear_settle: Duration,
    /// Sleep after the synthetic paste, before the clipboard is restored.
    pub paste_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            capture_attempts: 3,
            capture_poll: Duration::from_millis(100),
            clear_settle: Duration::from_millis(50),
            paste_settle: Duration::from_millis(100),
        }
    }
}

pub struct Orchestrator<C, I> {
    clipboard: C,
    input: I,
    profiles: ProfileSet,
    timings: Timings,
    busy: BusyFlag,
    state: ConversionState,
}

impl<C: Clipboard, I: InputSimulator> Orchestrator<C, I> {
    pub fn new(clipboard: C, input: I, profiles: ProfileSet, timings: Timings) -> Self {
        Self {
            clipboard,
            input,
            profiles,
            timings,
            busy: BusyFlag::new(),
            state: ConversionState::Idle,
        }
    }

    /// Flag shared with request producers; set while a run is in flight.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn state(&self) -> ConversionState {
        self.state
    }

    /// Runs one conversion and reports whether converted text was pasted.
    pub fn run_conversion(&mut self, encoding: EncodingTag) -> bool {
        self.run(encoding).is_applied()
    }

    /// Runs one conversion to completion or failure.
    ///
    /// Never panics and never leaves the clipboard without an attempt to restore it.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn run(&mut self, encoding: EncodingTag) -> ConversionOutcome {
        let Some(_in_flight) = self.busy.try_acquire() else {
            tracing::trace!(reason = SkipReason::Busy.as_str(), "conversion skipped");
            return ConversionOutcome::Skipped(SkipReason::Busy);
        };

        let outcome = self.run_guarded(encoding);
        set_state(&mut self.state, ConversionState::Idle);

        match &outcome {
            ConversionOutcome::Applied(r) => tracing::info!(
                target: DIAGNOSTICS_TARGET,
                encoding = %r.encoding,
                captured = %r.captured,
                converted = %r.converted,
                "conversion applied"
            ),
            ConversionOutcome::Failed(e) => tracing::info!(
                target: DIAGNOSTICS_TARGET,
                encoding = %encoding,
                error = %e,
                "conversion failed"
            ),
            ConversionOutcome::Skipped(reason) => {
                tracing::trace!(reason = reason.as_str(), "conversion skipped");
            }
        }

        outcome
    }

    fn run_guarded(&mut self, encoding: EncodingTag) -> ConversionOutcome {
        let Self {
            clipboard,
            input,
            profiles,
            timings,
            state,
            ..
        } = self;

        set_state(state, ConversionState::Snapshotting);
        let mut guard = ClipboardGuard::acquire(clipboard);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            Pipeline {
                guard: &mut guard,
                input: &mut *input,
                profiles: &*profiles,
                timings: *timings,
                state: &mut *state,
            }
            .execute(encoding)
        }))
        .unwrap_or_else(|_| {
            tracing::warn!("conversion pipeline panicked");
            Err(ConversionError::Fault)
        });

        if result.is_err() {
            set_state(state, ConversionState::Aborted);
        }

        set_state(state, ConversionState::Restoring);
        drop(guard);

        match result {
            Ok(replacement) => ConversionOutcome::Applied(replacement),
            Err(e) => ConversionOutcome::Failed(e),
        }
    }
}

/// Borrowed parts of the orchestrator for the duration of one guarded run.
struct Pipeline<'g, 'c, C: Clipboard, I: InputSimulator> {
    guard: &'g mut ClipboardGuard<'c, C>,
    input: &'g mut I,
    profiles: &'g ProfileSet,
    timings: Timings,
    state: &'g mut ConversionState,
}

impl<C: Clipboard, I: InputSimulator> Pipeline<'_, '_, C, I> {
    fn execute(mut self, encoding: EncodingTag) -> Result<Replacement, ConversionError> {
        set_state(self.state, ConversionState::Capturing);
        let captured = self.capture()?;

        set_state(self.state, ConversionState::Converting);
        let stats = self.profiles.stats(&captured, encoding);
        tracing::debug!(
            target: DIAGNOSTICS_TARGET,
            input_len = stats.input_len,
            output_len = stats.output_len,
            malayalam_chars = stats.malayalam_chars,
            "selection converted"
        );

        set_state(self.state, ConversionState::Replacing);
        self.replace(&stats.output)?;

        Ok(Replacement {
            encoding,
            captured,
            converted: stats.output,
        })
    }

    /// Clears the clipboard, sends copy, then polls for the selection with a bounded retry.
    fn capture(&mut self) -> Result<String, ConversionError> {
        self.guard.clear()?;
        sleep(self.timings.clear_settle);

        self.input.simulate_copy()?;

        let attempts = self.timings.capture_attempts;
        for attempt in 1..=attempts {
            sleep(self.timings.capture_poll);
            match self.guard.text() {
                Some(text) if !text.is_empty() => {
                    tracing::trace!(attempt, len = text.chars().count(), "selection captured");
                    return Ok(text);
                }
                Some(_) => tracing::trace!(attempt, "clipboard still empty"),
                None => tracing::trace!(attempt, "clipboard unreadable"),
            }
        }

        Err(ConversionError::CaptureEmpty { attempts })
    }

    fn replace(&mut self, converted: &str) -> Result<(), ConversionError> {
        self.guard.set_text(converted)?;
        self.input.simulate_paste()?;
        sleep(self.timings.paste_settle);
        Ok(())
    }
}

fn set_state(state: &mut ConversionState, next: ConversionState) {
    tracing::trace!(from = ?*state, to = ?next, "state transition");
    *state = next;
}

fn sleep(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}
