//! Run driver and per-run context
//!
//! A `RunContext` carries everything an algorithm needs to report progress:
//! the step sink and the playback clock, constructed fresh per run and
//! discarded at run end. Algorithms never touch ambient state.
//!
//! Run lifecycle: `Idle -> Running -> (Completed | Cancelled) -> Idle`.
//! On cancellation the sequence keeps whatever partial ordering it had at
//! the moment the stop was observed; there is no rollback, and callers must
//! not assume a cancelled run left the sequence sorted.

use std::time::Duration;

use crate::algorithms;
use crate::cancel::CancelToken;
use crate::clock::PlaybackClock;
use crate::step::{StepEvent, StepResult, StepSink};
use crate::types::{
    ascending_sequence, Algorithm, Value, DISPLAY_PAUSE, MAX_SEQUENCE_LEN, MIN_SEQUENCE_LEN,
    SHUFFLE_STEP_DELAY,
};

/// Per-run context handed to every algorithm
pub struct RunContext<'a> {
    sink: &'a mut dyn StepSink,
    clock: PlaybackClock,
    step_delay: Duration,
}

impl<'a> RunContext<'a> {
    pub fn new(sink: &'a mut dyn StepSink, clock: PlaybackClock, step_delay: Duration) -> Self {
        Self {
            sink,
            clock,
            step_delay,
        }
    }

    /// Nominal per-step delay for the current phase
    pub fn set_step_delay(&mut self, delay: Duration) {
        self.step_delay = delay;
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Emit one step, then pace.
    ///
    /// The sink sees the event before the wait starts, so every emitted
    /// step is observed even when the wait is cancelled.
    pub fn step(
        &mut self,
        values: &[Value],
        index_a: Option<usize>,
        index_b: Option<usize>,
    ) -> StepResult {
        self.sink.on_step(&StepEvent::new(values, index_a, index_b));
        self.clock.pace(self.step_delay)
    }

    /// Emit an un-highlighted frame and hold it for an unscaled duration
    pub fn show(&mut self, values: &[Value], hold: Duration) -> StepResult {
        self.sink.on_step(&StepEvent::plain(values));
        self.clock.pace_unscaled(hold)
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All steps were emitted; the sequence is sorted
    Completed,
    /// Stopped early; the sequence holds an unspecified partial ordering
    Cancelled,
}

/// Final state of a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub values: Vec<Value>,
    pub outcome: RunOutcome,
}

/// Execute one full visualization run.
///
/// Builds the ascending sequence `1..=length` (clamped to the supported
/// range), shows it, shuffles it through the same step/pace contract as
/// sorting, shows the shuffled state, runs the selected algorithm, and
/// holds the final state for one unscaled second.
///
/// The start action owns the token handoff: it passes a fresh (or freshly
/// `reset`) token so a stop requested any time after start is never lost.
/// The token is sampled only inside the clock's pacing waits.
pub fn run_visualization(
    algorithm: Algorithm,
    length: usize,
    sink: &mut dyn StepSink,
    cancel: CancelToken,
) -> RunReport {
    let length = length.clamp(MIN_SEQUENCE_LEN, MAX_SEQUENCE_LEN);

    let mut values = ascending_sequence(length);
    let clock = PlaybackClock::new(length, cancel);
    let mut ctx = RunContext::new(sink, clock, SHUFFLE_STEP_DELAY);

    log::info!("run started: {} over {} elements", algorithm, length);
    let outcome = match run_phases(algorithm, &mut values, &mut ctx, DISPLAY_PAUSE) {
        Ok(()) => RunOutcome::Completed,
        Err(_) => RunOutcome::Cancelled,
    };
    log::info!("run finished: {:?}", outcome);

    RunReport { values, outcome }
}

fn run_phases(
    algorithm: Algorithm,
    values: &mut [Value],
    ctx: &mut RunContext<'_>,
    pause: Duration,
) -> StepResult {
    ctx.show(values, pause)?;

    ctx.set_step_delay(SHUFFLE_STEP_DELAY);
    algorithms::shuffle(values, ctx)?;
    ctx.show(values, pause)?;

    ctx.set_step_delay(algorithm.step_delay());
    algorithm.execute(values, ctx)?;
    ctx.show(values, pause)?;

    Ok(())
}
