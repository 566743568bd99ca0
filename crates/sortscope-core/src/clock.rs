//! Playback pacing
//!
//! The clock converts a nominal per-step delay and the run's speed ratio
//! into an actual wait, polling the cancel token at a fine grain so a stop
//! request is honored within one polling interval rather than only at step
//! boundaries.

use std::thread;
use std::time::{Duration, Instant};

use crate::cancel::CancelToken;
use crate::step::{Cancelled, StepResult};
use crate::types::{MIN_SEQUENCE_LEN, REFERENCE_LEN};

/// Granularity of cancellation polling during a wait
pub const POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Speed ratio for a sequence length.
///
/// Linear in `len` and capped at 1.0: a full-length (1024) run is paced at
/// exactly the nominal per-step delay, smaller runs proportionally slower
/// per step, keeping total run time roughly independent of array size.
pub fn speed_ratio_for(len: usize) -> f64 {
    let len = len.clamp(MIN_SEQUENCE_LEN, REFERENCE_LEN);
    len as f64 / REFERENCE_LEN as f64
}

/// Per-run pacing state.
///
/// The speed ratio is computed once at run start and read-only afterwards;
/// the cancel token is the only field touched from outside the run.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    speed_ratio: f64,
    poll_interval: Duration,
    cancel: CancelToken,
}

impl PlaybackClock {
    pub fn new(sequence_len: usize, cancel: CancelToken) -> Self {
        Self {
            speed_ratio: speed_ratio_for(sequence_len),
            poll_interval: POLL_INTERVAL,
            cancel,
        }
    }

    pub fn speed_ratio(&self) -> f64 {
        self.speed_ratio
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Block for `nominal / speed_ratio`, polling for cancellation.
    ///
    /// Returns `Err(Cancelled)` as soon as a stop request is observed; the
    /// remainder of the wait is abandoned.
    pub fn pace(&self, nominal: Duration) -> StepResult {
        self.wait(nominal.div_f64(self.speed_ratio))
    }

    /// Block for `hold` without speed scaling.
    ///
    /// Used for the fixed display pauses so pacing does not shrink them on
    /// large arrays.
    pub fn pace_unscaled(&self, hold: Duration) -> StepResult {
        self.wait(hold)
    }

    fn wait(&self, total: Duration) -> StepResult {
        let deadline = Instant::now() + total;
        loop {
            if self.cancel.is_requested() {
                return Err(Cancelled);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep((deadline - now).min(self.poll_interval));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_ratio_is_linear_below_reference() {
        assert_eq!(speed_ratio_for(1024), 1.0);
        assert_eq!(speed_ratio_for(512), 0.5);
        assert_eq!(speed_ratio_for(256), 0.25);
        // Doubling length halves the effective per-step delay
        assert_eq!(speed_ratio_for(512) * 2.0, speed_ratio_for(1024));
    }

    #[test]
    fn speed_ratio_is_clamped_at_both_ends() {
        assert_eq!(speed_ratio_for(2048), 1.0);
        assert_eq!(speed_ratio_for(0), speed_ratio_for(MIN_SEQUENCE_LEN));
        assert!(speed_ratio_for(0) > 0.0);
    }

    #[test]
    fn scaled_wait_stretches_small_sequences() {
        // len 512 -> ratio 0.5 -> a 1ms nominal delay waits ~2ms
        let clock = PlaybackClock::new(512, CancelToken::new());
        let start = Instant::now();
        clock.pace(Duration::from_millis(1)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn zero_wait_completes_immediately() {
        let clock = PlaybackClock::new(1024, CancelToken::new());
        assert_eq!(clock.pace(Duration::ZERO), Ok(()));
        assert_eq!(clock.pace_unscaled(Duration::ZERO), Ok(()));
    }

    #[test]
    fn cancellation_is_observed_before_sleeping() {
        let token = CancelToken::new();
        token.request();
        let clock = PlaybackClock::new(1024, token);
        assert_eq!(clock.pace_unscaled(Duration::from_secs(60)), Err(Cancelled));
    }

    #[test]
    fn cancellation_interrupts_a_long_wait() {
        let token = CancelToken::new();
        let clock = PlaybackClock::new(1024, token.clone());

        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            token.request();
        });

        let start = Instant::now();
        let result = clock.pace_unscaled(Duration::from_secs(60));
        stopper.join().unwrap();

        assert_eq!(result, Err(Cancelled));
        // Honored within a handful of poll intervals, not after the minute
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
