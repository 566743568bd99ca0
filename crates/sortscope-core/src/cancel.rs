//! Cooperative run cancellation
//!
//! The token is the only state shared between a run and the outside world
//! for control purposes: the stop action writes it at most once per run,
//! the playback clock polls it during every pacing wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for the active run.
///
/// Clones observe the same flag. Reset at the start of every run, set at
/// most once per run from outside, never reset mid-run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    requested: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the flag for a fresh run
    pub fn reset(&self) {
        self.requested.store(false, Ordering::Relaxed);
    }

    /// Request that the active run stop at its next poll point
    pub fn request(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!token.is_requested());

        other.request();
        assert!(token.is_requested());

        token.reset();
        assert!(!other.is_requested());
    }
}
