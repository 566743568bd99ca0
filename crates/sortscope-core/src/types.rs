//! Common types for Sortscope
//!
//! This module contains the fundamental types shared by the playback engine:
//! the sequence element type, length bounds, and the closed set of supported
//! algorithms with their nominal pacing delays.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Element type for sequences under visualization.
///
/// Sequences are permutations of `1..=N`, so values are always positive;
/// radix sort and pitch mapping rely on this.
pub type Value = u32;

/// Smallest sequence a run will accept
pub const MIN_SEQUENCE_LEN: usize = 2;

/// Largest sequence a run will accept
pub const MAX_SEQUENCE_LEN: usize = 1024;

/// Reference length for speed scaling: a run at this length is paced at
/// exactly its nominal per-step delay, shorter runs proportionally slower
/// per step so total wall-clock time stays roughly constant.
pub const REFERENCE_LEN: usize = 1024;

/// Nominal pacing delay for shuffle steps
pub const SHUFFLE_STEP_DELAY: Duration = Duration::from_millis(1);

/// Unscaled hold for the initial, post-shuffle, and final displays
pub const DISPLAY_PAUSE: Duration = Duration::from_secs(1);

/// The supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Heap,
    Merge,
    Radix,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Radix,
    ];

    /// Human-readable name, as shown in the algorithm picker
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Radix => "Radix Sort",
        }
    }

    /// Nominal per-step pacing delay
    ///
    /// Algorithms that emit few steps per run (bubble, insertion) get long
    /// delays; step-dense algorithms get short ones so runs stay watchable.
    pub fn step_delay(&self) -> Duration {
        match self {
            Algorithm::Bubble | Algorithm::Insertion => Duration::from_millis(10),
            Algorithm::Selection => Duration::from_micros(25),
            Algorithm::Heap | Algorithm::Merge | Algorithm::Radix => Duration::from_micros(500),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the initial ascending sequence `1..=len`
pub fn ascending_sequence(len: usize) -> Vec<Value> {
    (1..=len as Value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_sequence_is_one_to_n() {
        assert_eq!(ascending_sequence(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(ascending_sequence(1), vec![1]);
        assert!(ascending_sequence(0).is_empty());
    }

    #[test]
    fn all_algorithms_have_distinct_names() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
