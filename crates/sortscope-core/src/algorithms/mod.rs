//! Instrumented sorting algorithms
//!
//! Each variant sorts the sequence in place and reports every observable
//! state change through the run context - one emitted step per mutation
//! point, never per idle inner-loop iteration. The algorithms know nothing
//! about timing, rendering, or cancellation beyond propagating the paced
//! step status with `?`.
//!
//! Sequences of length <= 1 are trivially sorted: zero mutations, zero
//! emitted steps.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod radix;
mod selection;
mod shuffle;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
pub use shuffle::shuffle;

use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::{Algorithm, Value};

impl Algorithm {
    /// Sort `values` in place, emitting steps through the context
    pub fn execute(self, values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
        match self {
            Algorithm::Bubble => bubble_sort(values, ctx),
            Algorithm::Insertion => insertion_sort(values, ctx),
            Algorithm::Selection => selection_sort(values, ctx),
            Algorithm::Heap => heap_sort(values, ctx),
            Algorithm::Merge => merge_sort(values, ctx),
            Algorithm::Radix => radix_sort(values, ctx),
        }
    }
}

/// Element-by-element visualized copy from a scratch buffer back into the
/// live sequence, one step per written element.
pub(crate) fn copy_back(
    src: &[Value],
    dst: &mut [Value],
    ctx: &mut RunContext<'_>,
) -> StepResult {
    for i in 0..src.len() {
        dst[i] = src[i];
        ctx.step(dst, Some(i), None)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use crate::clock::PlaybackClock;
    use crate::step::{Cancelled, StepEvent, StepSink};
    use crate::types::ascending_sequence;
    use std::time::Duration;

    /// Records every emitted step for inspection
    #[derive(Debug, Default)]
    struct RecordingSink {
        steps: Vec<(Vec<Value>, Option<usize>, Option<usize>)>,
    }

    impl StepSink for RecordingSink {
        fn on_step(&mut self, event: &StepEvent<'_>) {
            self.steps
                .push((event.values.to_vec(), event.index_a, event.index_b));
        }
    }

    fn run(algorithm: Algorithm, values: &mut [Value]) -> RecordingSink {
        run_with_token(algorithm, values, CancelToken::new())
            .expect("uncancelled run must complete")
    }

    fn run_with_token(
        algorithm: Algorithm,
        values: &mut [Value],
        token: CancelToken,
    ) -> Result<RecordingSink, RecordingSink> {
        let mut sink = RecordingSink::default();
        let clock = PlaybackClock::new(values.len(), token);
        let mut ctx = RunContext::new(&mut sink, clock, Duration::ZERO);
        match algorithm.execute(values, &mut ctx) {
            Ok(()) => Ok(sink),
            Err(Cancelled) => Err(sink),
        }
    }

    /// A few awkward permutations plus the already-sorted and reversed cases
    fn fixtures(len: usize) -> Vec<Vec<Value>> {
        let sorted = ascending_sequence(len);
        let mut reversed = sorted.clone();
        reversed.reverse();
        let mut interleaved: Vec<Value> = Vec::with_capacity(len);
        for i in 0..len {
            // 1, N, 2, N-1, ... interleave
            interleaved.push(if i % 2 == 0 {
                (i as Value / 2) + 1
            } else {
                len as Value - (i as Value / 2)
            });
        }
        vec![sorted, reversed, interleaved]
    }

    #[test]
    fn every_algorithm_sorts_every_fixture() {
        for algorithm in Algorithm::ALL {
            for len in [2, 3, 7, 16, 64, 100] {
                for mut values in fixtures(len) {
                    let original = values.clone();
                    run(algorithm, &mut values);
                    assert_eq!(
                        values,
                        ascending_sequence(len),
                        "{algorithm:?} failed on {original:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn trivial_sequences_emit_no_steps() {
        for algorithm in Algorithm::ALL {
            let sink = run(algorithm, &mut []);
            assert!(sink.steps.is_empty(), "{algorithm:?} stepped on empty");

            let sink = run(algorithm, &mut [1]);
            assert!(sink.steps.is_empty(), "{algorithm:?} stepped on singleton");
        }
    }

    #[test]
    fn insertion_emits_one_step_per_inserted_element() {
        let mut values = [3, 1, 2];
        let sink = run(Algorithm::Insertion, &mut values);
        assert_eq!(sink.steps.len(), 2);
    }

    #[test]
    fn insertion_end_to_end_scenario() {
        let mut values = [5, 3, 4, 1, 2];
        let sink = run(Algorithm::Insertion, &mut values);

        assert_eq!(values, [1, 2, 3, 4, 5]);
        assert_eq!(sink.steps.len(), 4);

        // Final insertion slots 2 in at index 1, pushing 5 to the end
        let (snapshot, index_a, index_b) = sink.steps.last().unwrap();
        assert_eq!(snapshot, &vec![1, 2, 3, 4, 5]);
        assert_eq!(*index_a, Some(1));
        assert_eq!(*index_b, Some(4));
        assert_eq!(snapshot[index_b.unwrap()], 5);
    }

    #[test]
    fn radix_end_to_end_scenario() {
        let mut values = [170, 45, 75, 90, 802, 24, 2, 66];
        let sink = run(Algorithm::Radix, &mut values);

        assert_eq!(values, [2, 24, 45, 66, 75, 90, 170, 802]);

        // One un-highlighted frame closes each digit pass; 802 has 3 digits
        let passes = sink
            .steps
            .iter()
            .filter(|(_, a, b)| a.is_none() && b.is_none())
            .count();
        assert_eq!(passes, 3);
    }

    #[test]
    fn bubble_emits_one_step_per_pass() {
        let mut values = [4, 3, 2, 1];
        let sink = run(Algorithm::Bubble, &mut values);
        assert_eq!(values, [1, 2, 3, 4]);
        assert_eq!(sink.steps.len(), 4);
    }

    #[test]
    fn selection_emits_on_minimum_updates_and_exchanges() {
        // Reversed input: every inner comparison updates the minimum
        let mut values = [3, 2, 1];
        let sink = run(Algorithm::Selection, &mut values);
        assert_eq!(values, [1, 2, 3]);
        // Round 0: two minimum updates + exchange; rounds 1 and 2 find the
        // array already ordered and emit only their exchange step
        assert_eq!(sink.steps.len(), 5);
    }

    #[test]
    fn merge_visualizes_scratch_writes_and_copy_back() {
        let mut values = [2, 1];
        let sink = run(Algorithm::Merge, &mut values);
        assert_eq!(values, [1, 2]);
        // One pass: 2 scratch writes, 2 copy-back writes, 1 pass frame
        assert_eq!(sink.steps.len(), 5);
    }

    #[test]
    fn steps_snapshot_the_live_sequence() {
        let mut values = [2, 1, 4, 3];
        let sink = run(Algorithm::Heap, &mut values);
        for (snapshot, index_a, index_b) in &sink.steps {
            assert_eq!(snapshot.len(), 4);
            // Highlights always point into the snapshot
            for index in [index_a, index_b].into_iter().flatten() {
                assert!(*index < snapshot.len());
            }
            // Every snapshot is a permutation of the input
            let mut check = snapshot.clone();
            check.sort_unstable();
            assert_eq!(check, ascending_sequence(4));
        }
    }

    #[test]
    fn cancellation_halts_after_the_first_emitted_step() {
        let token = CancelToken::new();
        token.request();

        let mut values = [5, 4, 3, 2, 1];
        let sink = run_with_token(Algorithm::Bubble, &mut values, token)
            .expect_err("pre-cancelled run must abort");

        // The step is emitted before its pacing wait observes the stop
        assert_eq!(sink.steps.len(), 1);
        let mut check = values.to_vec();
        check.sort_unstable();
        assert_eq!(check, ascending_sequence(5));
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut values = ascending_sequence(32);
        let mut sink = RecordingSink::default();
        let clock = PlaybackClock::new(values.len(), CancelToken::new());
        let mut ctx = RunContext::new(&mut sink, clock, Duration::ZERO);

        shuffle(&mut values, &mut ctx).unwrap();

        assert_eq!(sink.steps.len(), 32, "one step per exchange");
        let mut check = values.clone();
        check.sort_unstable();
        assert_eq!(check, ascending_sequence(32));
    }
}
