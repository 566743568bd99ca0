//! Step events and the sink boundary
//!
//! A `StepEvent` is one observable moment of a run: a borrowed snapshot of
//! the live sequence plus up to two highlighted indices. Events are created
//! fresh at each mutation point, handed to the `StepSink` synchronously, and
//! discarded - they own nothing.
//!
//! Algorithms stay unaware of timing and cancellation; they only see the
//! `StepResult` coming back from each paced step and propagate it outward
//! with `?`, which is how a stop request unwinds arbitrarily deep loops
//! without panicking.

use crate::types::Value;

/// One observable moment of an algorithm run
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    /// Snapshot of the live sequence at this moment
    pub values: &'a [Value],
    /// First highlighted index, if any
    pub index_a: Option<usize>,
    /// Second highlighted index, if any
    pub index_b: Option<usize>,
}

impl<'a> StepEvent<'a> {
    /// Create a step with up to two highlights
    pub fn new(values: &'a [Value], index_a: Option<usize>, index_b: Option<usize>) -> Self {
        Self {
            values,
            index_a,
            index_b,
        }
    }

    /// Create a step with no highlights (display-only frames)
    pub fn plain(values: &'a [Value]) -> Self {
        Self::new(values, None, None)
    }
}

/// Consumer of step events - the seam where rendering and audio plug in.
///
/// `on_step` is called exactly once per emitted step, in emission order.
/// The engine never skips, reorders, or coalesces events at this boundary.
pub trait StepSink {
    fn on_step(&mut self, event: &StepEvent<'_>);
}

/// Marker for a run cut short by an external stop request.
///
/// Not an error in the usual sense: carried as the `Err` arm of
/// [`StepResult`] purely so `?` threads the abort through every enclosing
/// algorithm loop back to the run driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Status returned by every paced step
pub type StepResult = Result<(), Cancelled>;
