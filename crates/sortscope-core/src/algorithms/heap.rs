//! In-place heap sort over index arithmetic
//!
//! Builds a min-heap by repeated sift-up, extracts minima to the shrinking
//! tail by sift-down, then reverses the descending result. Every exchange
//! in all three phases emits a step.

use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn heap_sort(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    let len = values.len();
    if len < 2 {
        return Ok(());
    }

    // Construction: sift each element up through its ancestors
    for i in 1..len {
        let mut child = i;
        while child > 0 {
            let parent = (child - 1) / 2;
            if values[child] >= values[parent] {
                break;
            }
            values.swap(child, parent);
            ctx.step(values, Some(child), Some(parent))?;
            child = parent;
        }
    }

    // Extraction: move the minimum to the tail, sift the new root down
    // within the shrunken heap
    for end in (1..len).rev() {
        values.swap(0, end);
        ctx.step(values, Some(0), Some(end))?;

        let mut parent = 0;
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;
            if left >= end {
                break;
            }

            let mut smallest = parent;
            if values[left] < values[smallest] {
                smallest = left;
            }
            if right < end && values[right] < values[smallest] {
                smallest = right;
            }
            if smallest == parent {
                break;
            }

            values.swap(parent, smallest);
            ctx.step(values, Some(parent), Some(smallest))?;
            parent = smallest;
        }
    }

    // Min-heap extraction leaves the sequence descending; reverse it
    for i in 0..len / 2 {
        values.swap(i, len - i - 1);
        ctx.step(values, Some(i), Some(len - i - 1))?;
    }

    Ok(())
}
