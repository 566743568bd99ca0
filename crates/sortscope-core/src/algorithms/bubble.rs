//! Bubble sort
//!
//! Steps are emitted per completed inner pass rather than per comparison,
//! so the visualization shows the sorted suffix growing from the right.

use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn bubble_sort(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    let len = values.len();
    if len < 2 {
        return Ok(());
    }

    for pass in 0..len {
        let mut last_swap = 0;
        for j in 0..len - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                last_swap = j;
            }
        }
        // Highlight the pass boundary and the last exchanged position
        ctx.step(values, Some(len - pass - 1), Some(last_swap))?;
    }

    Ok(())
}
