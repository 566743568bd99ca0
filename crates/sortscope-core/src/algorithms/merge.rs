//! Bottom-up merge sort with a scratch buffer
//!
//! Each merge pass writes into scratch (one step per written element,
//! highlighting the write position), then copies the pass result back into
//! the live sequence element by element, closing with one un-highlighted
//! frame per pass.

use super::copy_back;
use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn merge_sort(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    let len = values.len();
    if len < 2 {
        return Ok(());
    }

    let mut scratch = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let middle = (start + width).min(len);
            let end = (start + 2 * width).min(len);

            let mut left = start;
            let mut right = middle;
            for j in start..end {
                if left < middle && (right >= end || values[left] < values[right]) {
                    scratch[j] = values[left];
                    left += 1;
                } else {
                    scratch[j] = values[right];
                    right += 1;
                }
                ctx.step(values, Some(j), None)?;
            }

            start = end;
        }

        copy_back(&scratch, values, ctx)?;
        ctx.step(values, None, None)?;
        width *= 2;
    }

    Ok(())
}
