//! LSD radix sort, base 10
//!
//! Stable counting sort per digit from least to most significant, stopping
//! once the maximum element has no higher digits. Each digit pass is
//! visualized through its element-by-element copy-back.

use super::copy_back;
use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn radix_sort(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    let len = values.len();
    if len < 2 {
        return Ok(());
    }

    let mut scratch = vec![0; len];
    let max = values.iter().copied().max().unwrap_or(0);

    let mut exp: Value = 1;
    while max / exp > 0 {
        let mut counts = [0usize; 10];
        for &value in values.iter() {
            counts[((value / exp) % 10) as usize] += 1;
        }
        for digit in 1..10 {
            counts[digit] += counts[digit - 1];
        }
        // Walk backwards to keep the sort stable across passes
        for i in (0..len).rev() {
            let digit = ((values[i] / exp) % 10) as usize;
            counts[digit] -= 1;
            scratch[counts[digit]] = values[i];
        }

        copy_back(&scratch, values, ctx)?;
        ctx.step(values, None, None)?;

        exp = exp.saturating_mul(10);
    }

    Ok(())
}
