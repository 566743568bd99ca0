//! Insertion sort
//!
//! One step per inserted element, highlighting where it landed and where it
//! started. The first element is trivially in place and emits nothing.

use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn insertion_sort(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j] < values[j - 1] {
            values.swap(j, j - 1);
            j -= 1;
        }
        ctx.step(values, Some(j), Some(i))?;
    }

    Ok(())
}
