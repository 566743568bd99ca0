//! Selection sort
//!
//! Emits on every candidate-minimum update (each is a state change of the
//! round's candidate) and again after the round's closing exchange.

use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn selection_sort(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    let len = values.len();
    if len < 2 {
        return Ok(());
    }

    for i in 0..len {
        let mut min_index = i;
        for j in i + 1..len {
            if values[j] < values[min_index] {
                min_index = j;
                ctx.step(values, Some(i), Some(min_index))?;
            }
        }
        values.swap(i, min_index);
        ctx.step(values, Some(i), Some(min_index))?;
    }

    Ok(())
}
