//! Visualized random shuffle
//!
//! Exchanges every index with a uniformly random partner, one step per
//! exchange, through the same step/pace contract as the sorts.

use rand::Rng;

use crate::run::RunContext;
use crate::step::StepResult;
use crate::types::Value;

pub fn shuffle(values: &mut [Value], ctx: &mut RunContext<'_>) -> StepResult {
    let len = values.len();
    if len < 2 {
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    for i in 0..len {
        let other = rng.gen_range(0..len);
        values.swap(i, other);
        ctx.step(values, Some(i), Some(other))?;
    }

    Ok(())
}
