//! Stochastic program mutation for offspring.

use petri_core::{Instruction, SimRng};

use crate::params::AgentParams;

/// Produce a mutated copy of `parent` — the parent's sequence is never
/// aliased or modified.
///
/// Three independent Bernoulli trials run in fixed order, each against
/// its own configured probability:
///
/// 1. drop the last instruction (skipped on an empty program),
/// 2. append one uniform draw from the instruction pool,
/// 3. overwrite a uniform position with a uniform pool draw (skipped on
///    an empty program).
///
/// All three may fire in one call; steps 2 and 3 observe step 1's result.
/// Every trial consumes exactly one Bernoulli draw whether or not its
/// length guard passes, keeping seeded runs reproducible.
pub fn mutated_copy(
    parent: &[Instruction],
    params: &AgentParams,
    rng: &mut SimRng,
) -> Vec<Instruction> {
    let pool = &params.instruction_set;
    let mut program = parent.to_vec();

    if rng.gen_bool(params.removal_odds) && !program.is_empty() {
        program.pop();
    }

    if rng.gen_bool(params.addition_odds) {
        let drawn = pool[rng.gen_range(0..pool.len())];
        program.push(drawn);
    }

    if rng.gen_bool(params.change_odds) && !program.is_empty() {
        let position = rng.gen_range(0..program.len());
        program[position] = pool[rng.gen_range(0..pool.len())];
    }

    program
}
