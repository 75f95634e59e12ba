//! `petri-sim` — round-loop orchestrator for the petri evolution simulator.
//!
//! # The round sequence
//!
//! ```text
//! for round in 1..=config.rounds:
//!   ① Grid      — advance food ripening.
//!   ② Shuffle   — uniformly reorder the population (fairness for
//!                 contested food; execution stays sequential).
//!   ③ Agents    — each agent ages, pays the round cost, runs its
//!                 program, redraws its reproduction lot; winners
//!                 produce children into a side buffer.
//!   ④ Merge     — append the buffered children (they act next round).
//!   ⑤ Cull      — drop every agent whose energy went negative.
//!   ⑥ Report    — extinction ends the run; otherwise aggregate stats,
//!                 plus a full snapshot every `print_interval` rounds.
//! ```
//!
//! The run ends in one of two terminal states — `Completed` after the
//! configured round count, or `Extinct` the first round the population
//! empties — returned as a [`RunOutcome`] value.  Reporting goes through
//! the [`SimObserver`] trait; use [`NoopObserver`] when no output is
//! wanted.

pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, Simulation};
pub use stats::{RoundStats, Summary};
