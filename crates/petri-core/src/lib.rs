//! `petri-core` — foundational types for the `petri` evolution simulator.
//!
//! This crate is a dependency of every other `petri-*` crate.  It
//! intentionally has no `petri-*` dependencies and only one external one
//! (`rand`).
//!
//! # What lives here
//!
//! | Module          | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | [`spatial`]     | `Coordinates`, `Direction`                        |
//! | [`instruction`] | `Instruction` — the five-op agent instruction set |
//! | [`rng`]         | `SimRng` — the one seedable random stream         |
//! | [`config`]      | `SimConfig` — the validated run configuration     |

pub mod config;
pub mod instruction;
pub mod rng;
pub mod spatial;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use instruction::Instruction;
pub use rng::SimRng;
pub use spatial::{Coordinates, Direction};
