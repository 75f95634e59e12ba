//! `petri-agent` — the programmable entities living on the board.
//!
//! # What lives here
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`params`]      | `AgentParams` — lineage-invariant config constants  |
//! | [`agent`]       | `Agent` — per-entity state, round update, multiply  |
//! | [`interpreter`] | instruction execution against the grid              |
//! | [`mutation`]    | copy-then-edit program mutation for offspring       |
//!
//! An agent owns its program outright; reproduction clones and mutates it,
//! never aliasing the parent's.  The lineage-invariant constants are shared
//! through one `Arc<AgentParams>` handed down from parent to child.

pub mod agent;
mod interpreter;
pub mod mutation;
pub mod params;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use params::AgentParams;
