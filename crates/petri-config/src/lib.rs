//! `petri-config` — parameter-file loading and validation.
//!
//! # Parameter-file format
//!
//! One whitespace-separated `name value` pair per line; blank lines are
//! ignored; every parameter appears at most once:
//!
//! ```text
//! rounds                 500
//! initial_agents         20
//! initial_energy         50
//! food_energy            10
//! food_ripening_time     4
//! round_cost             1
//! reproduction_limit     30
//! print_interval         50
//! reproduction_odds      0.3
//! parent_energy_fraction 0.5
//! removal_odds           0.05
//! addition_odds          0.05
//! change_odds            0.1
//! initial_program        iiwj
//! instruction_set        ijwlp
//! seed                   42
//! ```
//!
//! Validation is driven by the [`schema::SCHEMA`] table — a stateless
//! mapping of parameter name to kind and range; the loader owns no other
//! knowledge of the parameter list.  Everything here is fatal: the
//! caller reports the error to the user and terminates; nothing is
//! recoverable or retried mid-run.
//!
//! The output is a fully validated [`petri_core::SimConfig`] — the core
//! never re-checks any of it.

pub mod error;
pub mod loader;
pub mod schema;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, parse_config};
