//! `petri-output` — statistics sinks for the petri evolution simulator.
//!
//! Two consumers of the driver's read-only snapshots:
//!
//! - [`ConsoleReporter`] — the interactive view: one line per round, a
//!   population dump every snapshot, and the extinction notice.
//! - [`StatsObserver`] over a [`StatsWriter`] backend — file output;
//!   [`CsvStatsWriter`] is the provided backend.
//!
//! Observer callbacks return nothing, so writer errors are stored
//! internally and retrieved with `take_error` after the run — the same
//! contract for both consumers.

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use console::ConsoleReporter;
pub use csv::CsvStatsWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::{AgentSnapshotRow, RoundStatsRow};
pub use writer::StatsWriter;
