//! The `StatsWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, OutputResult, RoundStatsRow};

/// Trait implemented by file-backed statistics writers.
///
/// Errors are surfaced through [`StatsObserver::take_error`] after the
/// run — observer callbacks themselves return nothing.
///
/// [`StatsObserver::take_error`]: crate::StatsObserver::take_error
pub trait StatsWriter {
    /// Write one per-round statistics row.
    fn write_round(&mut self, row: &RoundStatsRow) -> OutputResult<()>;

    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
