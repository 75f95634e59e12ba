//! `StatsObserver<W>` — bridges `SimObserver` to a `StatsWriter`.

use petri_agent::Agent;
use petri_sim::{RoundStats, RunOutcome, SimObserver};

use crate::row::{AgentSnapshotRow, RoundStatsRow};
use crate::writer::StatsWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records round statistics and population
/// snapshots through any [`StatsWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct StatsObserver<W: StatsWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: StatsWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: StatsWriter> SimObserver for StatsObserver<W> {
    fn on_round(&mut self, _round: u64, stats: &RoundStats) {
        let row = RoundStatsRow::from(stats);
        let result = self.writer.write_round(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: u64, agents: &[Agent]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|agent| AgentSnapshotRow::new(round, agent))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _outcome: &RunOutcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
