//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `round_stats.csv`
//! - `agent_snapshots.csv`
//!
//! Headers come from the serde field names of the row types.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::StatsWriter;
use crate::{AgentSnapshotRow, OutputResult, RoundStatsRow};

/// Writes simulation statistics to two CSV files.
pub struct CsvStatsWriter {
    rounds:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvStatsWriter {
    /// Open (or create) the two CSV files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let rounds = Writer::from_path(dir.join("round_stats.csv"))?;
        let snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        Ok(Self {
            rounds,
            snapshots,
            finished: false,
        })
    }
}

impl StatsWriter for CsvStatsWriter {
    fn write_round(&mut self, row: &RoundStatsRow) -> OutputResult<()> {
        self.rounds.serialize(row)?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rounds.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
