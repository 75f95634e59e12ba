//! The interactive console view of a run.

use std::io::{self, Write};

use petri_agent::Agent;
use petri_sim::{RoundStats, SimObserver, Summary};

/// A [`SimObserver`] that renders the run as text:
///
/// ```text
/// round 3, food: 7, agents: 2, prog: 1/1.00/1, energy: 4/5.50/7, age: 1/2.00/3
/// * simulation state after round 4
/// * agent: age 2, energy 7, position (1, 2)
/// round 5: no agents left, ending simulation
/// ```
///
/// Generic over the sink so tests can capture the output; use
/// [`ConsoleReporter::stdout`] for the real thing.  Write errors are
/// stored and surfaced via [`take_error`][Self::take_error], matching
/// the file-writer contract.
pub struct ConsoleReporter<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// `min/mean/max` with the mean at two decimals, as in the round line.
fn summary(s: &Summary) -> String {
    format!("{}/{:.2}/{}", s.min, s.mean, s.max)
}

impl<W: Write> SimObserver for ConsoleReporter<W> {
    fn on_round(&mut self, _round: u64, stats: &RoundStats) {
        let result = writeln!(
            self.out,
            "round {}, food: {}, agents: {}, prog: {}, energy: {}, age: {}",
            stats.round,
            stats.ripe_food,
            stats.population,
            summary(&stats.program_len),
            summary(&stats.energy),
            summary(&stats.age),
        );
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: u64, agents: &[Agent]) {
        let result = (|| {
            writeln!(self.out, "* simulation state after round {round}")?;
            for agent in agents {
                writeln!(self.out, "* {agent}")?;
            }
            Ok(())
        })();
        self.store_err(result);
    }

    fn on_extinct(&mut self, round: u64) {
        let result = writeln!(self.out, "round {round}: no agents left, ending simulation");
        self.store_err(result);
    }
}
