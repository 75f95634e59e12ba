//! petri — run an evolution simulation from a parameter file and a board
//! file.
//!
//! ```text
//! petri <params-file> <board-file> [--csv <dir>]
//! ```
//!
//! Per-round statistics and periodic population dumps go to stdout; with
//! `--csv` the same data is also recorded to `round_stats.csv` and
//! `agent_snapshots.csv` in the given directory.
//!
//! All input errors (malformed parameters, bad board) are reported as
//! plain messages and end the process; nothing is retried.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use petri_agent::Agent;
use petri_config::load_config;
use petri_grid::Grid;
use petri_output::{ConsoleReporter, CsvStatsWriter, StatsObserver};
use petri_sim::{RoundStats, RunOutcome, SimObserver, Simulation};

// ── Argument handling ─────────────────────────────────────────────────────────

struct Args {
    params_path: PathBuf,
    board_path:  PathBuf,
    csv_dir:     Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut csv_dir = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => match args.next() {
                Some(dir) => csv_dir = Some(PathBuf::from(dir)),
                None => bail!("--csv requires a directory"),
            },
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [params_path, board_path] = <[PathBuf; 2]>::try_from(positional)
        .map_err(|_| anyhow::anyhow!("usage: petri <params-file> <board-file> [--csv <dir>]"))?;

    Ok(Args {
        params_path,
        board_path,
        csv_dir,
    })
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every callback to the console and, when requested, to the
/// CSV writer.
struct RunObservers {
    console: ConsoleReporter<io::Stdout>,
    csv:     Option<StatsObserver<CsvStatsWriter>>,
}

impl SimObserver for RunObservers {
    fn on_round(&mut self, round: u64, stats: &RoundStats) {
        self.console.on_round(round, stats);
        if let Some(csv) = &mut self.csv {
            csv.on_round(round, stats);
        }
    }

    fn on_snapshot(&mut self, round: u64, agents: &[Agent]) {
        self.console.on_snapshot(round, agents);
        if let Some(csv) = &mut self.csv {
            csv.on_snapshot(round, agents);
        }
    }

    fn on_extinct(&mut self, round: u64) {
        self.console.on_extinct(round);
        if let Some(csv) = &mut self.csv {
            csv.on_extinct(round);
        }
    }

    fn on_sim_end(&mut self, outcome: &RunOutcome) {
        self.console.on_sim_end(outcome);
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(outcome);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    // 1. Load and validate the configuration.
    let config = load_config(&args.params_path)
        .with_context(|| format!("parameter file {}", args.params_path.display()))?;

    // 2. Load and validate the board.
    let board_text = std::fs::read_to_string(&args.board_path)
        .with_context(|| format!("board file {}", args.board_path.display()))?;
    let grid = Grid::parse(&board_text, config.food_energy, config.food_ripening_time)
        .with_context(|| format!("board file {}", args.board_path.display()))?;
    log::info!(
        "loaded {}x{} board with {} ripe cells",
        grid.width(),
        grid.height(),
        grid.ripe_cells()
    );

    // 3. Set up output.
    let csv = match &args.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvStatsWriter::new(dir)
                .with_context(|| format!("opening CSV output in {}", dir.display()))?;
            Some(StatsObserver::new(writer))
        }
        None => None,
    };
    let mut observers = RunObservers {
        console: ConsoleReporter::stdout(),
        csv,
    };

    // 4. Run.
    let mut sim = Simulation::new(config, grid);
    let outcome = sim.run(&mut observers);

    if let Some(e) = observers.console.take_error() {
        eprintln!("console output error: {e}");
    }
    if let Some(e) = observers.csv.as_mut().and_then(StatsObserver::take_error) {
        eprintln!("CSV output error: {e}");
    }

    match outcome {
        RunOutcome::Completed { rounds } => {
            println!("completed {rounds} rounds with {} agents alive", sim.agents().len());
        }
        RunOutcome::Extinct { round } => {
            println!("population went extinct in round {round}");
        }
    }

    Ok(())
}
