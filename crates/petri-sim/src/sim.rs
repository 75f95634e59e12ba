//! The `Simulation` struct and its round loop.

use petri_agent::{Agent, AgentParams};
use petri_core::{SimConfig, SimRng};
use petri_grid::Grid;

use crate::observer::SimObserver;
use crate::stats::RoundStats;

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Terminal state of a run.  Extinction is an expected outcome, not an
/// error: the core raises no runtime errors at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The configured round count finished with agents still alive.
    Completed { rounds: u64 },
    /// The population emptied during `round`.
    Extinct { round: u64 },
}

impl RunOutcome {
    #[inline]
    pub fn is_extinct(&self) -> bool {
        matches!(self, RunOutcome::Extinct { .. })
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Owns the grid, the population, and the one random stream; strictly
/// single-threaded.  The grid is the only shared mutable resource and
/// agents reach it one at a time, in shuffled order — the shuffle, not
/// parallelism, is the fairness mechanism for contested food.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    agents: Vec<Agent>,
    rng: SimRng,
}

impl Simulation {
    /// Place the initial population on `grid` per `config`.
    ///
    /// `config` is trusted: it came out of the validating loader, so the
    /// initial program is known to draw only from the instruction pool.
    pub fn new(config: SimConfig, grid: Grid) -> Simulation {
        let mut rng = SimRng::new(config.seed);
        let params = AgentParams::from_config(&config);

        let agents = (0..config.initial_agents)
            .map(|_| {
                Agent::spawn(
                    params.clone(),
                    config.initial_energy,
                    config.initial_program.clone(),
                    &grid,
                    &mut rng,
                )
            })
            .collect();

        Simulation {
            config,
            grid,
            agents,
            rng,
        }
    }

    /// Read-only view of the living population.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Read-only view of the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // ── The round loop ────────────────────────────────────────────────────

    /// Run to one of the two terminal states, reporting through `observer`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        log::debug!(
            "starting run: {}x{} board, {} agents, {} rounds",
            self.grid.width(),
            self.grid.height(),
            self.agents.len(),
            self.config.rounds
        );

        for round in 1..=self.config.rounds {
            self.grid.advance_round();
            self.rng.shuffle(&mut self.agents);

            // Children never act in the round they are born: they collect
            // in a side buffer and join the population afterwards.
            let mut offspring = Vec::new();
            for i in 0..self.agents.len() {
                let agent = &mut self.agents[i];
                agent.new_round(&mut self.grid, &mut self.rng);
                if agent.will_multiply() {
                    if let Some(child) = agent.multiply(&mut self.rng) {
                        offspring.push(child);
                    }
                }
            }
            self.agents.extend(offspring);

            // Deferred cull: deaths only take effect after everyone acted
            // and this round's children joined.
            self.agents.retain(Agent::is_alive);

            if self.agents.is_empty() {
                log::info!("population extinct in round {round}");
                observer.on_extinct(round);
                let outcome = RunOutcome::Extinct { round };
                observer.on_sim_end(&outcome);
                return outcome;
            }

            let stats = RoundStats::collect(round, &self.grid, &self.agents);
            observer.on_round(round, &stats);
            if round % self.config.print_interval == 0 {
                observer.on_snapshot(round, &self.agents);
            }
        }

        // The run always ends on a full snapshot.
        if self.config.rounds % self.config.print_interval != 0 {
            observer.on_snapshot(self.config.rounds, &self.agents);
        }

        log::info!(
            "run completed: {} rounds, {} agents alive",
            self.config.rounds,
            self.agents.len()
        );
        let outcome = RunOutcome::Completed {
            rounds: self.config.rounds,
        };
        observer.on_sim_end(&outcome);
        outcome
    }
}
