//! Integration tests for the round driver.

use petri_core::{Instruction, SimConfig};
use petri_grid::Grid;

use crate::observer::{NoopObserver, SimObserver};
use crate::sim::{RunOutcome, Simulation};
use crate::stats::RoundStats;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Baseline config: no reproduction, no mutation, free rounds.
fn test_config(rounds: u64) -> SimConfig {
    SimConfig {
        rounds,
        initial_agents: 1,
        initial_energy: 100,
        food_energy: 10,
        food_ripening_time: 3,
        round_cost: 0,
        reproduction_limit: 0,
        reproduction_odds: 0.0,
        parent_energy_fraction: 0.5,
        removal_odds: 0.0,
        addition_odds: 0.0,
        change_odds: 0.0,
        print_interval: 1_000,
        initial_program: vec![],
        instruction_set: Instruction::ALL.to_vec(),
        seed: 42,
    }
}

fn all_food_3x3() -> Grid {
    Grid::parse("xxx\nxxx\nxxx", 10, 3).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Round(RoundStats),
    Snapshot { round: u64, population: usize },
    Extinct(u64),
    End(RunOutcome),
}

/// Observer recording every callback in order.
#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl SimObserver for Recorder {
    fn on_round(&mut self, _round: u64, stats: &RoundStats) {
        self.events.push(Event::Round(*stats));
    }
    fn on_snapshot(&mut self, round: u64, agents: &[petri_agent::Agent]) {
        self.events.push(Event::Snapshot {
            round,
            population: agents.len(),
        });
    }
    fn on_extinct(&mut self, round: u64) {
        self.events.push(Event::Extinct(round));
    }
    fn on_sim_end(&mut self, outcome: &RunOutcome) {
        self.events.push(Event::End(*outcome));
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod setup {
    use super::*;

    #[test]
    fn initial_population_matches_config() {
        let mut config = test_config(1);
        config.initial_agents = 7;
        config.initial_program = vec![Instruction::Sniff, Instruction::Move];
        let sim = Simulation::new(config, all_food_3x3());
        assert_eq!(sim.agents().len(), 7);
        for a in sim.agents() {
            assert_eq!(a.energy(), 100);
            assert_eq!(a.age(), 0);
            assert_eq!(a.program(), &[Instruction::Sniff, Instruction::Move]);
            assert!(a.coordinates().x < 3 && a.coordinates().y < 3);
        }
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn mover_on_a_full_board_gains_fixed_income() {
        // One agent walking a straight line over an all-food board: every
        // round it lands on a ripe cell (its 3-cell track only revisits
        // the untouched start cell), so each round nets exactly
        // food_energy − round_cost − 1 instruction cost.
        let mut config = test_config(3);
        config.round_cost = 2;
        config.initial_program = vec![Instruction::Move];
        let mut sim = Simulation::new(config, all_food_3x3());

        let outcome = sim.run(&mut NoopObserver);

        assert_eq!(outcome, RunOutcome::Completed { rounds: 3 });
        assert_eq!(sim.agents().len(), 1);
        let per_round = 10 - 2 - 1;
        assert_eq!(sim.agents()[0].energy(), 100 + 3 * per_round);
        assert_eq!(sim.agents()[0].age(), 3);
    }

    #[test]
    fn starving_population_goes_extinct_in_round_one() {
        // No food anywhere and a round cost above the starting energy:
        // everyone dies in round 1 and the driver reports it rather than
        // crashing on the empty population.
        let mut config = test_config(10);
        config.initial_agents = 3;
        config.initial_energy = 0;
        config.round_cost = 1;
        config.print_interval = 2;
        let grid = Grid::parse("   \n   ", 10, 3).unwrap();
        let mut sim = Simulation::new(config, grid);

        let mut rec = Recorder::default();
        let outcome = sim.run(&mut rec);

        assert_eq!(outcome, RunOutcome::Extinct { round: 1 });
        assert!(outcome.is_extinct());
        assert_eq!(
            rec.events,
            vec![Event::Extinct(1), Event::End(RunOutcome::Extinct { round: 1 })],
            "no stats row and no snapshot for the extinct round"
        );
        assert!(sim.agents().is_empty());
    }

    #[test]
    fn certain_reproduction_doubles_the_population() {
        let mut config = test_config(2);
        config.reproduction_odds = 1.0;
        let mut sim = Simulation::new(config, all_food_3x3());

        let outcome = sim.run(&mut NoopObserver);

        assert_eq!(outcome, RunOutcome::Completed { rounds: 2 });
        assert_eq!(sim.agents().len(), 4, "1 → 2 → 4 with certain lots");

        // Reproduction only ever splits energy, so the total is conserved.
        let total: i64 = sim.agents().iter().map(|a| a.energy()).sum();
        assert_eq!(total, 100);

        // One founder aged 2, its first child aged 1, two newborns.
        let mut ages: Vec<u64> = sim.agents().iter().map(|a| a.age()).collect();
        ages.sort_unstable();
        assert_eq!(ages, vec![0, 0, 1, 2]);
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reporting {
    use super::*;

    #[test]
    fn stats_rows_follow_every_surviving_round() {
        let mut sim = Simulation::new(test_config(4), all_food_3x3());
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        let rounds: Vec<u64> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Round(s) => Some(s.round),
                _ => None,
            })
            .collect();
        assert_eq!(rounds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn stats_aggregate_the_population() {
        let mut config = test_config(1);
        config.initial_agents = 5;
        config.initial_program = vec![Instruction::TurnLeft; 2];
        let mut sim = Simulation::new(config, all_food_3x3());
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        let stats = match &rec.events[0] {
            Event::Round(s) => *s,
            other => panic!("expected a stats row first, got {other:?}"),
        };
        assert_eq!(stats.round, 1);
        assert_eq!(stats.population, 5);
        assert_eq!(stats.ripe_food, 9, "turners never eat");
        assert_eq!(stats.program_len.min, 2);
        assert_eq!(stats.program_len.max, 2);
        assert_eq!(stats.program_len.mean, 2.0);
        // Every agent paid 2 instruction costs and nothing else.
        assert_eq!(stats.energy.min, 98);
        assert_eq!(stats.energy.max, 98);
        assert_eq!(stats.age.min, 1);
        assert_eq!(stats.age.max, 1);
    }

    #[test]
    fn snapshots_fire_on_the_interval() {
        let mut config = test_config(4);
        config.print_interval = 2;
        let mut sim = Simulation::new(config, all_food_3x3());
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        let snapshots: Vec<u64> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Snapshot { round, .. } => Some(*round),
                _ => None,
            })
            .collect();
        assert_eq!(snapshots, vec![2, 4], "final round is already a snapshot round");
    }

    #[test]
    fn trailing_snapshot_when_final_round_misses_the_interval() {
        let mut config = test_config(5);
        config.print_interval = 2;
        let mut sim = Simulation::new(config, all_food_3x3());
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        let snapshots: Vec<u64> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Snapshot { round, .. } => Some(*round),
                _ => None,
            })
            .collect();
        assert_eq!(snapshots, vec![2, 4, 5], "run always ends on a full snapshot");
        assert_eq!(
            rec.events.last(),
            Some(&Event::End(RunOutcome::Completed { rounds: 5 }))
        );
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn busy_config() -> SimConfig {
        let mut config = test_config(12);
        config.initial_agents = 4;
        config.initial_program = vec![Instruction::Sniff, Instruction::Move, Instruction::Eat];
        config.round_cost = 1;
        config.reproduction_odds = 0.4;
        config.reproduction_limit = 40;
        config.removal_odds = 0.2;
        config.addition_odds = 0.3;
        config.change_odds = 0.2;
        config.print_interval = 5;
        config
    }

    #[test]
    fn same_seed_replays_identically() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();

        Simulation::new(busy_config(), all_food_3x3()).run(&mut first);
        Simulation::new(busy_config(), all_food_3x3()).run(&mut second);

        assert_eq!(first.events, second.events);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();

        Simulation::new(busy_config(), all_food_3x3()).run(&mut first);
        let mut other = busy_config();
        other.seed = 43;
        Simulation::new(other, all_food_3x3()).run(&mut second);

        assert_ne!(first.events, second.events);
    }
}
