//! Per-round aggregate statistics.

use petri_agent::Agent;
use petri_grid::Grid;

/// Min/mean/max of one integer quantity over the population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: i64,
    pub mean: f64,
    pub max: i64,
}

impl Summary {
    /// Summarise a non-empty sequence of values.
    fn collect(values: impl Iterator<Item = i64>) -> Summary {
        let mut min = i64::MAX;
        let mut max = i64::MIN;
        let mut sum = 0i64;
        let mut count = 0usize;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }
        debug_assert!(count > 0, "summary of an empty population");
        Summary {
            min,
            mean: sum as f64 / count as f64,
            max,
        }
    }
}

/// Read-only aggregate snapshot of one completed round.
///
/// Collected by the driver only for surviving (non-empty) populations;
/// the extinction round gets [`SimObserver::on_extinct`] instead of a
/// stats row.
///
/// [`SimObserver::on_extinct`]: crate::SimObserver::on_extinct
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStats {
    /// 1-based round index.
    pub round: u64,
    /// Cells currently holding ripe food.
    pub ripe_food: usize,
    /// Living agents after this round's merge and cull.
    pub population: usize,
    pub program_len: Summary,
    pub energy: Summary,
    pub age: Summary,
}

impl RoundStats {
    /// Aggregate the population at the end of a round.  `agents` must be
    /// non-empty.
    pub fn collect(round: u64, grid: &Grid, agents: &[Agent]) -> RoundStats {
        RoundStats {
            round,
            ripe_food: grid.ripe_cells(),
            population: agents.len(),
            program_len: Summary::collect(agents.iter().map(|a| a.program().len() as i64)),
            energy: Summary::collect(agents.iter().map(|a| a.energy())),
            age: Summary::collect(agents.iter().map(|a| a.age() as i64)),
        }
    }
}
