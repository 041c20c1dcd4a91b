//! Tick orchestrator
//!
//! Owns the grid, the running totals and the RNG for one run; nothing
//! outlives the `Simulation`, so independent runs share no state.
//! Each simulated day is one fixed-order sweep over the grid:
//! progression, then interventions, then propagation per eligible
//! cell. The core is single-threaded and never blocks; cancellation
//! is the caller's concern and is only ever honored between days.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Day;
use crate::simulation::cell::{Cell, DiseaseState, Totals};
use crate::simulation::grid::PopulationGrid;
use crate::simulation::{intervention, progression, propagation};

/// Aggregate snapshot published once per tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DaySummary {
    pub day: Day,
    /// Cells currently incubating or infectious
    pub active: usize,
    pub living: usize,
    pub dead: usize,
    pub recovered: usize,
    pub ever_infected: usize,
    pub never_infected: usize,
}

/// One simulation run: grid, totals, clock and RNG in one place
pub struct Simulation {
    config: SimulationConfig,
    grid: PopulationGrid,
    totals: Totals,
    day: Day,
    patient_zero: usize,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Validate the configuration, build the population and place
    /// patient zero. Fails before the first tick on a bad config.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut totals = Totals::default();
        let mut grid = PopulationGrid::populate(&config, &mut rng, &mut totals);
        let patient_zero = grid.seed_patient_zero(&config, &mut rng, &mut totals)?;
        totals.never_infected = grid.count_never_infected();

        tracing::info!(
            seed = config.seed,
            side = config.side,
            living = totals.living,
            patient_zero,
            "simulation initialized"
        );

        Ok(Self {
            config,
            grid,
            totals,
            day: 0,
            patient_zero,
            rng,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn patient_zero(&self) -> usize {
        self.patient_zero
    }

    /// Day budget exhausted, or the outbreak burned out under the
    /// stop-when-clear policy.
    pub fn finished(&self) -> bool {
        if self.day >= self.config.days {
            return true;
        }
        self.config.stop_when_clear && self.day > 0 && self.grid.count_active() == 0
    }

    /// Advance the simulation by one day and return the snapshot.
    pub fn advance_day(&mut self) -> DaySummary {
        let day = self.day;

        // Only cells that were active at the tick boundary act today;
        // a cell infected mid-sweep sits out the rest of the day.
        let active: Vec<usize> = (0..self.grid.len())
            .filter(|&i| self.grid.cell(i).is_active())
            .collect();

        for index in active {
            let cell = self.grid.cell_mut(index);

            // A cell leaving incubation today takes no further action
            let was_incubating = cell.state == DiseaseState::Incubating;
            progression::progress(cell, &self.config, &mut self.rng, &mut self.totals);
            if was_incubating || cell.state != DiseaseState::Infectious {
                continue;
            }

            intervention::apply(cell, day, &self.config, &mut self.rng, &mut self.totals);
            if cell.state != DiseaseState::Infectious || cell.quarantined {
                continue;
            }

            propagation::spread(
                &mut self.grid,
                index,
                &self.config,
                &mut self.rng,
                &mut self.totals,
            );
        }

        self.totals.never_infected = self.grid.count_never_infected();
        self.day += 1;

        let summary = self.summary();
        tracing::debug!(
            day = summary.day,
            active = summary.active,
            dead = summary.dead,
            ever_infected = summary.ever_infected,
            "day complete"
        );
        summary
    }

    /// Snapshot of the current aggregates.
    pub fn summary(&self) -> DaySummary {
        DaySummary {
            day: self.day,
            active: self.grid.count_active(),
            living: self.totals.living,
            dead: self.totals.dead,
            recovered: self.totals.recovered,
            ever_infected: self.totals.ever_infected,
            never_infected: self.totals.never_infected,
        }
    }

    /// Run to completion without an observer. Used by headless runs
    /// and tests; interactive callers drive `advance_day` themselves
    /// so they can render and poll for cancellation between days.
    pub fn run(&mut self) -> Vec<DaySummary> {
        let mut history = Vec::new();
        while !self.finished() {
            history.push(self.advance_day());
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            side: 20,
            density: 0.8,
            days: 60,
            seed: 4242,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_same_seed_same_history() {
        let history_a = Simulation::new(config()).unwrap().run();
        let history_b = Simulation::new(config()).unwrap().run();

        assert_eq!(history_a.len(), history_b.len());
        for (a, b) in history_a.iter().zip(&history_b) {
            assert_eq!(a.active, b.active);
            assert_eq!(a.dead, b.dead);
            assert_eq!(a.recovered, b.recovered);
            assert_eq!(a.ever_infected, b.ever_infected);
        }
    }

    #[test]
    fn test_different_seed_diverges() {
        let mut other = config();
        other.seed = 4243;
        let history_a = Simulation::new(config()).unwrap().run();
        let history_b = Simulation::new(other).unwrap().run();

        let diverged = history_a
            .iter()
            .zip(&history_b)
            .any(|(a, b)| a.ever_infected != b.ever_infected || a.dead != b.dead);
        assert!(diverged);
    }

    #[test]
    fn test_counter_inequality_every_day() {
        let mut sim = Simulation::new(config()).unwrap();
        while !sim.finished() {
            let s = sim.advance_day();
            assert!(
                s.dead + s.recovered + s.active <= s.ever_infected,
                "day {}: {} + {} + {} > {}",
                s.day,
                s.dead,
                s.recovered,
                s.active,
                s.ever_infected
            );
        }
    }

    #[test]
    fn test_totals_monotone() {
        let mut sim = Simulation::new(config()).unwrap();
        let mut prev = sim.summary();
        while !sim.finished() {
            let s = sim.advance_day();
            assert!(s.dead >= prev.dead);
            assert!(s.recovered >= prev.recovered);
            assert!(s.ever_infected >= prev.ever_infected);
            assert_eq!(s.living, prev.living);
            prev = s;
        }
    }

    #[test]
    fn test_day_budget_terminates() {
        let mut sim = Simulation::new(config()).unwrap();
        let history = sim.run();
        assert!(history.len() <= 60);
        assert!(sim.finished());
    }

    #[test]
    fn test_stop_when_clear() {
        let mut config = config();
        config.stop_when_clear = true;
        config.rate = 0.0;
        config.incubation = 0;
        config.duration = 1;
        config.fatality = 0.0;

        let mut sim = Simulation::new(config).unwrap();
        let history = sim.run();

        // Patient zero clears after two days; the run stops well
        // short of the budget.
        assert!(history.len() < 10);
        assert_eq!(sim.summary().active, 0);
    }

    #[test]
    fn test_invalid_config_rejected_before_first_tick() {
        let mut config = config();
        config.rate = 2.0;
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_dead_and_empty_never_change() {
        let mut config = config();
        config.fatality = 1.0;
        config.days = 80;

        let mut sim = Simulation::new(config).unwrap();
        let mut seen_dead: Vec<usize> = Vec::new();
        while !sim.finished() {
            for &i in &seen_dead {
                assert_eq!(sim.cells()[i].state, DiseaseState::Dead);
            }
            sim.advance_day();
            seen_dead = sim
                .cells()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.state == DiseaseState::Dead)
                .map(|(i, _)| i)
                .collect();
        }
    }

    #[test]
    fn test_phase_counters_exclusive_at_tick_boundaries() {
        let mut sim = Simulation::new(config()).unwrap();
        while !sim.finished() {
            sim.advance_day();
            for cell in sim.cells() {
                assert!(
                    cell.incubation_remaining == 0 || cell.infectious_remaining == 0,
                    "cell at {:?} holds both phase counters",
                    cell.position
                );
            }
        }
    }
}
