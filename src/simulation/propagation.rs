//! Infection propagation across the lattice
//!
//! An infectious, non-quarantined cell attempts to infect each
//! susceptible or recovered neighbor. Two independent draws per
//! neighbor: the first must beat the neighbor's acquired immunity for
//! an attempt to happen at all, the second must land under the
//! infection rate for the attempt to succeed. A neighbor already
//! carrying the disease is skipped, so the first successful infector
//! in sweep order wins.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::simulation::cell::Totals;
use crate::simulation::grid::PopulationGrid;
use crate::simulation::neighbors::neighbors;

/// Spread from the infectious cell at `index` to its neighbors.
pub fn spread(
    grid: &mut PopulationGrid,
    index: usize,
    config: &SimulationConfig,
    rng: &mut impl Rng,
    totals: &mut Totals,
) {
    for neighbor in neighbors(index, grid.side(), config.topology) {
        let cell = grid.cell_mut(neighbor);
        if !cell.is_exposed() {
            continue;
        }
        if rng.gen::<f64>() > cell.immunity && rng.gen::<f64>() < config.rate {
            cell.infect(config.incubation, config.duration, totals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::cell::DiseaseState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid_with_patient_zero(
        config: &SimulationConfig,
    ) -> (PopulationGrid, Totals, ChaCha8Rng, usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut totals = Totals::default();
        let mut grid = PopulationGrid::populate(config, &mut rng, &mut totals);
        let index = grid
            .seed_patient_zero(config, &mut rng, &mut totals)
            .unwrap();
        (grid, totals, rng, index)
    }

    fn config(rate: f64) -> SimulationConfig {
        SimulationConfig {
            side: 5,
            density: 1.0,
            rate,
            incubation: 2,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_certain_rate_infects_every_neighbor() {
        let config = config(1.0);
        let (mut grid, mut totals, mut rng, index) = grid_with_patient_zero(&config);

        spread(&mut grid, index, &config, &mut rng, &mut totals);

        let adjacent = neighbors(index, grid.side(), config.topology);
        for &n in &adjacent {
            assert_eq!(grid.cell(n).state, DiseaseState::Incubating);
            assert_eq!(grid.cell(n).incubation_remaining, config.incubation);
        }
        // patient zero plus every adjacent cell
        assert_eq!(totals.ever_infected, 1 + adjacent.len());
    }

    #[test]
    fn test_zero_rate_infects_nobody() {
        let config = config(0.0);
        let (mut grid, mut totals, mut rng, index) = grid_with_patient_zero(&config);

        for _ in 0..100 {
            spread(&mut grid, index, &config, &mut rng, &mut totals);
        }
        assert_eq!(totals.ever_infected, 1);
    }

    #[test]
    fn test_full_immunity_blocks_every_attempt() {
        let config = SimulationConfig {
            rate: 1.0,
            immunity: 1.0,
            ..config(1.0)
        };
        let (mut grid, mut totals, mut rng, index) = grid_with_patient_zero(&config);

        // Make every neighbor a recovered cell at full immunity
        for n in neighbors(index, grid.side(), config.topology) {
            let cell = grid.cell_mut(n);
            cell.infect(0, 0, &mut totals);
            cell.recover(1.0, &mut totals);
        }
        let before = totals.ever_infected;

        for _ in 0..100 {
            spread(&mut grid, index, &config, &mut rng, &mut totals);
        }
        assert_eq!(totals.ever_infected, before);
    }

    #[test]
    fn test_already_infected_neighbor_not_reinfected() {
        let config = config(1.0);
        let (mut grid, mut totals, mut rng, index) = grid_with_patient_zero(&config);

        spread(&mut grid, index, &config, &mut rng, &mut totals);
        let after_first = totals.ever_infected;

        // All neighbors already incubating; nothing new can happen
        spread(&mut grid, index, &config, &mut rng, &mut totals);
        assert_eq!(totals.ever_infected, after_first);
    }

    #[test]
    fn test_empty_neighbors_are_skipped() {
        let mut config = config(1.0);
        config.density = 1.0;
        let (mut grid, mut totals, mut rng, index) = grid_with_patient_zero(&config);

        // Hollow out the neighborhood
        let adjacent = neighbors(index, grid.side(), config.topology);
        for &n in &adjacent {
            let position = grid.cell(n).position;
            *grid.cell_mut(n) = crate::simulation::cell::Cell::empty(position);
        }

        spread(&mut grid, index, &config, &mut rng, &mut totals);
        for &n in &adjacent {
            assert_eq!(grid.cell(n).state, DiseaseState::Empty);
        }
        assert_eq!(totals.ever_infected, 1);
    }
}
