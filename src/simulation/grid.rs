//! Fixed-size population grid
//!
//! A `side x side` row-major block of cells, built once at startup
//! and never resized. All later mutation happens in place during the
//! tick sweep.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::{OutbreakError, Result};
use crate::core::types::{GridPos, PatientZero};
use crate::simulation::cell::{Cell, DiseaseState, Totals};

#[derive(Debug, Clone)]
pub struct PopulationGrid {
    side: usize,
    cells: Vec<Cell>,
}

impl PopulationGrid {
    /// Build the initial population: each position independently
    /// becomes Susceptible with probability `density`, else Empty.
    /// Bumps `totals.living` once per susceptible cell created.
    pub fn populate(
        config: &SimulationConfig,
        rng: &mut impl Rng,
        totals: &mut Totals,
    ) -> Self {
        let side = config.side;
        let mut cells = Vec::with_capacity(side * side);

        for y in 0..side {
            for x in 0..side {
                let position = GridPos::new(x as u32, y as u32);
                if rng.gen::<f64>() < config.density {
                    cells.push(Cell::susceptible(position));
                    totals.living += 1;
                } else {
                    cells.push(Cell::empty(position));
                }
            }
        }

        Self { side, cells }
    }

    /// Force exactly one cell to Infectious, bypassing incubation.
    /// Called once, after `populate` and before the first tick.
    /// Returns the chosen index.
    pub fn seed_patient_zero(
        &mut self,
        config: &SimulationConfig,
        rng: &mut impl Rng,
        totals: &mut Totals,
    ) -> Result<usize> {
        let index = match config.patient_zero {
            PatientZero::Center => {
                let center = self.side * self.side / 2 + self.side / 2;
                self.nearest_susceptible(center)
            }
            PatientZero::Random => {
                let populated: Vec<usize> = (0..self.cells.len())
                    .filter(|&i| self.cells[i].state == DiseaseState::Susceptible)
                    .collect();
                if populated.is_empty() {
                    None
                } else {
                    Some(populated[rng.gen_range(0..populated.len())])
                }
            }
        };

        let index = index.ok_or_else(|| {
            OutbreakError::Config("population came up empty, nobody to infect".into())
        })?;

        self.cells[index].infect(0, config.duration, totals);
        Ok(index)
    }

    /// First susceptible index at or after `start` in scan order,
    /// wrapping around the end of the grid.
    fn nearest_susceptible(&self, start: usize) -> Option<usize> {
        let len = self.cells.len();
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| self.cells[i].state == DiseaseState::Susceptible)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Cells currently incubating or infectious
    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|c| c.is_active()).count()
    }

    /// Susceptible cells that never caught the disease. Recomputed
    /// each tick rather than tracked incrementally.
    pub fn count_never_infected(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state == DiseaseState::Susceptible && c.immunity == 0.0)
            .count()
    }
}
