//! Per-cell disease progression
//!
//! One call per active cell per tick: advances the incubation or
//! infectious countdown and, when the infectious period is exhausted,
//! resolves the disease as recovery or death. Resolution fires exactly
//! once per infection; afterwards the cell is Recovered or Dead and
//! no longer active.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::simulation::cell::{Cell, DiseaseState, Totals};

pub fn progress(
    cell: &mut Cell,
    config: &SimulationConfig,
    rng: &mut impl Rng,
    totals: &mut Totals,
) {
    match cell.state {
        DiseaseState::Incubating => {
            cell.incubation_remaining -= 1;
            if cell.incubation_remaining == 0 {
                cell.turn_infectious(config.duration);
            }
        }
        DiseaseState::Infectious => {
            if cell.infectious_remaining > 0 {
                cell.infectious_remaining -= 1;
            } else if rng.gen::<f64>() > config.fatality {
                cell.recover(config.immunity, totals);
            } else {
                cell.die(totals);
            }
        }
        // Empty, Susceptible, Recovered, Dead: nothing progresses
        _ => {}
    }
}
