//! Medicine and quarantine policies
//!
//! Both apply only to cells that are Infectious and past incubation.
//! Medicine is evaluated first; a cell it just cured is never
//! quarantine-checked the same day. Quarantine suppresses propagation
//! but not progression: a quarantined cell still recovers or dies on
//! schedule and stays eligible for medicine on later days.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::Day;
use crate::simulation::cell::{Cell, DiseaseState, Totals};

/// Run the day's intervention checks against one infectious cell.
pub fn apply(
    cell: &mut Cell,
    day: Day,
    config: &SimulationConfig,
    rng: &mut impl Rng,
    totals: &mut Totals,
) {
    debug_assert_eq!(cell.state, DiseaseState::Infectious);

    // Medicine: one attempt per cell, ever. A failed attempt marks
    // the cell so it is not retried.
    if day > config.med_introduced && !cell.medicated {
        if rng.gen::<f64>() < config.med_effectiveness {
            cell.recover(config.immunity, totals);
        } else {
            cell.medicated = true;
        }
    }

    if cell.state != DiseaseState::Infectious {
        return;
    }

    if !cell.quarantined
        && day > config.quarantine_introduced
        && rng.gen::<f64>() < config.quarantine_effectiveness
    {
        cell.quarantine();
    }
}
