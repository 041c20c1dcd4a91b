//! Simulation configuration with documented parameters
//!
//! All tunable parameters are collected here with their defaults and
//! valid ranges. Validation is fail-fast: a bad value is rejected
//! before the first tick runs, never silently clamped.

use serde::{Deserialize, Serialize};

use crate::core::error::{OutbreakError, Result};
use crate::core::types::{Day, PatientZero, Topology};

/// Configuration for one simulation run
///
/// The defaults reproduce a moderately contagious disease on a 60x60
/// grid: most runs burn through the population in well under the
/// 300-day budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    // === GRID ===
    /// Number of cells along one side of the square grid
    pub side: usize,

    /// Fraction of grid positions populated at startup, in [0,1]
    ///
    /// Each position independently becomes Susceptible with this
    /// probability, otherwise it stays Empty for the whole run.
    pub density: f64,

    // === DISEASE ===
    /// Probability that a contact between an infectious cell and a
    /// susceptible neighbor transmits the disease, in [0,1]
    pub rate: f64,

    /// Days the disease stays dormant before becoming infectious
    pub incubation: Day,

    /// Days a cell remains infectious before resolving
    pub duration: Day,

    /// Probability that resolution ends in death, in [0,1]
    pub fatality: f64,

    /// Immunity level acquired on recovery, in [0,1]
    ///
    /// Reduces the chance of re-infection: an infection attempt on a
    /// recovered cell first has to beat this value.
    pub immunity: f64,

    // === INTERVENTIONS ===
    /// Day medicine becomes available (defaults to `days`, i.e. never)
    pub med_introduced: Day,

    /// Probability a medicated cell recovers immediately, in [0,1]
    ///
    /// Each cell gets exactly one medication attempt.
    pub med_effectiveness: f64,

    /// Day quarantine begins (defaults to `days`, i.e. never)
    pub quarantine_introduced: Day,

    /// Probability an infectious cell is found and quarantined on a
    /// given day, in [0,1]
    pub quarantine_effectiveness: f64,

    // === RUN CONTROL ===
    /// Day budget: the run stops after this many simulated days
    pub days: Day,

    /// Also stop as soon as no cell is incubating or infectious
    pub stop_when_clear: bool,

    /// Neighbor adjacency rule (4- or 8-connected, edge-clipped)
    pub topology: Topology,

    /// Where patient zero is placed
    pub patient_zero: PatientZero,

    /// RNG seed; a fixed seed plus a fixed config reproduces the run
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            side: 60,
            density: 0.7,
            rate: 0.15,
            incubation: 3,
            duration: 4,
            fatality: 0.02,
            immunity: 0.5,
            med_introduced: 300,
            med_effectiveness: 0.0,
            quarantine_introduced: 300,
            quarantine_effectiveness: 0.0,
            days: 300,
            stop_when_clear: false,
            topology: Topology::Orthogonal,
            patient_zero: PatientZero::Center,
            seed: 12345,
        }
    }
}

impl SimulationConfig {
    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.side == 0 {
            return Err(OutbreakError::Config(
                "grid side must be at least 1".into(),
            ));
        }
        check_probability("rate", self.rate)?;
        check_probability("fatality", self.fatality)?;
        check_probability("immunity", self.immunity)?;
        check_probability("density", self.density)?;
        check_probability("med-effectiveness", self.med_effectiveness)?;
        check_probability("quarantine-effectiveness", self.quarantine_effectiveness)?;
        if self.density == 0.0 {
            return Err(OutbreakError::Config(
                "density 0 leaves nobody to infect".into(),
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(OutbreakError::Config(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}
