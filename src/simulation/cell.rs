//! A single lattice position and its disease state machine
//!
//! Every transition that changes an aggregate total owns that
//! increment, so the totals can never drift from the grid.

use serde::{Deserialize, Serialize};

use crate::core::types::{Day, GridPos};

/// Disease state of one cell; exactly one variant holds at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseState {
    /// Unpopulated position, permanently inert
    Empty,
    /// Alive, never currently infected
    Susceptible,
    /// Infected but dormant, not yet transmitting
    Incubating,
    /// Actively transmitting to neighbors
    Infectious,
    /// Survived the disease, carries acquired immunity
    Recovered,
    /// Terminal
    Dead,
}

/// Process-wide running totals
///
/// `living`, `dead`, `recovered` and `ever_infected` only grow, and
/// only from the transition that causes the change. `never_infected`
/// is derived: the orchestrator recomputes it over the grid each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub living: usize,
    pub dead: usize,
    pub recovered: usize,
    pub ever_infected: usize,
    pub never_infected: usize,
}

/// One lattice position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Fixed coordinate, used only for rendering
    pub position: GridPos,
    pub state: DiseaseState,
    /// Days of dormancy left; nonzero only while Incubating
    pub incubation_remaining: Day,
    /// Days of transmission left; nonzero only while Infectious
    pub infectious_remaining: Day,
    /// Acquired immunity in [0,1]; 0 until first recovery, then the
    /// configured constant for the rest of the run
    pub immunity: f64,
    /// One medication attempt was made and failed
    pub medicated: bool,
    /// Found by quarantine; no longer infects neighbors
    pub quarantined: bool,
}

impl Cell {
    pub fn susceptible(position: GridPos) -> Self {
        Self {
            position,
            state: DiseaseState::Susceptible,
            incubation_remaining: 0,
            infectious_remaining: 0,
            immunity: 0.0,
            medicated: false,
            quarantined: false,
        }
    }

    pub fn empty(position: GridPos) -> Self {
        Self {
            state: DiseaseState::Empty,
            ..Self::susceptible(position)
        }
    }

    /// Incubating or infectious
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            DiseaseState::Incubating | DiseaseState::Infectious
        )
    }

    /// Can this cell catch the disease right now?
    pub fn is_exposed(&self) -> bool {
        matches!(
            self.state,
            DiseaseState::Susceptible | DiseaseState::Recovered
        )
    }

    /// Cell catches the disease. Enters incubation, or goes straight
    /// to Infectious when the incubation period is zero.
    pub fn infect(&mut self, incubation: Day, duration: Day, totals: &mut Totals) {
        if incubation > 0 {
            self.state = DiseaseState::Incubating;
            self.incubation_remaining = incubation;
            self.infectious_remaining = 0;
        } else {
            self.state = DiseaseState::Infectious;
            self.incubation_remaining = 0;
            self.infectious_remaining = duration;
        }
        totals.ever_infected += 1;
    }

    /// Incubation ran out; the cell starts transmitting.
    pub fn turn_infectious(&mut self, duration: Day) {
        self.state = DiseaseState::Infectious;
        self.incubation_remaining = 0;
        self.infectious_remaining = duration;
    }

    /// Cell survives and gains immunity. Immunity is set on first
    /// recovery only and never decreases afterwards.
    pub fn recover(&mut self, immunity: f64, totals: &mut Totals) {
        self.state = DiseaseState::Recovered;
        self.incubation_remaining = 0;
        self.infectious_remaining = 0;
        if self.immunity < immunity {
            self.immunity = immunity;
        }
        totals.recovered += 1;
    }

    /// Terminal: a dead cell never changes state again.
    pub fn die(&mut self, totals: &mut Totals) {
        self.state = DiseaseState::Dead;
        self.incubation_remaining = 0;
        self.infectious_remaining = 0;
        totals.dead += 1;
    }

    /// Found by quarantine; stops infecting but keeps progressing.
    pub fn quarantine(&mut self) {
        self.quarantined = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> Cell {
        Cell::susceptible(GridPos::new(0, 0))
    }

    #[test]
    fn test_infect_with_incubation_enters_dormancy() {
        let mut c = cell();
        let mut totals = Totals::default();
        c.infect(3, 4, &mut totals);

        assert_eq!(c.state, DiseaseState::Incubating);
        assert_eq!(c.incubation_remaining, 3);
        assert_eq!(c.infectious_remaining, 0);
        assert_eq!(totals.ever_infected, 1);
    }

    #[test]
    fn test_infect_without_incubation_is_immediately_infectious() {
        let mut c = cell();
        let mut totals = Totals::default();
        c.infect(0, 4, &mut totals);

        assert_eq!(c.state, DiseaseState::Infectious);
        assert_eq!(c.infectious_remaining, 4);
    }

    #[test]
    fn test_phase_counters_never_both_positive() {
        let mut c = cell();
        let mut totals = Totals::default();
        c.infect(3, 4, &mut totals);
        assert!(c.incubation_remaining == 0 || c.infectious_remaining == 0);

        c.turn_infectious(4);
        assert!(c.incubation_remaining == 0 || c.infectious_remaining == 0);
    }

    #[test]
    fn test_recover_sets_immunity_once() {
        let mut c = cell();
        let mut totals = Totals::default();
        c.infect(0, 1, &mut totals);
        c.recover(0.5, &mut totals);

        assert_eq!(c.state, DiseaseState::Recovered);
        assert_eq!(c.immunity, 0.5);
        assert_eq!(totals.recovered, 1);

        // Re-infection and a second recovery must not lower immunity
        c.infect(0, 1, &mut totals);
        c.recover(0.3, &mut totals);
        assert_eq!(c.immunity, 0.5);
    }

    #[test]
    fn test_die_clears_disease_counters() {
        let mut c = cell();
        let mut totals = Totals::default();
        c.infect(0, 0, &mut totals);
        c.die(&mut totals);

        assert_eq!(c.state, DiseaseState::Dead);
        assert_eq!(c.incubation_remaining, 0);
        assert_eq!(c.infectious_remaining, 0);
        assert_eq!(totals.dead, 1);
    }

    #[test]
    fn test_empty_cell_is_not_exposed() {
        let c = Cell::empty(GridPos::new(1, 1));
        assert!(!c.is_exposed());
        assert!(!c.is_active());
    }
}
