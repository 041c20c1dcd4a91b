//! Color definitions for disease states
//!
//! State is never inferred from color; this is a one-way mapping used
//! only at the rendering boundary. Recovered cells deliberately share
//! the susceptible green: they are distinguishable through the
//! immunity attribute, not the palette.

use crate::simulation::cell::{Cell, DiseaseState};

/// RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background and dead/empty positions
pub const BACKGROUND: Color = Color::new(0x00, 0x00, 0x00);

pub const SUSCEPTIBLE: Color = Color::new(0x00, 0xFF, 0x00);
pub const INCUBATING: Color = Color::new(0xFF, 0xCC, 0x99);
pub const INFECTIOUS: Color = Color::new(0xFF, 0x00, 0x00);
pub const QUARANTINED: Color = Color::new(0x99, 0xCC, 0xFF);
pub const RECOVERED: Color = SUSCEPTIBLE;

/// Get the display color for a cell
pub fn cell_color(cell: &Cell) -> Color {
    match cell.state {
        DiseaseState::Empty | DiseaseState::Dead => BACKGROUND,
        DiseaseState::Susceptible => SUSCEPTIBLE,
        DiseaseState::Incubating => INCUBATING,
        DiseaseState::Infectious if cell.quarantined => QUARANTINED,
        DiseaseState::Infectious => INFECTIOUS,
        DiseaseState::Recovered => RECOVERED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GridPos;
    use crate::simulation::cell::Totals;

    #[test]
    fn test_disease_phases_have_distinct_colors() {
        assert_ne!(SUSCEPTIBLE, INCUBATING);
        assert_ne!(INCUBATING, INFECTIOUS);
        assert_ne!(INFECTIOUS, QUARANTINED);
        assert_ne!(INFECTIOUS, BACKGROUND);
    }

    #[test]
    fn test_quarantined_overrides_infectious() {
        let mut totals = Totals::default();
        let mut cell = crate::simulation::cell::Cell::susceptible(GridPos::new(0, 0));
        cell.infect(0, 4, &mut totals);
        assert_eq!(cell_color(&cell), INFECTIOUS);

        cell.quarantine();
        assert_eq!(cell_color(&cell), QUARANTINED);
    }

    #[test]
    fn test_recovered_matches_susceptible_green() {
        let mut totals = Totals::default();
        let mut cell = crate::simulation::cell::Cell::susceptible(GridPos::new(0, 0));
        assert_eq!(cell_color(&cell), SUSCEPTIBLE);

        cell.infect(0, 0, &mut totals);
        cell.recover(0.5, &mut totals);
        assert_eq!(cell_color(&cell), RECOVERED);
        // Same color; the immunity attribute carries the difference
        assert!(cell.immunity > 0.0);
    }

    #[test]
    fn test_dead_disappears_into_background() {
        let mut totals = Totals::default();
        let mut cell = crate::simulation::cell::Cell::susceptible(GridPos::new(0, 0));
        cell.infect(0, 0, &mut totals);
        cell.die(&mut totals);
        assert_eq!(cell_color(&cell), BACKGROUND);
    }
}
