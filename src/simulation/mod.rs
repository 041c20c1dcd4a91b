pub mod cell;
pub mod grid;
pub mod intervention;
pub mod neighbors;
pub mod progression;
pub mod propagation;
pub mod tick;

pub use cell::{Cell, DiseaseState, Totals};
pub use grid::PopulationGrid;
pub use neighbors::neighbors;
pub use tick::{DaySummary, Simulation};
