pub mod colors;
pub mod raster;
pub mod terminal;

pub use colors::{cell_color, Color};
