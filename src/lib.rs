//! Outbreak - Grid Epidemic Simulator
//!
//! A discrete-time epidemic on a square lattice: cells move through
//! susceptible, incubating, infectious, recovered and dead states
//! under stochastic rules, with medicine and quarantine interventions
//! that switch on at configurable days. The engine in `simulation` is
//! deterministic given a seed; `render` and `output` are the display
//! and persistence boundaries.

pub mod core;
pub mod output;
pub mod render;
pub mod simulation;
