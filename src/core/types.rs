//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulated day counter (one tick = one day)
pub type Day = u32;

/// Fixed 2D lattice coordinate, immutable after grid creation.
/// Used only by the render layer; the engine works with flat indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Lattice adjacency rule, edge-clipped (no wraparound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// 4-connected: north, south, east, west
    Orthogonal,
    /// 8-connected: orthogonal plus diagonals
    Moore,
}

/// Patient-zero placement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientZero {
    /// Center of the grid, falling back to the nearest populated
    /// index in scan order when the center position is empty
    Center,
    /// Uniformly random among populated positions
    Random,
}
