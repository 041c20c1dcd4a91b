//! Pure neighbor resolver for the square lattice
//!
//! Adjacency is edge-clipped: border cells simply have fewer
//! neighbors, there is no wraparound. The rule (4- vs 8-connected) is
//! chosen once per run through `Topology` and applied uniformly.

use crate::core::types::Topology;

const ORTHOGONAL: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const MOORE: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Indices lattice-adjacent to `index` on a `side x side` row-major
/// grid. Never includes `index` itself, never an out-of-range index.
pub fn neighbors(index: usize, side: usize, topology: Topology) -> Vec<usize> {
    let x = (index % side) as i64;
    let y = (index / side) as i64;
    let side = side as i64;

    let offsets: &[(i64, i64)] = match topology {
        Topology::Orthogonal => &ORTHOGONAL,
        Topology::Moore => &MOORE,
    };

    offsets
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x + dx;
            let ny = y + dy;
            if nx >= 0 && nx < side && ny >= 0 && ny < side {
                Some((ny * side + nx) as usize)
            } else {
                None
            }
        })
        .collect()
}
