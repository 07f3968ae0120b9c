//! Grid storage and toroidal neighborhood queries

pub mod grid;
pub mod neighbors;

pub use grid::CellGrid;
pub use neighbors::{count_alive_neighbors, neighbor_coords, NEIGHBOR_OFFSETS};
