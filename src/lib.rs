//! Torus Life - Conway's Game of Life on a fixed-size toroidal board

pub mod board;
pub mod core;
pub mod patterns;
pub mod simulation;
pub mod spatial;

pub use crate::board::{Board, BoardSnapshot};
pub use crate::core::{Coord, LifeError, Result, SimulationConfig, Tick};
pub use crate::patterns::{Pattern, PatternLibrary};
pub use crate::simulation::{GenerationReport, LifeRule};
pub use crate::spatial::{count_alive_neighbors, CellGrid};
