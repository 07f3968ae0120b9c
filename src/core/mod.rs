pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use types::{Coord, Tick};
