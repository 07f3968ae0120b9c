//! Pattern seeding: named presets, custom pattern files and random soups

pub mod library;
mod loader;
pub mod presets;
pub mod seeding;

pub use library::{place_pattern, Pattern, PatternLibrary};
pub use loader::{load_patterns, parse_patterns};
pub use seeding::{clear, randomize, seeded_rng};
