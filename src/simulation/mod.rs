pub mod rule;
pub mod tick;

pub use rule::LifeRule;
pub use tick::{advance, advance_n, evaluate, GenerationReport};
