//! Simulation configuration with documented defaults
//!
//! Configuration can be built in code, or loaded from a TOML file where every
//! field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LifeError, Result};
use crate::simulation::rule::LifeRule;
use crate::spatial::grid::check_dimensions;

/// Configuration for a simulation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === BOARD ===
    /// Number of rows on the board
    pub height: usize,

    /// Number of columns on the board
    pub width: usize,

    // === SEEDING ===
    /// Percent chance (0, 100] that a cell starts alive when randomizing
    ///
    /// At 25.0 a 20x40 board starts with roughly 200 live cells, enough to
    /// produce a long-lived soup without saturating into overpopulation.
    pub density: f64,

    /// Seed for the randomizer; `None` draws a fresh seed per session
    pub seed: Option<u64>,

    /// Preset to place instead of randomizing
    pub preset: Option<String>,

    /// `[row, col]` origin for the preset
    pub origin: Option<[usize; 2]>,

    // === RULES ===
    /// Birth/survival rule in `B3/S23` notation
    pub rule: String,

    /// Generations to advance after seeding
    pub ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height: 20,
            width: 40,
            density: 25.0,
            seed: None,
            preset: None,
            origin: None,
            rule: LifeRule::conway().to_string(),
            ticks: 0,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Parsed form of `rule`
    pub fn life_rule(&self) -> Result<LifeRule> {
        self.rule.parse()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.height, self.width)?;
        validate_density(self.density)?;
        self.life_rule()?;

        Ok(())
    }
}

/// Density must be a percentage in (0, 100]
pub fn validate_density(density: f64) -> Result<()> {
    if density > 0.0 && density <= 100.0 {
        Ok(())
    } else {
        Err(LifeError::InvalidArgument(format!(
            "density must be in (0, 100], got {}",
            density
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rule, "B3/S23");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            height = 8
            seed = 7
            preset = "glider"
            origin = [1, 2]
            "#,
        )
        .unwrap();

        assert_eq!(config.height, 8);
        assert_eq!(config.width, 40);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.preset.as_deref(), Some("glider"));
        assert_eq!(config.origin, Some([1, 2]));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let result = SimulationConfig::from_toml_str("width = 0");
        assert!(matches!(result, Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_overflowing_board_rejected() {
        let config = SimulationConfig {
            height: usize::MAX / 2 + 1,
            width: 2,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(LifeError::InvalidArgument(_))));
        assert!(matches!(
            crate::board::Board::from_config(&config),
            Err(LifeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_density_bounds() {
        assert!(validate_density(100.0).is_ok());
        assert!(validate_density(0.5).is_ok());
        assert!(validate_density(0.0).is_err());
        assert!(validate_density(-3.0).is_err());
        assert!(validate_density(100.01).is_err());
        assert!(validate_density(f64::NAN).is_err());
    }

    #[test]
    fn test_bad_rule_rejected() {
        let result = SimulationConfig::from_toml_str(r#"rule = "B9/S""#);
        assert!(matches!(result, Err(LifeError::InvalidArgument(_))));
    }

    #[test]
    fn test_load_bundled_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/life.toml");
        let config = SimulationConfig::load(&path).unwrap();
        assert_eq!((config.height, config.width), (30, 60));
        assert_eq!(config.seed, Some(2024));
        assert_eq!(config.life_rule().unwrap(), LifeRule::conway());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = SimulationConfig::from_toml_str("height = \"tall\"");
        assert!(matches!(result, Err(LifeError::ConfigParse(_))));
    }
}
