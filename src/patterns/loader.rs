//! Load custom patterns from TOML files
//!
//! ```toml
//! [[pattern]]
//! name = "tub"
//! cells = [[1, 0], [0, 1], [2, 1], [1, 2]]
//! size = [3, 3]   # optional (width, height), defaults to the bounding box
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{LifeError, Result};
use crate::patterns::library::Pattern;

#[derive(Debug, Deserialize)]
struct TomlPatterns {
    #[serde(default, rename = "pattern")]
    patterns: Vec<TomlPattern>,
}

#[derive(Debug, Deserialize)]
struct TomlPattern {
    name: String,
    cells: Vec<[usize; 2]>,
    size: Option<[usize; 2]>,
}

impl TomlPattern {
    fn into_pattern(self) -> Result<Pattern> {
        let cells = self.cells.into_iter().map(|[dx, dy]| (dx, dy)).collect();
        match self.size {
            Some([width, height]) => Pattern::with_size(self.name, (width, height), cells),
            None => Pattern::new(self.name, cells),
        }
    }
}

/// Parse patterns from TOML text
pub fn parse_patterns(content: &str) -> Result<Vec<Pattern>> {
    let toml_data: TomlPatterns =
        toml::from_str(content).map_err(|e| LifeError::PatternParse(e.to_string()))?;

    toml_data
        .patterns
        .into_iter()
        .map(TomlPattern::into_pattern)
        .collect()
}

/// Load patterns from a TOML file on disk
pub fn load_patterns(path: &Path) -> Result<Vec<Pattern>> {
    let content = std::fs::read_to_string(path)?;
    let patterns = parse_patterns(&content)?;
    tracing::info!("Loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_size() {
        let patterns = parse_patterns(
            r#"
            [[pattern]]
            name = "tub"
            cells = [[1, 0], [0, 1], [2, 1], [1, 2]]

            [[pattern]]
            name = "dot"
            cells = [[0, 0]]
            size = [4, 2]
            "#,
        )
        .unwrap();

        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].name(), "tub");
        assert_eq!(patterns[0].size(), (3, 3));
        assert_eq!(patterns[1].size(), (4, 2));
        assert_eq!(patterns[1].cells(), &[(0, 0)]);
    }

    #[test]
    fn test_empty_file_has_no_patterns() {
        assert!(parse_patterns("").unwrap().is_empty());
    }

    #[test]
    fn test_cell_outside_size_rejected() {
        let result = parse_patterns(
            r#"
            [[pattern]]
            name = "bad"
            cells = [[3, 0]]
            size = [2, 2]
            "#,
        );
        assert!(matches!(result, Err(LifeError::PatternParse(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = parse_patterns("[[pattern]]\nname = 3");
        assert!(matches!(result, Err(LifeError::PatternParse(_))));
    }

    #[test]
    fn test_load_bundled_spaceships() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/patterns/spaceships.toml");
        let patterns = load_patterns(&path).unwrap();
        let names: Vec<_> = patterns.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["mwss", "hwss"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_patterns(Path::new("data/patterns/does_not_exist.toml"));
        assert!(matches!(result, Err(LifeError::IoError(_))));
    }
}
