//! Named pattern templates and their placement on a board

use std::path::Path;
use std::sync::OnceLock;

use ahash::AHashMap;

use crate::board::Board;
use crate::core::error::{LifeError, Result};
use crate::core::types::Coord;
use crate::patterns::presets::PRESETS;

/// Immutable template of live cells relative to an origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    size: (usize, usize),
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Pattern sized to the bounding box of its cells
    pub fn new(name: impl Into<String>, cells: Vec<(usize, usize)>) -> Result<Self> {
        let width = cells.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0);
        let height = cells.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0);
        Self::with_size(name, (width, height), cells)
    }

    /// Pattern with an explicit `(width, height)` that must contain every cell
    pub fn with_size(
        name: impl Into<String>,
        size: (usize, usize),
        cells: Vec<(usize, usize)>,
    ) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(LifeError::PatternParse("pattern name is empty".into()));
        }
        if cells.is_empty() {
            return Err(LifeError::PatternParse(format!("pattern '{}' has no cells", name)));
        }
        if let Some(&(dx, dy)) = cells.iter().find(|&&(dx, dy)| dx >= size.0 || dy >= size.1) {
            return Err(LifeError::PatternParse(format!(
                "pattern '{}' cell ({}, {}) lies outside its {}x{} size",
                name, dx, dy, size.0, size.1
            )));
        }

        Ok(Self { name, size, cells })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounding `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    /// Live `(dx, dy)` offsets
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Whether the bounding box is strictly smaller than a `height` x `width` board
    pub fn fits(&self, height: usize, width: usize) -> bool {
        self.size.0 < width && self.size.1 < height
    }
}

/// Ordered registry of named patterns
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
    by_name: AHashMap<String, usize>,
}

impl PatternLibrary {
    /// Empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding every built-in preset
    pub fn with_presets() -> Self {
        let mut library = Self::new();
        for preset in PRESETS {
            library.insert(Pattern {
                name: preset.name.to_string(),
                size: preset.size,
                cells: preset.cells.to_vec(),
            });
        }
        library
    }

    /// Shared library of built-in presets
    pub fn builtin() -> &'static PatternLibrary {
        static BUILTIN: OnceLock<PatternLibrary> = OnceLock::new();
        BUILTIN.get_or_init(PatternLibrary::with_presets)
    }

    fn insert(&mut self, pattern: Pattern) {
        self.by_name.insert(pattern.name.clone(), self.patterns.len());
        self.patterns.push(pattern);
    }

    /// Add a custom pattern; names must be unique
    pub fn register(&mut self, pattern: Pattern) -> Result<()> {
        if self.by_name.contains_key(pattern.name()) {
            return Err(LifeError::InvalidArgument(format!(
                "pattern '{}' is already registered",
                pattern.name()
            )));
        }
        self.insert(pattern);
        Ok(())
    }

    /// Register every pattern in a TOML pattern file, returning how many were added
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let patterns = crate::patterns::loader::load_patterns(path)?;
        let count = patterns.len();
        for pattern in patterns {
            self.register(pattern)?;
        }
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<&Pattern> {
        self.by_name
            .get(name)
            .map(|&idx| &self.patterns[idx])
            .ok_or_else(|| LifeError::UnknownPreset(name.to_string()))
    }

    /// Names in registration order
    pub fn preset_names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    /// Bounding `(width, height)` of a named pattern
    pub fn preset_size(&self, name: &str) -> Result<(usize, usize)> {
        self.get(name).map(Pattern::size)
    }

    pub fn fits(&self, name: &str, height: usize, width: usize) -> Result<bool> {
        self.get(name).map(|p| p.fits(height, width))
    }

    /// Set the named pattern's cells alive with their offsets applied to `origin`
    ///
    /// Nothing is cleared first. Coordinates wrap toroidally, so an oversized
    /// pattern overlaps itself rather than failing. Returns the cells touched.
    pub fn place(&self, board: &mut Board, name: &str, origin: Coord) -> Result<Vec<Coord>> {
        let pattern = self.get(name)?;
        Ok(place_pattern(board, pattern, origin))
    }
}

/// Place a pattern on a board at `origin`, wrapping coordinates
pub fn place_pattern(board: &mut Board, pattern: &Pattern, origin: Coord) -> Vec<Coord> {
    let (height, width) = (board.height(), board.width());

    if !pattern.fits(height, width) {
        tracing::warn!(
            "Pattern '{}' ({}x{}) does not fit a {}x{} board; placement will wrap onto itself",
            pattern.name(),
            pattern.size.0,
            pattern.size.1,
            width,
            height
        );
    }

    let touched: Vec<Coord> = pattern
        .cells
        .iter()
        .map(|&(dx, dy)| {
            let target = origin.wrapped_offset(dx as i64, dy as i64, height, width);
            board.grid_mut().set_alive_wrapped(target.row, target.col)
        })
        .collect();

    tracing::debug!(
        "Placed '{}' at {} ({} cells)",
        pattern.name(),
        origin,
        touched.len()
    );

    touched
}
