//! Board - the simulation aggregate
//!
//! Owns the cell grid, the tick counter and the active rule. This is the
//! surface consumed by front ends: query and mutate cells, seed content,
//! step the simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::{LifeError, Result};
use crate::core::types::{Coord, Tick};
use crate::patterns::{self, Pattern, PatternLibrary};
use crate::simulation::rule::LifeRule;
use crate::simulation::tick::{self, GenerationReport};
use crate::spatial::grid::CellGrid;

/// A toroidal Game of Life board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: CellGrid,
    tick: Tick,
    rule: LifeRule,
}

/// Plain copy of a board's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub height: usize,
    pub width: usize,
    pub tick: Tick,
    pub rows: Vec<Vec<bool>>,
}

impl Board {
    /// Create a board, optionally from an initial grid of `height` rows of `width` cells
    pub fn new(height: usize, width: usize, initial: Option<Vec<Vec<bool>>>) -> Result<Self> {
        let grid = match initial {
            Some(rows) => CellGrid::from_rows(height, width, rows)?,
            None => CellGrid::blank(height, width)?,
        };

        Ok(Self {
            grid,
            tick: 0,
            rule: LifeRule::conway(),
        })
    }

    /// All-dead board
    pub fn blank(height: usize, width: usize) -> Result<Self> {
        Self::new(height, width, None)
    }

    /// Board sized and ruled by `config`, with nothing seeded yet
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let mut board = Self::blank(config.height, config.width)?;
        board.rule = config.life_rule()?;
        Ok(board)
    }

    /// Restore a board from a snapshot (the rule resets to Conway)
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self> {
        let mut board = Self::new(snapshot.height, snapshot.width, Some(snapshot.rows))?;
        board.tick = snapshot.tick;
        Ok(board)
    }

    // === QUERIES ===

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn rule(&self) -> LifeRule {
        self.rule
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.grid.cell_at(row, col)
    }

    pub fn is_dead(&self, row: usize, col: usize) -> Result<bool> {
        self.grid.cell_at(row, col).map(|alive| !alive)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Every cell as `(coord, alive)`, row-major from row 0
    ///
    /// Front ends choose their own drawing order from this.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.grid.iter()
    }

    /// Coordinates of live cells, row-major from row 0
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter().filter(|&(_, alive)| alive).map(|(coord, _)| coord)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.grid.to_rows()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            height: self.height(),
            width: self.width(),
            tick: self.tick,
            rows: self.to_rows(),
        }
    }

    // === MUTATION ===

    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.set_alive(row, col)
    }

    pub fn set_dead(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.set_dead(row, col)
    }

    /// Kill every cell; the tick counter is left alone
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn set_rule(&mut self, rule: LifeRule) {
        self.rule = rule;
    }

    /// Replace the grid wholesale, keeping the tick counter
    pub fn replace_rows(&mut self, rows: Vec<Vec<bool>>) -> Result<()> {
        self.grid = CellGrid::from_rows(self.height(), self.width(), rows)?;
        Ok(())
    }

    /// Seed randomly at `density` percent, returning the seed that was used
    pub fn randomize(&mut self, density: f64, seed: Option<u64>) -> Result<u64> {
        let seed = seed.unwrap_or_else(|| rand::random());
        let mut rng = patterns::seeded_rng(seed);
        patterns::randomize(self, density, &mut rng)?;
        Ok(seed)
    }

    /// Seed randomly at `density` percent from a caller-owned RNG
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<()> {
        patterns::randomize(self, density, rng).map(|_| ())
    }

    /// Place a built-in preset at `origin`
    pub fn place_preset(&mut self, name: &str, origin: Coord) -> Result<Vec<Coord>> {
        PatternLibrary::builtin().place(self, name, origin)
    }

    /// Place an arbitrary pattern at `origin`
    pub fn place_pattern(&mut self, pattern: &Pattern, origin: Coord) -> Vec<Coord> {
        patterns::place_pattern(self, pattern, origin)
    }

    // === STEPPING ===

    /// Advance one generation
    pub fn step(&mut self) -> GenerationReport {
        tick::advance(self)
    }

    /// Advance `n` generations; negative `n` is `InvalidArgument`
    pub fn advance(&mut self, n: i64) -> Result<GenerationReport> {
        tick::advance_n(self, n)
    }

    pub(crate) fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    pub(crate) fn increment_tick(&mut self) {
        self.tick += 1;
    }
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = LifeError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        Board::from_snapshot(snapshot)
    }
}
