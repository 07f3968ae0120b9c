//! Generation engine - advances the board one tick at a time
//!
//! Each tick runs in two phases:
//! evaluate (every next state computed from the frozen current grid) -> commit
//! (the whole next grid replaces the current one, then the tick counter moves).
//!
//! Writing cells while still reading neighbors would corrupt the counts of
//! cells evaluated later in the same pass, so nothing is written until every
//! cell has been resolved.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::error::{LifeError, Result};
use crate::core::types::Tick;
use crate::simulation::rule::LifeRule;
use crate::spatial::grid::CellGrid;
use crate::spatial::neighbors::count_alive_neighbors;

/// Summary of one committed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Tick counter after the generation was committed
    pub tick: Tick,
    /// Cells that went from dead to alive
    pub births: usize,
    /// Cells that went from alive to dead
    pub deaths: usize,
    /// Live cells after the generation
    pub population: usize,
}

impl GenerationReport {
    /// Report describing a board without advancing it
    pub fn unchanged(board: &Board) -> Self {
        Self {
            tick: board.tick(),
            births: 0,
            deaths: 0,
            population: board.population(),
        }
    }
}

/// Evaluate phase: next state of every cell, read from `grid` only
pub fn evaluate(grid: &CellGrid, rule: &LifeRule) -> Vec<bool> {
    resolve(grid, rule).next
}

/// Next grid plus birth and death counts, all read from the frozen `grid`
struct Resolved {
    next: Vec<bool>,
    births: usize,
    deaths: usize,
}

fn resolve(grid: &CellGrid, rule: &LifeRule) -> Resolved {
    let mut resolved = Resolved {
        next: Vec::with_capacity(grid.as_slice().len()),
        births: 0,
        deaths: 0,
    };

    for (coord, alive) in grid.iter() {
        let neighbors = count_alive_neighbors(grid, coord.row, coord.col);
        let next = rule.should_live(alive, neighbors);
        if rule.should_die(alive, neighbors) {
            resolved.deaths += 1;
        } else if next && !alive {
            resolved.births += 1;
        }
        resolved.next.push(next);
    }

    resolved
}

/// Advance the board by exactly one generation
pub fn advance(board: &mut Board) -> GenerationReport {
    let Resolved { next, births, deaths } = resolve(board.grid(), &board.rule());
    let population = next.iter().filter(|&&alive| alive).count();

    board.grid_mut().commit(next);
    board.increment_tick();

    let report = GenerationReport {
        tick: board.tick(),
        births,
        deaths,
        population,
    };

    tracing::debug!(
        tick = report.tick,
        births = report.births,
        deaths = report.deaths,
        population = report.population,
        "Generation committed"
    );

    report
}

/// Advance the board `n` generations in sequence
///
/// Returns the report of the last generation, or of the untouched board when
/// `n` is zero. Negative counts fail with `InvalidArgument`.
pub fn advance_n(board: &mut Board, n: i64) -> Result<GenerationReport> {
    if n < 0 {
        return Err(LifeError::InvalidArgument(format!(
            "tick count must be non-negative, got {}",
            n
        )));
    }

    let mut report = GenerationReport::unchanged(board);
    for _ in 0..n {
        report = advance(board);
    }
    Ok(report)
}
