//! Randomized density seeding

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::core::config::validate_density;
use crate::core::error::Result;

/// Deterministic RNG for reproducible seeding
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Reseed every cell independently: alive with `density` percent chance
///
/// `density` must be in (0, 100]. An all-dead draw is thrown away and redrawn
/// until at least one cell is alive. The tick counter is not touched.
/// Returns the number of draws taken.
pub fn randomize<R: Rng + ?Sized>(board: &mut Board, density: f64, rng: &mut R) -> Result<u32> {
    validate_density(density)?;

    let cell_count = board.height() * board.width();
    let mut draws = 0;

    loop {
        draws += 1;
        let next: Vec<bool> = (0..cell_count)
            .map(|_| rng.gen_range(0.0..100.0) < density)
            .collect();

        if next.iter().any(|&alive| alive) {
            board.grid_mut().commit(next);
            break;
        }

        tracing::debug!(draws, density, "Random draw left the board empty, redrawing");
    }

    tracing::debug!(
        population = board.population(),
        density,
        draws,
        "Board randomized"
    );

    Ok(draws)
}

/// Kill every cell on the board
pub fn clear(board: &mut Board) {
    board.clear();
}
