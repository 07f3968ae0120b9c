//! Birth/survival rules for outer-totalistic automata
//!
//! Conway's Game of Life:
//! 1. A live cell with fewer than two live neighbors dies (underpopulation)
//! 2. A live cell with two or three live neighbors lives on
//! 3. A live cell with more than three live neighbors dies (overpopulation)
//! 4. A dead cell with exactly three live neighbors becomes alive (reproduction)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LifeError;

/// Neighbor counts that cause birth and survival, as 9-bit masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifeRule {
    birth: u16,
    survival: u16,
}

impl Default for LifeRule {
    fn default() -> Self {
        Self::conway()
    }
}

impl LifeRule {
    /// Rule from explicit birth and survival counts; counts above 8 are ignored
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// HighLife (B36/S23), home of the replicator
    pub fn high_life() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }

    /// Day & Night (B3678/S34678)
    pub fn day_and_night() -> Self {
        Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    #[inline]
    pub fn should_live(&self, alive: bool, neighbors: u8) -> bool {
        let bit = 1u16 << neighbors.min(8);
        if alive {
            self.survival & bit != 0
        } else {
            self.birth & bit != 0
        }
    }

    #[inline]
    pub fn should_die(&self, alive: bool, neighbors: u8) -> bool {
        alive && !self.should_live(alive, neighbors)
    }
}

fn mask(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|&&n| n <= 8)
        .fold(0u16, |acc, &n| acc | (1 << n))
}

fn digits(mask: u16) -> String {
    (0..=8u8)
        .filter(|&n| mask & (1 << n) != 0)
        .map(|n| char::from(b'0' + n))
        .collect()
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survival))
    }
}

impl FromStr for LifeRule {
    type Err = LifeError;

    /// Parses `B<digits>/S<digits>`, case-insensitive, digits 0-8
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidArgument(format!("invalid rule string: {:?}", s));

        let (birth, survival) = s.trim().split_once('/').ok_or_else(invalid)?;
        let birth = birth
            .strip_prefix(['B', 'b'])
            .ok_or_else(invalid)?;
        let survival = survival
            .strip_prefix(['S', 's'])
            .ok_or_else(invalid)?;

        let parse_counts = |part: &str| -> Result<Vec<u8>, LifeError> {
            part.chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if d <= 8 => Ok(d as u8),
                    _ => Err(invalid()),
                })
                .collect()
        };

        Ok(Self::new(&parse_counts(birth)?, &parse_counts(survival)?))
    }
}
