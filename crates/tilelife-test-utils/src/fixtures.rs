//! Reusable seed patterns and random soups.
//!
//! - [`blinker`]: period-2 oscillator, horizontal phase.
//! - [`block`]: 2x2 still life.
//! - [`glider`]: moves `(+1, +1)` every four generations.
//! - [`random_soup`]: deterministic random fill from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tilelife_core::{BitPlane, Pattern};

/// Three cells in a row.
pub fn blinker() -> Pattern {
    Pattern::from_cells([(0, 0), (0, 1), (0, 2)])
}

/// The blinker's vertical phase.
pub fn blinker_vertical() -> Pattern {
    Pattern::from_cells([(0, 0), (1, 0), (2, 0)])
}

/// Four cells in a square.
pub fn block() -> Pattern {
    Pattern::from_cells([(0, 0), (0, 1), (1, 0), (1, 1)])
}

/// South-east travelling glider.
///
/// ```text
/// .O.
/// ..O
/// OOO
/// ```
pub fn glider() -> Pattern {
    Pattern::from_cells([(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
}

/// A `rows x cols` plane with `pattern` stamped at `(row, col)`.
///
/// # Panics
///
/// Panics on invalid dimensions.
pub fn seeded(rows: u32, cols: u32, pattern: &Pattern, row: i32, col: i32) -> BitPlane {
    let mut plane = BitPlane::new(rows, cols).expect("fixture dimensions must be valid");
    pattern.stamp(&mut plane, row, col);
    plane
}

/// A plane where each cell is live with probability `density`.
///
/// The same `seed` always yields the same plane.
///
/// # Panics
///
/// Panics on invalid dimensions.
pub fn random_soup(rows: u32, cols: u32, density: f64, seed: u64) -> BitPlane {
    let mut plane = BitPlane::new(rows, cols).expect("fixture dimensions must be valid");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.random_bool(density) {
                plane.set(row, col, true);
            }
        }
    }
    plane
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soups_are_deterministic() {
        let a = random_soup(20, 30, 0.4, 7);
        let b = random_soup(20, 30, 0.4, 7);
        let c = random_soup(20, 30, 0.4, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn soup_density_extremes() {
        assert_eq!(random_soup(5, 5, 0.0, 1).population(), 0);
        assert_eq!(random_soup(5, 5, 1.0, 1).population(), 25);
    }

    #[test]
    fn glider_has_five_cells() {
        assert_eq!(glider().live_count(), 5);
        assert_eq!((glider().height(), glider().width()), (3, 3));
    }
}
