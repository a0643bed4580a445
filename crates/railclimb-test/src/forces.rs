//! Seeded random force sequences.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Integer-valued forces drawn uniformly from `low..=high`.
///
/// Integer values keep every sum exact, so algorithms that sum in a
/// different order still agree at the boundaries.
pub fn seeded_forces(seed: u64, len: usize, low: i32, high: i32) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| f64::from(rng.random_range(low..=high)))
        .collect()
}

/// Integer-valued forces drawn from `-magnitude..=0`.
pub fn seeded_nonpositive_forces(seed: u64, len: usize, magnitude: i32) -> Vec<f64> {
    seeded_forces(seed, len, -magnitude, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        assert_eq!(seeded_forces(7, 12, -50, 20), seeded_forces(7, 12, -50, 20));
    }

    #[test]
    fn test_bounds() {
        let forces = seeded_nonpositive_forces(3, 200, 40);
        assert_eq!(forces.len(), 200);
        assert!(forces.iter().all(|&f| (-40.0..=0.0).contains(&f)));
    }
}
