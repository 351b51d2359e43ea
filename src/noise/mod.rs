//! Seeded noise field and its fractal compositions
//!
//! All compositions sample a 3D point so a sphere surface can be textured
//! without seams at the longitude wrap.

mod simplex;

pub use simplex::SimplexNoise;

use glam::DVec3;

use crate::random::SeededRandom;

/// Octave count used when a caller has no preference
pub const DEFAULT_OCTAVES: usize = 6;

/// A single-octave noise function: `(field, position, frequency) -> value`
pub type BaseNoiseFn = fn(&NoiseField, DVec3, f64) -> f64;

/// Deterministic continuous noise source
///
/// # Example
///
/// ```rust
/// use pixel_planet::{DVec3, NoiseField};
///
/// let field = NoiseField::new(42);
/// let v = field.fractal_simplex(DVec3::new(1.0, 0.5, 1.5), 6);
/// assert!((0.0..=1.0).contains(&v));
/// ```
#[derive(Debug, Clone)]
pub struct NoiseField {
    seed: u64,
    simplex: SimplexNoise,
}

impl NoiseField {
    /// Create a noise field whose lattice is shuffled from `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = SeededRandom::new(seed);
        Self {
            seed,
            simplex: SimplexNoise::new(&mut rng),
        }
    }

    /// Create a noise field seeded from a parent generator
    pub fn from_rng(rng: &mut SeededRandom) -> Self {
        Self::new(rng.next_seed())
    }

    /// Seed the lattice was built from
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Simplex noise rescaled from [-1, 1] to [0, 1]
    #[inline]
    pub fn simplex_noise_3d(&self, pos: DVec3, noise_scale: f64) -> f64 {
        self.simplex.noise3d(pos * noise_scale) * 0.5 + 0.5
    }

    /// Absolute simplex noise in [0, 1]; negative lobes fold into ridges
    #[inline]
    pub fn ridged_noise_3d(&self, pos: DVec3, noise_scale: f64) -> f64 {
        self.simplex.noise3d(pos * noise_scale).abs()
    }

    /// Fractal Brownian motion over `base`
    ///
    /// Octave `o` samples at frequency `2^o` with weight `0.5^o`; the sum is
    /// divided by the total weight so the result keeps the range of a single
    /// octave. Zero octaves are treated as one.
    pub fn fractal_sum(&self, base: BaseNoiseFn, pos: DVec3, octaves: usize) -> f64 {
        let mut result = 0.0;
        let mut denom = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..octaves.max(1) {
            result += amplitude * base(self, pos, frequency);
            denom += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        result / denom
    }

    /// Fractal simplex noise in [0, 1]
    pub fn fractal_simplex(&self, pos: DVec3, octaves: usize) -> f64 {
        self.fractal_sum(Self::simplex_noise_3d, pos, octaves)
    }

    /// Inverted fractal ridged noise in [0, 1]: ridges read low
    pub fn fractal_ridged(&self, pos: DVec3, octaves: usize) -> f64 {
        1.0 - self.fractal_sum(Self::ridged_noise_3d, pos, octaves)
    }

    /// One-pass domain warp: offsets every axis by a single-octave sample,
    /// then evaluates fractal simplex noise at the displaced point
    pub fn domain_warp(&self, pos: DVec3, octaves: usize) -> f64 {
        let n = self.simplex_noise_3d(pos, 1.0);
        self.fractal_simplex(pos + DVec3::splat(n), octaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<DVec3> {
        (0..200)
            .map(|i| {
                let f = i as f64 * 0.037;
                DVec3::new(f.sin() + 1.0, (f * 1.3).cos() + 1.0, (f * 0.7).sin() + 1.0)
            })
            .collect()
    }

    #[test]
    fn test_single_octave_is_base_call() {
        let field = NoiseField::new(5);
        for pos in sample_points() {
            assert_eq!(
                field.fractal_sum(NoiseField::simplex_noise_3d, pos, 1),
                field.simplex_noise_3d(pos, 1.0)
            );
            assert_eq!(
                field.fractal_sum(NoiseField::ridged_noise_3d, pos, 1),
                field.ridged_noise_3d(pos, 1.0)
            );
        }
    }

    #[test]
    fn test_zero_octaves_behaves_like_one() {
        let field = NoiseField::new(5);
        let pos = DVec3::new(0.4, 1.2, 1.9);
        assert_eq!(field.fractal_simplex(pos, 0), field.fractal_simplex(pos, 1));
    }

    #[test]
    fn test_compositions_stay_in_unit_range() {
        let field = NoiseField::new(2024);
        for pos in sample_points() {
            for (name, v) in [
                ("simplex", field.simplex_noise_3d(pos, 1.0)),
                ("ridged", field.ridged_noise_3d(pos, 1.0)),
                ("fractal_simplex", field.fractal_simplex(pos, DEFAULT_OCTAVES)),
                ("fractal_ridged", field.fractal_ridged(pos, DEFAULT_OCTAVES)),
                ("domain_warp", field.domain_warp(pos, DEFAULT_OCTAVES)),
            ] {
                assert!((0.0..=1.0).contains(&v), "{} produced {} at {:?}", name, v, pos);
            }
        }
    }

    #[test]
    fn test_ridged_inversion() {
        let field = NoiseField::new(11);
        let pos = DVec3::new(1.1, 0.3, 1.7);
        let raw = field.fractal_sum(NoiseField::ridged_noise_3d, pos, 4);
        assert_eq!(field.fractal_ridged(pos, 4), 1.0 - raw);
    }

    #[test]
    fn test_domain_warp_displaces_input() {
        let field = NoiseField::new(11);
        let pos = DVec3::new(1.1, 0.3, 1.7);
        let n = field.simplex_noise_3d(pos, 1.0);
        assert_eq!(
            field.domain_warp(pos, 3),
            field.fractal_simplex(pos + DVec3::splat(n), 3)
        );
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = NoiseField::new(99);
        let b = NoiseField::new(99);
        for pos in sample_points() {
            assert_eq!(a.domain_warp(pos, 6), b.domain_warp(pos, 6));
        }
    }

    #[test]
    fn test_from_rng_is_reproducible() {
        let a = NoiseField::from_rng(&mut SeededRandom::new(1));
        let b = NoiseField::from_rng(&mut SeededRandom::new(1));
        assert_eq!(a.seed(), b.seed());
    }
}
