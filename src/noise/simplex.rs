//! 3D simplex noise primitive
//!
//! Gradient noise on the skewed tetrahedral lattice. The permutation table is
//! shuffled from a [`SeededRandom`], so every seed gives an independent field.

use glam::DVec3;

use crate::random::SeededRandom;

// ============================================================================
// LATTICE CONSTANTS
// ============================================================================

/// Skew factor into simplex lattice space: (sqrt(4) - 1) / 3
const F3: f64 = 1.0 / 3.0;
/// Unskew factor back into input space: (1 - 1/sqrt(4)) / 3
const G3: f64 = 1.0 / 6.0;
/// Squared radius of each corner's kernel
const KERNEL_RADIUS: f64 = 0.6;
/// Brings the summed corner contributions into [-1, 1]
const OUTPUT_SCALE: f64 = 32.0;

/// The 12 edge midpoints of a cube, used as corner gradients
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Seeded 3D simplex noise source
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    /// Shuffled 0..256 repeated twice so corner hashes never need masking
    perm: [u8; 512],
    /// `perm[i] % 12`, precomputed gradient index
    perm_mod12: [u8; 512],
}

impl SimplexNoise {
    /// Build a permutation table by shuffling 0..256 with `rng`
    ///
    /// Each slot `i` swaps with a slot drawn from `randint(i, 256)`.
    pub fn new(rng: &mut SeededRandom) -> Self {
        let mut p = [0u8; 256];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in 0..255 {
            let r = rng.randint(i as i64, 256) as usize;
            p.swap(i, r);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    /// Contribution of one simplex corner at offset `d` with gradient `gi`
    #[inline]
    fn corner(&self, gi: usize, d: DVec3) -> f64 {
        let t = KERNEL_RADIUS - d.length_squared();
        if t < 0.0 {
            return 0.0;
        }
        let g = GRAD3[gi];
        let t2 = t * t;
        t2 * t2 * (g[0] * d.x + g[1] * d.y + g[2] * d.z)
    }

    /// Raw noise at `pos`, in [-1, 1]
    ///
    /// # Algorithm
    /// 1. Skew the input to find the lattice cell
    /// 2. Rank the offsets to pick which of the six tetrahedra holds the point
    /// 3. Sum the radially attenuated gradient contributions of its 4 corners
    pub fn noise3d(&self, pos: DVec3) -> f64 {
        let s = (pos.x + pos.y + pos.z) * F3;
        let i = (pos.x + s).floor();
        let j = (pos.y + s).floor();
        let k = (pos.z + s).floor();
        let t = (i + j + k) * G3;
        let d0 = pos - DVec3::new(i - t, j - t, k - t);

        // Second and third corners, in lattice steps
        let (o1, o2) = if d0.x >= d0.y {
            if d0.y >= d0.z {
                ([1, 0, 0], [1, 1, 0])
            } else if d0.x >= d0.z {
                ([1, 0, 0], [1, 0, 1])
            } else {
                ([0, 0, 1], [1, 0, 1])
            }
        } else if d0.y < d0.z {
            ([0, 0, 1], [0, 1, 1])
        } else if d0.x < d0.z {
            ([0, 1, 0], [0, 1, 1])
        } else {
            ([0, 1, 0], [1, 1, 0])
        };

        let step1 = DVec3::new(o1[0] as f64, o1[1] as f64, o1[2] as f64);
        let step2 = DVec3::new(o2[0] as f64, o2[1] as f64, o2[2] as f64);
        let d1 = d0 - step1 + DVec3::splat(G3);
        let d2 = d0 - step2 + DVec3::splat(2.0 * G3);
        let d3 = d0 - DVec3::ONE + DVec3::splat(3.0 * G3);

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let kk = (k as i64 & 255) as usize;

        let hash = |a: usize, b: usize, c: usize| -> usize {
            let inner = self.perm[kk + c] as usize;
            let middle = self.perm[jj + b + inner] as usize;
            self.perm_mod12[ii + a + middle] as usize
        };

        let n0 = self.corner(hash(0, 0, 0), d0);
        let n1 = self.corner(hash(o1[0], o1[1], o1[2]), d1);
        let n2 = self.corner(hash(o2[0], o2[1], o2[2]), d2);
        let n3 = self.corner(hash(1, 1, 1), d3);

        (OUTPUT_SCALE * (n0 + n1 + n2 + n3)).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise(seed: u64) -> SimplexNoise {
        SimplexNoise::new(&mut SeededRandom::new(seed))
    }

    #[test]
    fn test_determinism() {
        let a = noise(42);
        let b = noise(42);
        let pos = DVec3::new(1.5, 2.3, 0.7);
        assert_eq!(a.noise3d(pos), b.noise3d(pos), "Same seed must give identical noise");
    }

    #[test]
    fn test_range() {
        let n = noise(12345);
        for i in 0..2_000 {
            let f = i as f64 * 0.0173;
            let pos = DVec3::new(f * 3.1, f * -1.7 + 4.0, (f * 0.9).sin() * 5.0);
            let v = n.noise3d(pos);
            assert!((-1.0..=1.0).contains(&v), "Raw simplex {} outside [-1, 1] at {:?}", v, pos);
        }
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // Every corner offset at a lattice vertex is either zero or outside the kernel
        let n = noise(3);
        assert_eq!(n.noise3d(DVec3::ZERO), 0.0);
    }

    #[test]
    fn test_different_seeds() {
        let pos = DVec3::new(0.31, 0.77, 1.13);
        assert_ne!(noise(42).noise3d(pos), noise(999).noise3d(pos));
    }

    #[test]
    fn test_permutation_is_bijective() {
        let n = noise(8);
        let mut seen = [false; 256];
        for &v in &n.perm[..256] {
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "Permutation must contain every byte once");
        assert_eq!(n.perm[..256], n.perm[256..]);
    }
}
