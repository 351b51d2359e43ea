//! Pixel sphere silhouettes
//!
//! A filled circle of diameter `D` is described by the width of each of its
//! `D` scanlines. Both planets and satellites draw from this table, and the
//! planet also uses each row's width as the horizontal sampling density when
//! wrapping its texture around the sphere.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{PlanetError, Result};

/// Scanline width table for a filled circle
///
/// # Invariants
///
/// - exactly `diameter` rows
/// - row `y` and row `diameter - 1 - y` have equal width
/// - widths never decrease from the top row to the middle row
/// - every width has the same parity as the diameter
///
/// # Example
///
/// ```rust
/// use pixel_planet::SphereGeometry;
///
/// let sphere = SphereGeometry::new(5).unwrap();
/// assert_eq!(sphere.widths(), &[3, 5, 5, 5, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphereGeometry {
    diameter: u32,
    widths: Vec<u32>,
}

impl SphereGeometry {
    /// Compute the width table for `diameter`
    ///
    /// Walks one octant of the circle with a Bresenham-style decision
    /// variable (the TIC-80 filled circle), recording a span each time the
    /// walk steps down a scanline. Even diameters are drawn as an odd circle
    /// one pixel smaller, widened by one pixel on every row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `diameter` is zero
    pub fn new(diameter: u32) -> Result<Self> {
        if diameter == 0 {
            return Err(PlanetError::InvalidConfiguration(
                "sphere diameter must be positive".to_string(),
            ));
        }

        let size = diameter as i64;
        let parity = 1 - size % 2;
        let radius = size / 2 - parity;
        let mut widths = vec![0u32; diameter as usize];

        let mut y = -radius;
        let mut x = 0i64;
        let mut d = 2 - 2 * radius;

        loop {
            let r = d;
            if r > y || d > x {
                let w = (x * 2 + 1 + parity) as u32;
                widths[(y + radius) as usize] = w;
                widths[(size - y - radius - 1) as usize] = w;
                y += 1;
                d += y * 2 + 1;
            }
            if r <= x {
                x += 1;
                d += x * 2 + 1;
            }
            if y > 0 {
                break;
            }
        }

        Ok(Self { diameter, widths })
    }

    #[inline]
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Span width of scanline `y`, or `None` outside the silhouette
    #[inline]
    pub fn width_at(&self, y: usize) -> Option<u32> {
        self.widths.get(y).copied()
    }

    #[inline]
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }

    /// Iterate `(row, width)` pairs from top to bottom
    pub fn spans(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.widths.iter().copied().enumerate()
    }

    /// Number of pixels in the filled silhouette
    pub fn area(&self) -> u64 {
        self.widths.iter().map(|&w| w as u64).sum()
    }
}

/// Shares one [`SphereGeometry`] per distinct diameter
#[derive(Debug, Default)]
pub struct SphereCache {
    tables: HashMap<u32, Arc<SphereGeometry>>,
}

impl SphereCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry for `diameter`, computed on first request
    pub fn get(&mut self, diameter: u32) -> Result<Arc<SphereGeometry>> {
        if let Some(geometry) = self.tables.get(&diameter) {
            return Ok(Arc::clone(geometry));
        }
        let geometry = Arc::new(SphereGeometry::new(diameter)?);
        log::debug!("computed sphere width table for diameter {}", diameter);
        self.tables.insert(diameter, Arc::clone(&geometry));
        Ok(geometry)
    }

    /// Number of distinct diameters computed so far
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
