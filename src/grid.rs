//! Toroidal storage grid
//!
//! Writes are bounds-checked; reads wrap on both axes, which is what lets a
//! planet texture scroll forever horizontally and wrap across the poles.

use crate::error::{PlanetError, Result};

/// Fixed-size 2D grid with wraparound reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToroidalGrid<T> {
    width: usize,
    height: usize,
    table: Vec<T>,
}

impl<T: Copy> ToroidalGrid<T> {
    /// Create a `width × height` grid with every cell set to `init`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either dimension is zero
    pub fn new(width: usize, height: usize, init: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PlanetError::InvalidConfiguration(format!(
                "grid dimensions must be positive (got {}x{})",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            table: vec![init; width * height],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Store `value` at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` unless `0 <= x < width` and `0 <= y < height`
    pub fn set(&mut self, x: i64, y: i64, value: T) -> Result<()> {
        if x < 0 || self.width as i64 <= x {
            return Err(PlanetError::OutOfRange(format!(
                "x must be between 0 and {} (got {})",
                self.width - 1,
                x
            )));
        }
        if y < 0 || self.height as i64 <= y {
            return Err(PlanetError::OutOfRange(format!(
                "y must be between 0 and {} (got {})",
                self.height - 1,
                y
            )));
        }
        self.table[y as usize * self.width + x as usize] = value;
        Ok(())
    }

    /// Read the value at (x, y), wrapping both coordinates into range
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> T {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        self.table[y * self.width + x]
    }

    /// Row-major view of every cell
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.table
    }

    /// Iterate one row, left to right
    pub fn row(&self, y: i64) -> impl Iterator<Item = T> + '_ {
        let y = y.rem_euclid(self.height as i64) as usize;
        self.table[y * self.width..(y + 1) * self.width].iter().copied()
    }
}
