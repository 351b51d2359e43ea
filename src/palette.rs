//! Planet palettes
//!
//! A palette pairs each colour slot with the weight it gets when noise is
//! discretized. A `None` slot is transparent, which lets cloud layers and
//! rings be drawn as separate bodies over a solid planet.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PlanetError, Result};

/// Ordered colours with parallel selection weights
///
/// # Example
///
/// ```rust
/// use pixel_planet::Palette;
///
/// let palette = Palette::new(vec![Some(0x1d2b53), Some(0x008751)], vec![3.0, 1.0])
///     .unwrap()
///     .with_back_color(0x000000);
/// assert_eq!(palette.len(), 2);
/// assert!(palette.has_back());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<C> {
    colors: Vec<Option<C>>,
    weights: Vec<f64>,
    back_color: Option<C>,
}

impl<C: Copy> Palette<C> {
    /// Create a palette from colour slots and their weights
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the lengths differ, the palette is
    /// empty, or any weight is negative or not finite
    pub fn new(colors: Vec<Option<C>>, weights: Vec<f64>) -> Result<Self> {
        if colors.len() != weights.len() {
            return Err(PlanetError::InvalidConfiguration(format!(
                "colors and weights must be the same length ({} vs {})",
                colors.len(),
                weights.len()
            )));
        }
        if colors.is_empty() {
            return Err(PlanetError::InvalidConfiguration(
                "palette must have at least one color".to_string(),
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(PlanetError::InvalidConfiguration(format!(
                "palette weights must be finite and non-negative (got {})",
                bad
            )));
        }
        Ok(Self {
            colors,
            weights,
            back_color: None,
        })
    }

    /// Colour used for non-zero cells on the far hemisphere
    pub fn with_back_color(mut self, color: C) -> Self {
        self.back_color = Some(color);
        self
    }

    /// Colour at palette index `index`; `None` when transparent or absent
    #[inline]
    pub fn color(&self, index: usize) -> Option<C> {
        self.colors.get(index).copied().flatten()
    }

    #[inline]
    pub fn colors(&self) -> &[Option<C>] {
        &self.colors
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn back_color(&self) -> Option<C> {
        self.back_color
    }

    /// Whether the far hemisphere has a colour to draw with
    #[inline]
    pub fn has_back(&self) -> bool {
        self.back_color.is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Palette::new(vec![Some(1u32), Some(2)], vec![1.0]);
        assert!(matches!(result, Err(PlanetError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = Palette::<u32>::new(vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Palette::new(vec![Some(1u32)], vec![-1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_transparent_slots() {
        let palette = Palette::new(vec![None, Some(7u32)], vec![1.0, 1.0]).unwrap();
        assert_eq!(palette.color(0), None);
        assert_eq!(palette.color(1), Some(7));
        assert_eq!(palette.color(2), None);
        assert!(!palette.has_back());
    }

    #[test]
    fn test_back_color() {
        let palette = Palette::new(vec![Some(1u32)], vec![1.0])
            .unwrap()
            .with_back_color(9);
        assert_eq!(palette.back_color(), Some(9));
        assert!(palette.has_back());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_palette_serialization() {
        let palette = Palette::new(vec![Some(3u32), None], vec![2.0, 1.0]).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        let restored: Palette<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(palette, restored);
    }
}
