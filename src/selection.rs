//! Weighted discrete selection
//!
//! Inverse-transform sampling over a cumulative weight table. The planet bake
//! feeds it noise values instead of random draws, which turns continuous noise
//! into palette bands whose thickness follows the weights.

use crate::error::{PlanetError, Result};
use crate::random::SeededRandom;

/// Index of the weight bucket `sample` falls into
///
/// `threshold = sample * sum(weights)`; the weights are scanned in order and
/// the first `i` with `threshold <= weights[i]` wins, with `weights[i]`
/// subtracted from the threshold on every miss.
///
/// # Errors
///
/// Returns `OutOfRange` if `sample` is not in [0, 1), if any weight is
/// negative or not finite, if the weights do not sum to a positive total, or
/// if the scan runs out of buckets.
///
/// # Example
///
/// ```rust
/// use pixel_planet::select_index;
///
/// assert_eq!(select_index(&[2.0, 1.0, 1.0], 0.49).unwrap(), 0);
/// assert_eq!(select_index(&[2.0, 1.0, 1.0], 0.51).unwrap(), 1);
/// ```
pub fn select_index(weights: &[f64], sample: f64) -> Result<usize> {
    if !(0.0..1.0).contains(&sample) {
        return Err(PlanetError::OutOfRange(format!(
            "selection sample must be in [0, 1) (got {})",
            sample
        )));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(PlanetError::OutOfRange(format!(
            "weights must be finite and non-negative (got {})",
            bad
        )));
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(PlanetError::OutOfRange(format!(
            "weights must sum to a positive total (got {})",
            total
        )));
    }

    let mut threshold = sample * total;
    for (i, &weight) in weights.iter().enumerate() {
        if threshold <= weight {
            return Ok(i);
        }
        threshold -= weight;
    }

    Err(PlanetError::OutOfRange(format!(
        "sample {} did not resolve to any of {} weights",
        sample,
        weights.len()
    )))
}

/// [`select_index`] with the sample drawn from `rng`
pub fn select_random_index(weights: &[f64], rng: &mut SeededRandom) -> Result<usize> {
    select_index(weights, rng.random())
}

/// Item whose weight bucket `sample` falls into
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `items` and `weights` differ in length,
/// otherwise the errors of [`select_index`].
pub fn weighted_choice<'a, T>(items: &'a [T], weights: &[f64], sample: f64) -> Result<&'a T> {
    if items.len() != weights.len() {
        return Err(PlanetError::InvalidConfiguration(format!(
            "items and weights must be the same length ({} vs {})",
            items.len(),
            weights.len()
        )));
    }
    select_index(weights, sample).map(|i| &items[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights() {
        let w = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(select_index(&w, 0.0).unwrap(), 0);
        assert_eq!(select_index(&w, 0.99).unwrap(), 3);
        assert_eq!(select_index(&w, 0.5).unwrap(), 1);
    }

    #[test]
    fn test_boundary_at_first_weight() {
        let w = [2.0, 1.0, 1.0];
        assert_eq!(select_index(&w, 0.49).unwrap(), 0);
        assert_eq!(select_index(&w, 0.5).unwrap(), 0);
        assert_eq!(select_index(&w, 0.51).unwrap(), 1);
        assert_eq!(select_index(&w, 0.8).unwrap(), 2);
    }

    #[test]
    fn test_zero_weight_bucket_is_skipped() {
        let w = [1.0, 0.0, 1.0];
        assert_eq!(select_index(&w, 0.75).unwrap(), 2);
    }

    #[test]
    fn test_sample_out_of_range() {
        let w = [1.0, 1.0];
        for sample in [1.0, 1.5, -0.1, f64::NAN] {
            assert!(
                matches!(select_index(&w, sample), Err(PlanetError::OutOfRange(_))),
                "sample {} should be rejected",
                sample
            );
        }
    }

    #[test]
    fn test_degenerate_weights() {
        assert!(matches!(select_index(&[], 0.2), Err(PlanetError::OutOfRange(_))));
        assert!(matches!(select_index(&[0.0, 0.0], 0.2), Err(PlanetError::OutOfRange(_))));
        assert!(matches!(select_index(&[1.0, -1.0], 0.2), Err(PlanetError::OutOfRange(_))));
    }

    #[test]
    fn test_random_index_is_reproducible() {
        let w = [3.0, 1.0, 2.0];
        let mut a = SeededRandom::new(4);
        let mut b = SeededRandom::new(4);
        for _ in 0..50 {
            let i = select_random_index(&w, &mut a).unwrap();
            assert!(i < w.len());
            assert_eq!(i, select_random_index(&w, &mut b).unwrap());
        }
    }

    #[test]
    fn test_weighted_choice() {
        let items = ["sea", "land", "ice"];
        assert_eq!(*weighted_choice(&items, &[1.0, 1.0, 2.0], 0.6).unwrap(), "ice");
        assert!(matches!(
            weighted_choice(&items, &[1.0, 1.0], 0.6),
            Err(PlanetError::InvalidConfiguration(_))
        ));
    }
}
