//! Search-space bounds for the continuous engines.
//!
//! A single `(lower, upper)` pair applies identically to every
//! dimension. Positions are kept inside the box by hard clamping after
//! each move, never by rejection sampling.

use crate::error::Error;
use rand::Rng;

/// A closed interval `[lower, upper]` applied to every dimension.
///
/// # Invariant
///
/// `lower < upper`, both finite. Enforced at construction.
///
/// # Examples
///
/// ```
/// use metaswarm::bounds::Bounds;
///
/// let bounds = Bounds::new(-5.12, 5.12).unwrap();
/// assert_eq!(bounds.clamp(7.0), 5.12);
/// assert!(bounds.contains(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Creates bounds, validating `lower < upper` and finiteness.
    pub fn new(lower: f64, upper: f64) -> Result<Self, Error> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "bounds must be finite, got ({lower}, {upper})"
            )));
        }
        if lower >= upper {
            return Err(Error::InvalidConfiguration(format!(
                "bounds require lower < upper, got ({lower}, {upper})"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `true` if `v` lies inside the interval.
    pub fn contains(&self, v: f64) -> bool {
        self.lower <= v && v <= self.upper
    }

    /// Clamps a single coordinate into the interval.
    ///
    /// Non-finite values collapse to the nearest bound (`NaN` maps to
    /// the lower bound), so a clamped position is always finite.
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_nan() {
            return self.lower;
        }
        v.clamp(self.lower, self.upper)
    }

    /// Clamps every coordinate of a position in place.
    pub fn clamp_slice(&self, position: &mut [f64]) {
        for v in position.iter_mut() {
            *v = self.clamp(*v);
        }
    }

    /// Draws one coordinate uniformly from `[lower, upper)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lower..self.upper)
    }

    /// Draws a full position of `dimension` uniform coordinates.
    pub fn sample_position<R: Rng>(&self, dimension: usize, rng: &mut R) -> Vec<f64> {
        (0..dimension).map(|_| self.sample(rng)).collect()
    }
}

/// Rastrigin domain, the default search box of the continuous engines.
impl Default for Bounds {
    fn default() -> Self {
        Self {
            lower: -5.12,
            upper: 5.12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_valid() {
        let b = Bounds::new(-1.0, 1.0).unwrap();
        assert_eq!(b.lower(), -1.0);
        assert_eq!(b.upper(), 1.0);
    }

    #[test]
    fn test_new_rejects_inverted() {
        assert!(Bounds::new(1.0, -1.0).is_err());
        assert!(Bounds::new(0.0, 0.0).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Bounds::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Bounds::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_clamp() {
        let b = Bounds::new(-5.12, 5.12).unwrap();
        assert_eq!(b.clamp(10.0), 5.12);
        assert_eq!(b.clamp(-10.0), -5.12);
        assert_eq!(b.clamp(0.5), 0.5);
        assert_eq!(b.clamp(f64::INFINITY), 5.12);
        assert_eq!(b.clamp(f64::NAN), -5.12);
    }

    #[test]
    fn test_clamp_slice() {
        let b = Bounds::new(0.0, 1.0).unwrap();
        let mut pos = vec![-0.5, 0.5, 1.5];
        b.clamp_slice(&mut pos);
        assert_eq!(pos, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_sample_within_bounds() {
        let b = Bounds::new(-5.12, 5.12).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert!(b.contains(b.sample(&mut rng)));
        }
    }

    #[test]
    fn test_sample_position_dimension() {
        let b = Bounds::default();
        let mut rng = create_rng(42);
        let pos = b.sample_position(7, &mut rng);
        assert_eq!(pos.len(), 7);
        assert!(pos.iter().all(|&v| b.contains(v)));
    }

    #[test]
    fn test_default_is_rastrigin_domain() {
        let b = Bounds::default();
        assert_eq!(b.lower(), -5.12);
        assert_eq!(b.upper(), 5.12);
    }
}
