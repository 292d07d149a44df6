//! The objective-function contract consumed by the continuous engines.
//!
//! Engines never see the mathematical formula behind an objective —
//! only a callable taking a fixed-length real vector and returning a
//! scalar. Lower values are better; maximization problems supply an
//! objective that negates (or otherwise rewrites) their score.
//!
//! Evaluation is side-effect free and safe to run concurrently across
//! one generation, which is what the `parallel` feature relies on.

use crate::error::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A pure fitness function over a fixed-dimension real search space.
///
/// Implementors provide [`dimension`](Objective::dimension) and the raw
/// [`value`](Objective::value); engines call the provided
/// [`evaluate`](Objective::evaluate), which enforces the input contract
/// before delegating.
///
/// # Implementing
///
/// ```
/// use metaswarm::objective::Objective;
///
/// struct Sphere {
///     dimension: usize,
/// }
///
/// impl Objective for Sphere {
///     fn dimension(&self) -> usize {
///         self.dimension
///     }
///
///     fn value(&self, candidate: &[f64]) -> f64 {
///         candidate.iter().map(|x| x * x).sum()
///     }
/// }
///
/// let sphere = Sphere { dimension: 2 };
/// assert_eq!(sphere.evaluate(&[3.0, 4.0]).unwrap(), 25.0);
/// assert!(sphere.evaluate(&[1.0]).is_err());
/// ```
pub trait Objective: Send + Sync {
    /// The candidate length this objective accepts.
    fn dimension(&self) -> usize;

    /// Computes the raw fitness of a well-formed candidate.
    ///
    /// Only called through [`evaluate`](Objective::evaluate), which has
    /// already checked length and finiteness.
    fn value(&self, candidate: &[f64]) -> f64;

    /// Validates the candidate and computes its fitness.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the candidate is empty or contains
    ///   a non-finite element.
    /// - [`Error::InvalidDimension`] if its length differs from
    ///   [`dimension`](Objective::dimension).
    fn evaluate(&self, candidate: &[f64]) -> Result<f64, Error> {
        if candidate.is_empty() {
            return Err(Error::InvalidInput("candidate is empty".into()));
        }
        if candidate.len() != self.dimension() {
            return Err(Error::InvalidDimension {
                expected: self.dimension(),
                actual: candidate.len(),
            });
        }
        if let Some(bad) = candidate.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "candidate contains non-finite element {bad}"
            )));
        }
        Ok(self.value(candidate))
    }
}

/// Adapts a plain closure into an [`Objective`].
///
/// # Examples
///
/// ```
/// use metaswarm::objective::{FnObjective, Objective};
///
/// let sphere = FnObjective::new(2, |x: &[f64]| x.iter().map(|v| v * v).sum());
/// assert_eq!(sphere.dimension(), 2);
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
/// ```
pub struct FnObjective<F> {
    dimension: usize,
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    /// Wraps `f` as an objective over `dimension`-length candidates.
    pub fn new(dimension: usize, f: F) -> Self {
        Self { dimension, f }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn value(&self, candidate: &[f64]) -> f64 {
        (self.f)(candidate)
    }
}

/// Evaluates a whole generation, short-circuiting on the first error.
///
/// With the `parallel` feature, candidates are evaluated across rayon
/// workers; results land in candidate order either way, so the
/// "evaluate all, then compare all" phase ordering is unaffected.
pub(crate) fn evaluate_population<O: Objective>(
    objective: &O,
    candidates: &[Vec<f64>],
) -> Result<Vec<f64>, Error> {
    #[cfg(feature = "parallel")]
    {
        candidates
            .par_iter()
            .map(|c| objective.evaluate(c))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        candidates.iter().map(|c| objective.evaluate(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> FnObjective<impl Fn(&[f64]) -> f64 + Send + Sync> {
        FnObjective::new(2, |x: &[f64]| x.iter().map(|v| v * v).sum())
    }

    #[test]
    fn test_evaluate_ok() {
        assert_eq!(sphere().evaluate(&[3.0, 4.0]).unwrap(), 25.0);
    }

    #[test]
    fn test_empty_candidate_is_invalid_input() {
        // The original implementation returned a -1 sentinel here; an
        // empty candidate is a contract violation, not a fitness.
        let err = sphere().evaluate(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = sphere().evaluate(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_non_finite_element() {
        let err = sphere().evaluate(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        let err = sphere().evaluate(&[f64::INFINITY, 0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_evaluate_population_order() {
        let obj = sphere();
        let candidates = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]];
        let fitness = evaluate_population(&obj, &candidates).unwrap();
        assert_eq!(fitness, vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_evaluate_population_propagates_error() {
        let obj = sphere();
        let candidates = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(evaluate_population(&obj, &candidates).is_err());
    }
}
