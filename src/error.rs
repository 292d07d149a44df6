//! Error types shared by all engines.
//!
//! Every failure in this crate is either a configuration mistake or a
//! violation of the objective contract. Both are detected eagerly —
//! configurations before the first generation, objective inputs at the
//! point of evaluation — and neither is retried.

use thiserror::Error;

/// Errors produced by engine construction and objective evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A configuration parameter is out of range or inconsistent.
    ///
    /// Raised by `validate()` on the config types and by engine
    /// constructors, always before any generation runs.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A candidate's length does not match the objective's dimension.
    #[error("invalid dimension: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Dimension the objective was configured with.
        expected: usize,
        /// Length of the offending candidate.
        actual: usize,
    },

    /// A candidate is malformed in a way other than its length
    /// (empty, or containing non-finite elements).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::InvalidConfiguration("swarm_size must be at least 1".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: swarm_size must be at least 1"
        );

        let e = Error::InvalidDimension {
            expected: 2,
            actual: 3,
        };
        assert_eq!(e.to_string(), "invalid dimension: expected 2, got 3");

        let e = Error::InvalidInput("candidate is empty".into());
        assert_eq!(e.to_string(), "invalid input: candidate is empty");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<Error>();
    }
}
