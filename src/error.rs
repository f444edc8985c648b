//! Error types for BEM problem construction and field evaluation
//!
//! All variants are fatal for the enclosing computation: a discretization is
//! deterministic, so retrying with identical input cannot change the outcome.
//! Errors are propagated as `Result` values rather than poisoning downstream
//! results with NaN.

use thiserror::Error;

/// Errors raised while assembling or evaluating a BEM problem
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BemError {
    /// Discretization request below the minimum of 3 boundary nodes
    #[error("invalid discretization: {div_num} boundary nodes requested, minimum is 3")]
    InvalidConfiguration {
        /// Requested number of boundary nodes
        div_num: usize,
    },

    /// Coincident boundary nodes or an evaluation point on the boundary
    #[error("degenerate boundary geometry: {reason}")]
    DegenerateGeometry {
        /// Description of the degenerate configuration
        reason: String,
    },

    /// The single-layer influence matrix is singular or nearly singular
    #[error("singular single-layer influence matrix ({size} boundary elements)")]
    SingularSystem {
        /// Number of boundary elements in the failed system
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = BemError::InvalidConfiguration { div_num: 2 };
        assert!(err.to_string().contains("2 boundary nodes"));

        let err = BemError::SingularSystem { size: 64 };
        assert!(err.to_string().contains("64"));
    }
}
