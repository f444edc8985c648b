//! # laplace-bem: boundary element solver for the 2D Laplace equation
//!
//! Solves the interior Dirichlet problem on a simply-connected planar domain
//! by collocation BEM: the boundary is discretized into straight segments,
//! dense single-layer (U) and double-layer (W) influence matrices are
//! assembled from closed-form kernel integrals, the conjugate boundary values
//! are obtained from `U·q = W·g`, and the interior field is reconstructed by
//! periodic integration of the boundary representation formula.
//!
//! ## Architecture
//!
//! - `error`: fatal error taxonomy (configuration, geometry, singular system)
//! - `problem_definition`: swappable boundary shape / boundary data trait
//! - `boundary`: cyclic node sequence and element-pair geometry
//! - `assembly`: dense influence-matrix assembly (rayon parallel fill)
//! - `solver`: dense LU solve with partial pivoting
//! - `quadrature`: sampled trapezoid rule for periodic boundary integrals
//! - `field`: interior-point reconstruction from the solved boundary data
//! - `bem_solver`: high-level orchestration and the batch evaluation product
//!
//! ## Example
//!
//! ```
//! use laplace_bem::{BemProblem, HarmonicCubic};
//!
//! let solution = BemProblem::new(64, HarmonicCubic)?.solve()?;
//! let value = solution.evaluate_interior([0.3, 0.2])?;
//! assert!((value - HarmonicCubic.exact([0.3, 0.2])).abs() < 1e-4);
//! # Ok::<(), laplace_bem::BemError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembly;
pub mod bem_solver;
pub mod boundary;
pub mod error;
pub mod field;
pub mod problem_definition;
pub mod quadrature;
pub mod solver;

// Re-exports for convenience
pub use assembly::assemble_influence_matrices;
pub use bem_solver::{polar_grid, BemProblem, BemSolution, FieldSweep};
pub use boundary::{BoundaryDiscretization, ElementPairGeometry, Point2};
pub use error::BemError;
pub use problem_definition::{HarmonicCubic, HarmonicLinear, ProblemDefinition};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
