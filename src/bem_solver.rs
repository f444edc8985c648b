//! High-level BEM problem orchestration
//!
//! A [`BemProblem`] wires the pieces together in their fixed dependency order:
//! boundary nodes from the problem definition, Dirichlet data at the nodes,
//! the dense influence matrices, and the conjugate boundary values from the
//! linear solve. The result is an immutable [`BemSolution`] that can evaluate
//! the interior field at any number of query points without re-assembly.

use ndarray::Array1;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

use crate::assembly::assemble_influence_matrices;
use crate::boundary::{BoundaryDiscretization, Point2, MIN_BOUNDARY_NODES};
use crate::error::BemError;
use crate::field::compute_interior_value;
use crate::problem_definition::ProblemDefinition;
use crate::solver::solve_dense;

/// An interior Dirichlet problem ready to be solved at a given resolution
#[derive(Debug, Clone)]
pub struct BemProblem<P> {
    div_num: usize,
    definition: P,
}

impl<P: ProblemDefinition> BemProblem<P> {
    /// Create a problem for `div_num` boundary elements
    ///
    /// Rejects resolutions below the minimum of 3 before any matrix work.
    pub fn new(div_num: usize, definition: P) -> Result<Self, BemError> {
        if div_num < MIN_BOUNDARY_NODES {
            return Err(BemError::InvalidConfiguration { div_num });
        }
        Ok(Self {
            div_num,
            definition,
        })
    }

    /// Number of boundary elements
    pub fn div_num(&self) -> usize {
        self.div_num
    }

    /// Assemble and solve, producing an immutable solution
    ///
    /// Steps run in fixed order, each depending on the previous: boundary
    /// nodes, Dirichlet data, influence matrices, conjugate values.
    pub fn solve(&self) -> Result<BemSolution, BemError> {
        let boundary = BoundaryDiscretization::new(self.definition.boundary_points(self.div_num))?;
        let n = boundary.len();

        let dirichlet = Array1::from_iter(
            boundary
                .nodes()
                .iter()
                .map(|&p| self.definition.dirichlet_value(p)),
        );
        let node_normals: Vec<Point2> = boundary
            .nodes()
            .iter()
            .map(|&p| self.definition.normal_vector(p))
            .collect();

        let (single_layer, double_layer) = assemble_influence_matrices(&boundary)?;

        // Right-hand side b = W·g, then U·q = b
        let rhs = double_layer.dot(&dirichlet);
        let conjugate = solve_dense(&single_layer, &rhs)?;

        log::info!(
            "solved {} element BEM system, max |q| = {:.6}",
            n,
            conjugate.iter().fold(0.0f64, |acc, q| acc.max(q.abs()))
        );

        Ok(BemSolution {
            boundary,
            node_normals,
            single_layer,
            double_layer,
            dirichlet,
            conjugate,
        })
    }
}

/// Solved BEM problem: discretization, influence matrices and boundary data
///
/// Fully immutable; field evaluation only reads it, so evaluations at distinct
/// points are independent and the batch path runs them in parallel.
#[derive(Debug, Clone)]
pub struct BemSolution {
    boundary: BoundaryDiscretization,
    node_normals: Vec<Point2>,
    single_layer: ndarray::Array2<f64>,
    double_layer: ndarray::Array2<f64>,
    dirichlet: Array1<f64>,
    conjugate: Array1<f64>,
}

impl BemSolution {
    /// The boundary discretization the solution was built on
    pub fn boundary(&self) -> &BoundaryDiscretization {
        &self.boundary
    }

    /// Single-layer influence matrix U
    pub fn single_layer(&self) -> &ndarray::Array2<f64> {
        &self.single_layer
    }

    /// Double-layer influence matrix W
    pub fn double_layer(&self) -> &ndarray::Array2<f64> {
        &self.double_layer
    }

    /// Prescribed Dirichlet values g at the boundary nodes
    pub fn dirichlet_values(&self) -> &Array1<f64> {
        &self.dirichlet
    }

    /// Solved conjugate boundary values q
    pub fn conjugate_values(&self) -> &Array1<f64> {
        &self.conjugate
    }

    /// Evaluate the solution at one interior point
    ///
    /// Fails with [`BemError::DegenerateGeometry`] if the point coincides with
    /// a boundary node.
    pub fn evaluate_interior(&self, x: Point2) -> Result<f64, BemError> {
        compute_interior_value(
            &self.boundary,
            &self.node_normals,
            &self.dirichlet,
            &self.conjugate,
            x,
        )
    }

    /// Evaluate a batch of interior points and append the boundary data
    ///
    /// Returns the data product handed to downstream visualization: the
    /// interior points followed by the boundary nodes, with the computed
    /// interior values followed by the prescribed Dirichlet values
    /// (pass-through, no evaluation error at the boundary). Interior points
    /// are evaluated in parallel.
    pub fn evaluate_batch(&self, interior_points: &[Point2]) -> Result<FieldSweep, BemError> {
        let interior_values = interior_points
            .par_iter()
            .map(|&x| self.evaluate_interior(x))
            .collect::<Result<Vec<f64>, BemError>>()?;

        let mut points = interior_points.to_vec();
        points.extend_from_slice(self.boundary.nodes());
        let mut values = interior_values;
        values.extend(self.dirichlet.iter().copied());

        Ok(FieldSweep { points, values })
    }
}

/// Evaluation points and solution values, in matching order
///
/// The sole data product consumed by plotting or reporting collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSweep {
    /// Evaluation points: interior points, then boundary nodes
    pub points: Vec<Point2>,
    /// Solution values at the corresponding points
    pub values: Vec<f64>,
}

impl FieldSweep {
    /// Number of point/value pairs
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the sweep holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Write the sweep as pretty-printed JSON
    pub fn save_json<Q: AsRef<Path>>(&self, path: Q) -> serde_json::Result<()> {
        let file = std::fs::File::create(path).map_err(serde_json::Error::io)?;
        serde_json::to_writer_pretty(file, self)
    }
}

/// Polar sampling grid over the unit disk
///
/// Points `(r/r_div)·(cos 2πk/div_num, sin 2πk/div_num)` for r = 1..r_div and
/// k = 0..div_num, with the origin prepended. The grid the reference driver
/// feeds to [`BemSolution::evaluate_batch`] for unit-disk problems.
pub fn polar_grid(div_num: usize, r_div: usize) -> Vec<Point2> {
    let mut points = vec![[0.0, 0.0]];
    for r_num in 1..r_div {
        let radius = r_num as f64 / r_div as f64;
        for th_num in 0..div_num {
            let phi = 2.0 * PI * th_num as f64 / div_num as f64;
            points.push([radius * phi.cos(), radius * phi.sin()]);
        }
    }
    points
}
