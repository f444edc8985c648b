//! Influence-coefficient matrix assembly
//!
//! Builds the dense N×N single-layer (U) and double-layer (W) influence
//! matrices for a straight-element collocation discretization of the
//! logarithmic fundamental solution. Off-diagonal entries use closed-form line
//! integrals evaluated at the collocation midpoint; diagonal entries use the
//! analytic self-influence formulas, which is what sidesteps the logarithmic
//! singularity at coincident points.
//!
//! Every (m, n) cell is an independent pure computation over the immutable
//! node sequence, so the fill is a rayon parallel map over the flattened index
//! grid written into preallocated matrices.

use std::f64::consts::PI;

use ndarray::Array2;
use rayon::prelude::*;

use crate::boundary::{BoundaryDiscretization, ElementPairGeometry};
use crate::error::BemError;

/// Single-layer influence coefficient U[m][n]
///
/// For m == n the closed-form self-influence `(1 - ln(h/2))·h/(2π)` of a
/// straight segment is used; otherwise the closed-form line integral of the
/// logarithmic kernel at an external collocation point.
pub fn single_layer_coefficient(
    boundary: &BoundaryDiscretization,
    m: usize,
    n: usize,
) -> Result<f64, BemError> {
    let geom = ElementPairGeometry::new(boundary, m, n)?;

    if m % boundary.len() == n % boundary.len() {
        return Ok((1.0 - (geom.h / 2.0).ln()) * geom.h / 2.0 / PI);
    }

    if geom.r1 == 0.0 || geom.r2 == 0.0 {
        // The collocation midpoint fell on an endpoint of element n; only a
        // degenerate node sequence can produce this.
        return Err(BemError::DegenerateGeometry {
            reason: format!(
                "collocation point of element {} coincides with an endpoint of element {}",
                m % boundary.len(),
                n % boundary.len()
            ),
        });
    }

    Ok(
        (geom.lx2 * geom.r2.ln() - geom.lx1 * geom.r1.ln() + geom.h - geom.ly1 * geom.theta)
            / 2.0
            / PI,
    )
}

/// Double-layer influence coefficient W[m][n]
///
/// The diagonal is the jump relation value 0.5; off-diagonal entries are the
/// subtended angle scaled by 2π.
pub fn double_layer_coefficient(
    boundary: &BoundaryDiscretization,
    m: usize,
    n: usize,
) -> Result<f64, BemError> {
    if m % boundary.len() == n % boundary.len() {
        return Ok(0.5);
    }
    let geom = ElementPairGeometry::new(boundary, m, n)?;
    Ok(geom.theta / 2.0 / PI)
}

/// Assemble the dense single- and double-layer influence matrices
///
/// Returns `(U, W)`, both N×N and immutable thereafter. Fails on degenerate
/// geometry (zero-length elements); the failure carries the offending element
/// index.
pub fn assemble_influence_matrices(
    boundary: &BoundaryDiscretization,
) -> Result<(Array2<f64>, Array2<f64>), BemError> {
    let n = boundary.len();
    log::debug!("assembling {n}x{n} influence matrices");

    let cells = (0..n * n)
        .into_par_iter()
        .map(|idx| {
            let (row, col) = (idx / n, idx % n);
            let u = single_layer_coefficient(boundary, row, col)?;
            let w = double_layer_coefficient(boundary, row, col)?;
            Ok((u, w))
        })
        .collect::<Result<Vec<(f64, f64)>, BemError>>()?;

    let mut single_layer = Array2::zeros((n, n));
    let mut double_layer = Array2::zeros((n, n));
    for (idx, (u, w)) in cells.into_iter().enumerate() {
        single_layer[[idx / n, idx % n]] = u;
        double_layer[[idx / n, idx % n]] = w;
    }

    Ok((single_layer, double_layer))
}
