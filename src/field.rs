//! Interior field reconstruction
//!
//! Evaluates the representation formula
//!
//! `u(x) = ∫_Γ Φ(x,y) q(y) ds_y − ∫_Γ ∂Φ/∂n_y(x,y) g(y) ds_y`
//!
//! at interior points, with `Φ = −ln r / (2π)` the logarithmic fundamental
//! solution, q the solved conjugate boundary values and g the prescribed
//! Dirichlet data. The boundary integrals are computed by sampling the kernels
//! at the boundary nodes and applying the periodic trapezoid rule over one
//! parametric period, closing each sample sequence by repeating its first
//! entry.
//!
//! The abscissas are the uniform angular grid `2πi/N`. This matches the
//! uniform-spacing boundary generators shipped here; a non-uniform generator
//! would need arc-length abscissas at the actual nodes instead.

use std::f64::consts::PI;

use ndarray::Array1;

use crate::boundary::{norm, BoundaryDiscretization, Point2};
use crate::error::BemError;
use crate::quadrature::{periodic_abscissas, trapezoid};

/// Logarithmic fundamental solution `Φ(x, y) = −ln‖x−y‖ / (2π)`
#[inline]
pub fn fundamental_solution(x: Point2, y: Point2) -> f64 {
    let r = norm([x[0] - y[0], x[1] - y[1]]);
    -r.ln() / 2.0 / PI
}

/// Normal derivative of the fundamental solution with respect to y
///
/// `∂Φ/∂n(x, y) = (x−y)·n(y) / (2π‖x−y‖²)` with n the outward unit normal
/// at the boundary point y.
#[inline]
pub fn fundamental_solution_normal_derivative(x: Point2, y: Point2, normal: Point2) -> f64 {
    let d = [x[0] - y[0], x[1] - y[1]];
    let r = norm(d);
    (d[0] * normal[0] + d[1] * normal[1]) / 2.0 / PI / (r * r)
}

/// Evaluate the interior solution at a single query point
///
/// `node_normals` are the outward unit normals at the boundary nodes, in node
/// order. The query point must lie strictly inside the domain; a point
/// coinciding with a boundary node is a fatal degenerate-geometry error, since
/// the logarithmic kernel blows up there.
pub fn compute_interior_value(
    boundary: &BoundaryDiscretization,
    node_normals: &[Point2],
    dirichlet: &Array1<f64>,
    conjugate: &Array1<f64>,
    x: Point2,
) -> Result<f64, BemError> {
    let n = boundary.len();
    debug_assert_eq!(node_normals.len(), n);
    debug_assert_eq!(dirichlet.len(), n);
    debug_assert_eq!(conjugate.len(), n);

    // Kernel samples at every boundary node
    let mut single_layer_samples = Vec::with_capacity(n + 1);
    let mut double_layer_samples = Vec::with_capacity(n + 1);
    for i in 0..n {
        let y = boundary.node(i);
        let r = norm([x[0] - y[0], x[1] - y[1]]);
        if r == 0.0 {
            return Err(BemError::DegenerateGeometry {
                reason: format!(
                    "evaluation point ({}, {}) coincides with boundary node {}",
                    x[0], x[1], i
                ),
            });
        }
        single_layer_samples.push(fundamental_solution(x, y) * conjugate[i]);
        double_layer_samples
            .push(fundamental_solution_normal_derivative(x, y, node_normals[i]) * dirichlet[i]);
    }

    // Close the sequences periodically and integrate over [0, 2π]
    single_layer_samples.push(single_layer_samples[0]);
    double_layer_samples.push(double_layer_samples[0]);
    let abscissas = periodic_abscissas(n);

    let i_u = trapezoid(&single_layer_samples, &abscissas);
    let i_w = trapezoid(&double_layer_samples, &abscissas);

    Ok(i_u - i_w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fundamental_solution_vanishes_at_unit_distance() {
        assert_relative_eq!(fundamental_solution([0.0, 0.0], [1.0, 0.0]), 0.0);
        assert_relative_eq!(fundamental_solution([0.0, 0.0], [0.0, -1.0]), 0.0);
    }

    #[test]
    fn test_fundamental_solution_radial_symmetry() {
        let a = fundamental_solution([0.0, 0.0], [0.3, 0.4]);
        let b = fundamental_solution([0.0, 0.0], [0.5, 0.0]);
        assert_relative_eq!(a, b, epsilon = 1e-14);
        // Positive inside the unit disk
        assert!(a > 0.0);
    }

    #[test]
    fn test_normal_derivative_sign() {
        // Origin observed from a unit-circle node with outward normal: the
        // vector x - y is anti-parallel to n, so the derivative is negative.
        let y = [1.0, 0.0];
        let v = fundamental_solution_normal_derivative([0.0, 0.0], y, [1.0, 0.0]);
        assert_relative_eq!(v, -1.0 / (2.0 * PI), epsilon = 1e-14);
    }

    #[test]
    fn test_normal_derivative_scales_with_distance() {
        // Along a fixed ray the derivative decays like 1/r
        let near = fundamental_solution_normal_derivative([0.5, 0.0], [1.0, 0.0], [1.0, 0.0]);
        let far = fundamental_solution_normal_derivative([0.0, 0.0], [1.0, 0.0], [1.0, 0.0]);
        assert_relative_eq!(near, 2.0 * far, epsilon = 1e-14);
    }
}
