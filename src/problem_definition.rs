//! Pluggable problem definitions
//!
//! A problem definition bundles the three external collaborators of the BEM
//! engine: the boundary parametrization, the outward normal field and the
//! Dirichlet data. Swapping the definition changes the boundary shape or the
//! boundary condition without touching the engine.
//!
//! The unit-circle fixtures below use harmonic functions with known values
//! everywhere, so tests can compare the reconstructed interior field against
//! the exact solution.

use std::f64::consts::PI;

use crate::boundary::Point2;

/// External collaborators of the BEM engine for one concrete problem
///
/// `boundary_points` must traverse the boundary counter-clockwise (interior to
/// the left), the orientation under which the double-layer matrix rows sum to
/// one. `normal_vector` is the outward unit normal and is consumed wherever
/// the fundamental solution's normal derivative is evaluated.
pub trait ProblemDefinition {
    /// Discretized boundary: `div_num` points in traversal order
    fn boundary_points(&self, div_num: usize) -> Vec<Point2>;

    /// Outward unit normal at a boundary point
    fn normal_vector(&self, point: Point2) -> Point2;

    /// Prescribed Dirichlet value at a boundary point
    fn dirichlet_value(&self, point: Point2) -> f64;
}

/// Uniformly spaced points on the unit circle, counter-clockwise from (1, 0)
fn unit_circle_points(div_num: usize) -> Vec<Point2> {
    (0..div_num)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / div_num as f64;
            [phi.cos(), phi.sin()]
        })
        .collect()
}

/// Radial outward normal of the unit circle
fn unit_circle_normal(point: Point2) -> Point2 {
    let phi = point[1].atan2(point[0]);
    [phi.cos(), phi.sin()]
}

/// Dirichlet problem on the unit disk with `u = x1³ - 3·x1·x2²`
///
/// The real part of z³, harmonic on the whole plane. This is the reference
/// validation problem: the exact interior solution is known, so convergence of
/// the reconstructed field can be measured directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonicCubic;

impl HarmonicCubic {
    /// Exact solution value at any point of the plane
    pub fn exact(&self, point: Point2) -> f64 {
        point[0].powi(3) - 3.0 * point[0] * point[1] * point[1]
    }

    /// Gradient of the exact solution
    pub fn gradient(&self, point: Point2) -> Point2 {
        [
            3.0 * (point[0] * point[0] - point[1] * point[1]),
            -6.0 * point[0] * point[1],
        ]
    }

    /// Exact outward normal derivative on the boundary, grad(u) · n
    pub fn normal_derivative(&self, point: Point2) -> f64 {
        let g = self.gradient(point);
        let n = self.normal_vector(point);
        g[0] * n[0] + g[1] * n[1]
    }
}

impl ProblemDefinition for HarmonicCubic {
    fn boundary_points(&self, div_num: usize) -> Vec<Point2> {
        unit_circle_points(div_num)
    }

    fn normal_vector(&self, point: Point2) -> Point2 {
        unit_circle_normal(point)
    }

    fn dirichlet_value(&self, point: Point2) -> f64 {
        self.exact(point)
    }
}

/// Dirichlet problem on the unit disk with `u = x1`
///
/// The simplest non-constant harmonic function; its conjugate boundary value
/// on the unit circle is cos(φ).
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonicLinear;

impl HarmonicLinear {
    /// Exact solution value at any point of the plane
    pub fn exact(&self, point: Point2) -> f64 {
        point[0]
    }
}

impl ProblemDefinition for HarmonicLinear {
    fn boundary_points(&self, div_num: usize) -> Vec<Point2> {
        unit_circle_points(div_num)
    }

    fn normal_vector(&self, point: Point2) -> Point2 {
        unit_circle_normal(point)
    }

    fn dirichlet_value(&self, point: Point2) -> f64 {
        self.exact(point)
    }
}
