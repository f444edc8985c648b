//! Boundary discretization and element-pair geometry
//!
//! The boundary is an ordered, cyclic sequence of N nodes; element k is the
//! straight segment between node k and node (k+1) mod N, so the curve is
//! always closed. `ElementPairGeometry` holds the local quantities the
//! influence-coefficient kernels need for an ordered pair of elements:
//! collocation midpoint, endpoints, length, tangent/normal, signed
//! projections, distances and the subtended angle.

use crate::error::BemError;

/// A point in the plane
pub type Point2 = [f64; 2];

/// Minimum number of boundary nodes for a non-degenerate closed polygon
pub const MIN_BOUNDARY_NODES: usize = 3;

#[inline]
fn dot(a: Point2, b: Point2) -> f64 {
    a[0] * b[0] + a[1] * b[1]
}

#[inline]
fn sub(a: Point2, b: Point2) -> Point2 {
    [a[0] - b[0], a[1] - b[1]]
}

/// Euclidean norm of a 2D vector
#[inline]
pub fn norm(a: Point2) -> f64 {
    a[0].hypot(a[1])
}

/// Ordered, cyclic sequence of boundary nodes
///
/// Immutable after creation. Indexing is modular: `node(k)` wraps so that
/// element N-1 closes the curve back to node 0.
#[derive(Debug, Clone)]
pub struct BoundaryDiscretization {
    nodes: Vec<Point2>,
}

impl BoundaryDiscretization {
    /// Create a discretization from an ordered node sequence
    ///
    /// The nodes must be listed in the traversal order produced by the
    /// problem definition's `boundary_points`, counter-clockwise for an
    /// interior problem.
    pub fn new(nodes: Vec<Point2>) -> Result<Self, BemError> {
        if nodes.len() < MIN_BOUNDARY_NODES {
            return Err(BemError::InvalidConfiguration {
                div_num: nodes.len(),
            });
        }
        Ok(Self { nodes })
    }

    /// Number of boundary nodes (equals the number of elements)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the discretization holds no nodes (never, by construction)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node k, with modular wrap-around
    #[inline]
    pub fn node(&self, k: usize) -> Point2 {
        self.nodes[k % self.nodes.len()]
    }

    /// Midpoint of element k (the collocation point of that element)
    #[inline]
    pub fn midpoint(&self, k: usize) -> Point2 {
        let a = self.node(k);
        let b = self.node(k + 1);
        [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
    }

    /// All nodes, in traversal order
    pub fn nodes(&self) -> &[Point2] {
        &self.nodes
    }
}

/// Local geometry for an ordered pair (collocation element m, source element n)
///
/// Transient: recomputed on demand for each influence-coefficient evaluation,
/// never cached. The projections follow the classical straight-element BEM
/// notation: X along the source element tangent, Y along its normal.
#[derive(Debug, Clone)]
pub struct ElementPairGeometry {
    /// Collocation point: midpoint of element m
    pub midpoint: Point2,
    /// First endpoint of source element n
    pub x1: Point2,
    /// Second endpoint of source element n
    pub x2: Point2,
    /// Length of source element n
    pub h: f64,
    /// Unit tangent of element n, (x2 - x1) / h
    pub tangent: Point2,
    /// Unit normal of element n, the tangent rotated so that a
    /// counter-clockwise boundary keeps the row-sum identity of the
    /// double-layer matrix
    pub normal: Point2,
    /// Tangential projection of (midpoint - x1)
    pub lx1: f64,
    /// Tangential projection of (midpoint - x2)
    pub lx2: f64,
    /// Normal projection of (midpoint - x1)
    pub ly1: f64,
    /// Normal projection of (midpoint - x2)
    pub ly2: f64,
    /// Distance from the midpoint to x1
    pub r1: f64,
    /// Distance from the midpoint to x2
    pub r2: f64,
    /// Angle subtended at the midpoint between the two projection rays
    pub theta: f64,
}

impl ElementPairGeometry {
    /// Compute the pair geometry for elements (m, n), both taken modulo N
    ///
    /// Defined for all index pairs including m == n, though callers route the
    /// self-pair to closed-form singular kernels instead of the generic
    /// formulas. Fails if element n has zero length (coincident nodes).
    pub fn new(boundary: &BoundaryDiscretization, m: usize, n: usize) -> Result<Self, BemError> {
        let midpoint = boundary.midpoint(m);
        let x1 = boundary.node(n);
        let x2 = boundary.node(n + 1);

        let h = norm(sub(x2, x1));
        if h == 0.0 {
            return Err(BemError::DegenerateGeometry {
                reason: format!(
                    "boundary element {} has zero length (coincident nodes)",
                    n % boundary.len()
                ),
            });
        }

        let tangent = [(x2[0] - x1[0]) / h, (x2[1] - x1[1]) / h];
        let normal = [(x1[1] - x2[1]) / h, (x2[0] - x1[0]) / h];

        let d1 = sub(midpoint, x1);
        let d2 = sub(midpoint, x2);
        let lx1 = dot(d1, tangent);
        let lx2 = dot(d2, tangent);
        let ly1 = dot(d1, normal);
        let ly2 = dot(d2, normal);
        let r1 = norm(d1);
        let r2 = norm(d2);
        let theta = ly2.atan2(lx2) - ly1.atan2(lx1);

        Ok(Self {
            midpoint,
            x1,
            x2,
            h,
            tangent,
            normal,
            lx1,
            lx2,
            ly1,
            ly2,
            r1,
            r2,
            theta,
        })
    }
}
