//! Batch evaluation product and failure-path tests
//!
//! Covers the data product handed to downstream plotting (interior values
//! followed by boundary pass-through) and the fatal error paths: undersized
//! discretizations and evaluation points on the boundary.

use laplace_bem::{polar_grid, BemError, BemProblem, HarmonicCubic};

#[test]
fn test_batch_appends_boundary_pass_through() {
    let n = 16;
    let solution = BemProblem::new(n, HarmonicCubic)
        .unwrap()
        .solve()
        .unwrap();

    let interior = polar_grid(n, 4);
    let sweep = solution.evaluate_batch(&interior).unwrap();

    assert_eq!(sweep.len(), interior.len() + n);
    assert_eq!(sweep.points.len(), sweep.values.len());

    // Boundary nodes come last, with the prescribed data verbatim
    let g = solution.dirichlet_values();
    for i in 0..n {
        let idx = interior.len() + i;
        assert_eq!(sweep.points[idx], solution.boundary().node(i));
        assert_eq!(sweep.values[idx], g[i]);
    }

    // Interior values ahead of them are the computed field
    let origin = solution.evaluate_interior([0.0, 0.0]).unwrap();
    assert_eq!(sweep.values[0], origin);
}

#[test]
fn test_batch_matches_single_point_evaluation() {
    let solution = BemProblem::new(32, HarmonicCubic)
        .unwrap()
        .solve()
        .unwrap();
    let points = [[0.3, 0.2], [-0.4, 0.1], [0.0, -0.5]];
    let sweep = solution.evaluate_batch(&points).unwrap();
    for (i, &p) in points.iter().enumerate() {
        assert_eq!(sweep.values[i], solution.evaluate_interior(p).unwrap());
    }
}

#[test]
fn test_sweep_serializes_to_json() {
    let solution = BemProblem::new(8, HarmonicCubic)
        .unwrap()
        .solve()
        .unwrap();
    let sweep = solution.evaluate_batch(&[[0.2, 0.1]]).unwrap();
    let json = serde_json::to_string(&sweep).unwrap();
    let parsed: laplace_bem::FieldSweep = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), sweep.len());
    assert_eq!(parsed.values, sweep.values);
}

#[test]
fn test_undersized_discretization_rejected() {
    for div_num in [0, 1, 2] {
        let result = BemProblem::new(div_num, HarmonicCubic);
        assert_eq!(
            result.unwrap_err(),
            BemError::InvalidConfiguration { div_num }
        );
    }
}

#[test]
fn test_evaluation_on_boundary_node_is_fatal() {
    let solution = BemProblem::new(8, HarmonicCubic)
        .unwrap()
        .solve()
        .unwrap();

    // Node 0 of the unit circle is exactly (1, 0)
    let result = solution.evaluate_interior([1.0, 0.0]);
    assert!(matches!(result, Err(BemError::DegenerateGeometry { .. })));

    // The batch path surfaces the same failure instead of a NaN value
    let result = solution.evaluate_batch(&[[0.2, 0.1], [1.0, 0.0]]);
    assert!(matches!(result, Err(BemError::DegenerateGeometry { .. })));
}

#[test]
fn test_polar_grid_points_evaluate_cleanly() {
    // Every grid point is strictly interior, so the full sweep succeeds and
    // produces finite values everywhere.
    let n = 32;
    let solution = BemProblem::new(n, HarmonicCubic)
        .unwrap()
        .solve()
        .unwrap();
    let sweep = solution.evaluate_batch(&polar_grid(n, 8)).unwrap();
    for (p, v) in sweep.points.iter().zip(&sweep.values) {
        assert!(v.is_finite(), "non-finite value at ({}, {})", p[0], p[1]);
        let exact = HarmonicCubic.exact(*p);
        assert!(
            (v - exact).abs() < 5e-2,
            "field error too large at ({}, {}): {} vs {}",
            p[0],
            p[1],
            v,
            exact
        );
    }
}
