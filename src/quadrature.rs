//! Sampled numerical quadrature
//!
//! The interior-field evaluator integrates boundary kernels sampled at the
//! nodes over one parametric period. For periodic integrands sampled on a
//! uniform grid the trapezoid rule is spectrally accurate, which is what makes
//! the node-sampled representation formula converge.

/// Trapezoid rule over sampled values at given abscissas
///
/// `values` and `abscissas` must have the same length, at least 2. The
/// abscissas need not be uniformly spaced.
pub fn trapezoid(values: &[f64], abscissas: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), abscissas.len());
    debug_assert!(values.len() >= 2);

    let mut total = 0.0;
    for i in 0..values.len() - 1 {
        total += (values[i] + values[i + 1]) * (abscissas[i + 1] - abscissas[i]) / 2.0;
    }
    total
}

/// Uniform abscissas `2πi/n` for i = 0..=n, covering one full period
///
/// The closing abscissa 2π pairs with the repeated first sample of a periodic
/// sequence. Valid only for boundary generators with uniform parametric
/// spacing; a non-uniform generator would need arc-length abscissas instead.
pub fn periodic_abscissas(n: usize) -> Vec<f64> {
    (0..=n)
        .map(|i| 2.0 * std::f64::consts::PI * i as f64 / n as f64)
        .collect()
}
