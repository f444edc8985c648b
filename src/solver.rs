//! Dense direct solver
//!
//! LU factorization with partial pivoting for the dense single-layer system.
//! The influence matrices are fully populated and unsymmetric, so a general
//! dense factorization is the right tool. A singular or numerically singular
//! matrix is a fatal, typed failure; the caller decides how to react.

use ndarray::{Array1, Array2};

use crate::error::BemError;

/// Pivot magnitude below which the matrix is treated as singular
const SINGULARITY_THRESHOLD: f64 = 1e-30;

/// LU factorization of a dense square matrix
///
/// L is unit lower triangular, stored below the diagonal of `lu`; U occupies
/// the diagonal and above. `swaps[k]` is the row exchanged with row k at
/// elimination step k. The factorization can be reused for multiple
/// right-hand sides.
#[derive(Debug, Clone)]
pub struct LuFactorization {
    lu: Array2<f64>,
    swaps: Vec<usize>,
    n: usize,
}

impl LuFactorization {
    /// Factorize a square matrix with partial pivoting
    pub fn new(a: &Array2<f64>) -> Result<Self, BemError> {
        let n = a.nrows();
        debug_assert_eq!(n, a.ncols());

        let mut lu = a.clone();
        let mut swaps = vec![0usize; n];

        for k in 0..n {
            // Find pivot row
            let mut max_val = lu[[k, k]].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[[i, k]].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < SINGULARITY_THRESHOLD {
                return Err(BemError::SingularSystem { size: n });
            }

            swaps[k] = max_row;
            if max_row != k {
                for j in 0..n {
                    lu.swap([k, j], [max_row, j]);
                }
            }

            // Eliminate below the pivot, storing multipliers in the L part
            let pivot = lu[[k, k]];
            for i in (k + 1)..n {
                let mult = lu[[i, k]] / pivot;
                lu[[i, k]] = mult;
                for j in (k + 1)..n {
                    let update = mult * lu[[k, j]];
                    lu[[i, j]] -= update;
                }
            }
        }

        Ok(Self { lu, swaps, n })
    }

    /// Solve Ax = b using the precomputed factorization
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, BemError> {
        debug_assert_eq!(b.len(), self.n);
        let mut x = b.clone();

        // Replay the row swaps applied during elimination
        for k in 0..self.n {
            let swap = self.swaps[k];
            if swap != k {
                x.swap(k, swap);
            }
        }

        // Forward substitution: L y = P b
        for i in 0..self.n {
            let mut sum = x[i];
            for j in 0..i {
                sum -= self.lu[[i, j]] * x[j];
            }
            x[i] = sum;
        }

        // Backward substitution: U x = y
        for i in (0..self.n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..self.n {
                sum -= self.lu[[i, j]] * x[j];
            }
            let u_ii = self.lu[[i, i]];
            if u_ii.abs() < SINGULARITY_THRESHOLD {
                return Err(BemError::SingularSystem { size: self.n });
            }
            x[i] = sum / u_ii;
        }

        Ok(x)
    }
}

/// Solve Ax = b for a dense square A
///
/// Convenience entry combining factorization and substitution. Fails with
/// [`BemError::SingularSystem`] when A is singular.
pub fn solve_dense(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, BemError> {
    let factorization = LuFactorization::new(a)?;
    factorization.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_solve_2x2() {
        let a = array![[4.0, 1.0], [1.0, 3.0]];
        let b = array![1.0, 2.0];
        let x = solve_dense(&a, &b).expect("solve should succeed");
        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve_identity() {
        let n = 5;
        let a = Array2::from_diag(&Array1::from_elem(n, 1.0));
        let b = Array1::from_iter((1..=n).map(|i| i as f64));
        let x = solve_dense(&a, &b).expect("solve should succeed");
        for i in 0..n {
            assert_relative_eq!(x[i], b[i]);
        }
    }

    #[test]
    fn test_solve_requires_pivoting() {
        // Zero on the diagonal forces a row swap
        let a = array![[0.0, 2.0, 1.0], [1.0, 0.0, 3.0], [2.0, 1.0, 0.0]];
        let b = array![5.0, 7.0, 4.0];
        let x = solve_dense(&a, &b).expect("solve should succeed");
        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];
        assert_eq!(
            solve_dense(&a, &b).unwrap_err(),
            BemError::SingularSystem { size: 2 }
        );
    }

    #[test]
    fn test_factorization_reuse() {
        let a = array![[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let factorization = LuFactorization::new(&a).unwrap();
        for b in [array![1.0, 0.0, 0.0], array![0.0, 1.0, 2.0]] {
            let x = factorization.solve(&b).unwrap();
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-12);
            }
        }
    }
}
