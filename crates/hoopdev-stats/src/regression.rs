//! Ordinary least squares.

use crate::matrix::{Matrix, MatrixError};

/// Least-squares coefficients `c = (XᵀX)⁻¹ Xᵀ y`.
///
/// `x` holds one observation per row; `y` is a column vector with one
/// outcome per observation. The result is a column vector with one
/// coefficient per column of `x`. No intercept column is added.
///
/// Fails with [`MatrixError::DimensionMismatch`] when `x` and `y` disagree
/// on the number of observations, and with [`MatrixError::SingularMatrix`]
/// when `XᵀX` can't be inverted (collinear columns, or fewer observations
/// than columns).
pub fn regression_coefficients(x: &Matrix, y: &Matrix) -> Result<Matrix, MatrixError> {
    if x.height() != y.height() {
        return Err(MatrixError::DimensionMismatch {
            left: x.shape(),
            right: y.shape(),
        });
    }
    log::debug!("fitting {} observations x {} columns", x.height(), x.width());

    let xt = x.transpose();
    xt.multiply(x)?.invert()?.multiply(&xt)?.multiply(y)
}

/// Convenience wrapper over [`regression_coefficients`] for row slices.
///
/// ```
/// use hoopdev_stats::regression::fit;
///
/// let rows = [[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let outcomes = [2.0, -3.0, -1.0];
/// let coefs = fit(&rows, &outcomes)?;
/// assert!((coefs[0] - 2.0).abs() < 1e-9);
/// assert!((coefs[1] + 3.0).abs() < 1e-9);
/// # Ok::<(), hoopdev_stats::matrix::MatrixError>(())
/// ```
pub fn fit<R>(rows: &[R], outcomes: &[f64]) -> Result<Vec<f64>, MatrixError>
where
    R: AsRef<[f64]>,
{
    let x = Matrix::from_rows(rows)?;
    let y = Matrix::column_vector(outcomes);
    let coefs = regression_coefficients(&x, &y)?;
    Ok(coefs.column(0).collect())
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_recovers_linear_relationship() {
        let rows = (0..40)
            .map(|i| {
                let i = f64::from(i);
                vec![i, (i * i) % 7.0 + 0.5]
            })
            .collect::<Vec<_>>();
        let outcomes = rows.iter().map(|r| 2.0 * r[0] - 3.0 * r[1]).collect::<Vec<_>>();

        let coefs = fit(&rows, &outcomes).unwrap();
        assert_eq!(coefs.len(), 2);
        assert!((coefs[0] - 2.0).abs() < 1e-8, "{coefs:?}");
        assert!((coefs[1] + 3.0).abs() < 1e-8, "{coefs:?}");
    }

    #[test]
    fn test_identical_columns_are_singular() {
        let rows = (0..10)
            .map(|i| {
                let v = f64::from(i) * 0.37 + 1.0;
                [v, v]
            })
            .collect::<Vec<_>>();
        let outcomes = vec![1.0; rows.len()];
        assert!(matches!(
            fit(&rows, &outcomes),
            Err(MatrixError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_summed_columns_are_singular_at_ratings_scale() {
        let mut rng = Pcg32::seed_from_u64(7);
        let rows = (0..2000)
            .map(|_| {
                let mut row = (0..15)
                    .map(|_| f64::from(rng.random_range(0..=100_u8)))
                    .collect::<Vec<_>>();
                row[14] = row[3] + row[7];
                row
            })
            .collect::<Vec<_>>();
        let outcomes = (0..rows.len())
            .map(|_| rng.random_range(0.0..30.0))
            .collect::<Vec<_>>();
        assert!(matches!(
            fit(&rows, &outcomes),
            Err(MatrixError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_underdetermined_is_singular() {
        assert!(matches!(
            fit(&[[1.0, 2.0]], &[3.0]),
            Err(MatrixError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_outcome_count_mismatch() {
        let x = Matrix::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();
        let y = Matrix::column_vector(&[1.0, 2.0]);
        assert!(matches!(
            regression_coefficients(&x, &y),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }
}
