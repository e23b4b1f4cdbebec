//! Dense matrix helpers used by the generators.
use crate::common::{MiniLearnError, Result};


/// Returns the lower triangular matrix `L`
/// that satisfies `cov = L L^T`.
/// Only the lower triangle of `cov` is read.
pub(crate) fn cholesky(cov: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let dim = cov.len();
    let mut lower = vec![vec![0f64; dim]; dim];

    for i in 0..dim {
        for j in 0..=i {
            let s = (0..j).map(|k| lower[i][k] * lower[j][k])
                .sum::<f64>();

            if i == j {
                let diag = cov[i][i] - s;
                if !(diag > 0f64) {
                    return Err(MiniLearnError::NotPositiveDefinite);
                }
                lower[i][j] = diag.sqrt();
            } else {
                lower[i][j] = (cov[i][j] - s) / lower[j][j];
            }
        }
    }
    Ok(lower)
}


/// Returns the row vector `x M`.
#[inline]
pub(crate) fn row_times(x: &[f64], matrix: &[Vec<f64>]) -> Vec<f64> {
    let dim = matrix.first().map_or(0, |row| row.len());
    (0..dim).map(|j| {
            x.iter()
                .zip(matrix)
                .map(|(xi, row)| xi * row[j])
                .sum::<f64>()
        })
        .collect()
}


/// Returns the column vector `M x`.
#[inline]
pub(crate) fn times_column(matrix: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    matrix.iter()
        .map(|row| crate::common::utils::inner_product(row, x))
        .collect()
}
