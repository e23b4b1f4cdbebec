//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data
use super::error::{MiniLearnError, Result};


/// Check whether `vector` has dimension `dim`.
#[inline(always)]
pub(crate) fn dimension(vector: &[f64], dim: usize) -> Result<()> {
    if vector.len() != dim {
        return Err(MiniLearnError::DimensionMismatch {
            expected: dim,
            got: vector.len(),
        });
    }
    Ok(())
}


/// Check whether `matrix` is a `dim x dim` matrix.
#[inline(always)]
pub(crate) fn square_matrix(matrix: &[Vec<f64>], dim: usize) -> Result<()> {
    if matrix.len() != dim {
        return Err(MiniLearnError::DimensionMismatch {
            expected: dim,
            got: matrix.len(),
        });
    }
    matrix.iter()
        .try_for_each(|row| dimension(row, dim))
}


/// Check whether `value` is finite and non-negative.
#[inline(always)]
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if !(value.is_finite() && value >= 0f64) {
        return Err(MiniLearnError::InvalidParameter(
            name,
            format!("must be finite and non-negative. got {value}")
        ));
    }
    Ok(())
}


/// Check whether `value` is positive.
#[inline(always)]
pub(crate) fn positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(MiniLearnError::InvalidParameter(
            name, "must be positive. got 0".into()
        ));
    }
    Ok(())
}
