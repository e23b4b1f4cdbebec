use std::ops::Index;

use crate::common::{MiniLearnError, Result};


/// A pair of a feature matrix `X` (`n` rows, `d` columns)
/// and a target vector `y` (`n` entries).
/// The `i`th row of `X` is labeled by `y[i]`.
/// 
/// A tree borrows a [`Sample`] while training
/// and never keeps it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    rows: Vec<Vec<f64>>,
    target: Vec<f64>,
    n_sample: usize,
    n_feature: usize,
}


impl Sample {
    /// Construct a new instance of [`Sample`]
    /// from the rows of the feature matrix and the target values.
    /// 
    /// Returns `Err` if `rows.len() != target.len()`
    /// or the rows have different lengths.
    pub fn new(rows: Vec<Vec<f64>>, target: Vec<f64>) -> Result<Self> {
        if rows.len() != target.len() {
            return Err(MiniLearnError::ShapeMismatch {
                rows: rows.len(),
                targets: target.len(),
            });
        }

        let n_feature = rows.first()
            .map(|row| row.len())
            .unwrap_or(0);
        if let Some((row, x)) = rows.iter()
            .enumerate()
            .find(|(_, x)| x.len() != n_feature)
        {
            return Err(MiniLearnError::RaggedRow {
                row,
                expected: n_feature,
                got: x.len(),
            });
        }

        let n_sample = rows.len();
        Ok(Self { rows, target, n_sample, n_feature, })
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns `true` if the sample has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }


    /// Returns the slice of target values.
    #[inline]
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the `i`th row of the feature matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i][..]
    }


    /// Returns an iterator over the rows of the feature matrix.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.rows.iter().map(|row| &row[..])
    }
}


impl Index<usize> for Sample {
    type Output = [f64];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        self.row(i)
    }
}
