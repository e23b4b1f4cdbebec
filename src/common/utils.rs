//! This file provides some small vector operations.


/// Returns the inner product of `u` and `v`.
#[inline(always)]
pub(crate) fn inner_product(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Returns the Euclidean norm of `v`.
#[inline(always)]
pub(crate) fn norm(v: &[f64]) -> f64 {
    inner_product(v, v).sqrt()
}


/// Returns the mean of `values[i]` over `indices`.
/// Returns `NaN` if `indices` is empty.
#[inline(always)]
pub(crate) fn mean_over(values: &[f64], indices: &[usize]) -> f64 {
    let total = indices.iter()
        .map(|&i| values[i])
        .sum::<f64>();
    total / indices.len() as f64
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_product_01() {
        let res = inner_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(32.0, res, "expected 32, got {res}.");
    }

    #[test]
    fn test_norm_01() {
        let res = norm(&[3.0, 4.0]);
        assert_eq!(5.0, res, "expected 5, got {res}.");
    }

    #[test]
    fn test_mean_over_01() {
        let values = [1.0, 2.0, 3.0, 10.0];
        let res = mean_over(&values, &[0, 1, 2]);
        assert_eq!(2.0, res, "expected 2, got {res}.");
    }

    #[test]
    fn test_mean_over_empty() {
        let res = mean_over(&[1.0], &[]);
        assert!(res.is_nan(), "expected NaN, got {res}.");
    }
}
