//! Generators of synthetic point clouds for visual demonstrations.
//! 
//! Every generator returns `n` points as `n` rows of length `d`
//! and draws its randomness from the given `rng`,
//! so a seeded `rng` gives reproducible data.
//! 
//! # Example
//! ```
//! use rand::prelude::*;
//! use minilearn::synthetic;
//! 
//! let mut rng = StdRng::seed_from_u64(1234);
//! let ring = synthetic::gen_spherical_data(&mut rng, 2, 100, &[0.0, 0.0], 3.0)
//!     .unwrap();
//! assert_eq!(ring.len(), 100);
//! ```
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::common::{
    checker,
    utils,
    MiniLearnError,
    Result,
};

use std::f64::consts::PI;

mod linalg;


/// Returns `n` points sampled uniformly
/// from the surface of the sphere of radius `r` centered at `mu`.
pub fn gen_spherical_data<R>(
    rng: &mut R,
    d: usize,
    n: usize,
    mu: &[f64],
    r: f64,
) -> Result<Vec<Vec<f64>>>
    where R: Rng + ?Sized,
{
    checker::dimension(mu, d)?;
    checker::non_negative("r", r)?;

    let points = (0..n).map(|_| {
            let x = standard_normal(rng, d);
            let norm = utils::norm(&x);
            x.into_iter()
                .zip(mu)
                .map(|(xi, m)| xi / norm * r + m)
                .collect()
        })
        .collect();
    Ok(points)
}


/// Returns `n` points sampled from the surface of the ellipse
/// of covariance `cov` centered at `mu`.
/// The points of the unit sphere are mapped by
/// the Cholesky factor of `cov`,
/// which must be symmetric positive definite.
pub fn gen_elliptical_data<R>(
    rng: &mut R,
    d: usize,
    n: usize,
    mu: &[f64],
    cov: &[Vec<f64>],
) -> Result<Vec<Vec<f64>>>
    where R: Rng + ?Sized,
{
    checker::dimension(mu, d)?;
    checker::square_matrix(cov, d)?;
    let lower = linalg::cholesky(cov)?;

    let origin = vec![0f64; d];
    let points = gen_spherical_data(rng, d, n, &origin, 1f64)?
        .into_iter()
        .map(|x| {
            linalg::row_times(&x, &lower)
                .into_iter()
                .zip(mu)
                .map(|(xi, m)| xi + m)
                .collect()
        })
        .collect();
    Ok(points)
}


/// Returns `n` points sampled from `N(mu, sigma^2 I)`.
pub fn gen_spherical_normal_data<R>(
    rng: &mut R,
    d: usize,
    n: usize,
    mu: &[f64],
    sigma: f64,
) -> Result<Vec<Vec<f64>>>
    where R: Rng + ?Sized,
{
    checker::dimension(mu, d)?;
    checker::non_negative("sigma", sigma)?;
    let normal = Normal::new(0f64, sigma)
        .map_err(|e| MiniLearnError::InvalidParameter("sigma", e.to_string()))?;

    let points = (0..n).map(|_| {
            mu.iter()
                .map(|m| normal.sample(rng) + m)
                .collect()
        })
        .collect();
    Ok(points)
}


/// Returns `n` points sampled from `N(mu, cov)`.
/// `cov` must be symmetric positive definite.
pub fn gen_normal_data<R>(
    rng: &mut R,
    d: usize,
    n: usize,
    mu: &[f64],
    cov: &[Vec<f64>],
) -> Result<Vec<Vec<f64>>>
    where R: Rng + ?Sized,
{
    checker::dimension(mu, d)?;
    checker::square_matrix(cov, d)?;
    let lower = linalg::cholesky(cov)?;

    let points = (0..n).map(|_| {
            let z = standard_normal(rng, d);
            linalg::times_column(&lower, &z)
                .into_iter()
                .zip(mu)
                .map(|(xi, m)| xi + m)
                .collect()
        })
        .collect();
    Ok(points)
}


/// Returns `n` points on a half circle of radius `r` centered at `mu`,
/// in the manner of `make_moons`.
/// The angles are evenly spaced over `[0, π]`.
/// The points lie on the upper half (`y >= 0` before the shift),
/// or on the lower half if `flipped` is `true`.
/// 
/// Only the plane is supported, so `d` must be `2`.
pub fn gen_moon_data(
    d: usize,
    n: usize,
    mu: &[f64],
    r: f64,
    flipped: bool,
) -> Result<Vec<Vec<f64>>>
{
    if d != 2 {
        return Err(MiniLearnError::InvalidParameter(
            "d", format!("moons live in the plane. got d = {d}")
        ));
    }
    checker::dimension(mu, d)?;
    checker::non_negative("r", r)?;

    let step = if n > 1 { PI / (n - 1) as f64 } else { 0f64 };
    let points = (0..n).map(|k| {
            let angle = step * k as f64;
            let y = if flipped {
                -angle.sin().abs()
            } else {
                angle.sin().abs()
            };
            vec![angle.cos() * r + mu[0], y * r + mu[1]]
        })
        .collect();
    Ok(points)
}


#[inline]
fn standard_normal<R>(rng: &mut R, d: usize) -> Vec<f64>
    where R: Rng + ?Sized,
{
    (0..d).map(|_| StandardNormal.sample(rng))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_spherical_radius() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mu = [1.0, -2.0, 0.5];
        let points = gen_spherical_data(&mut rng, 3, 50, &mu, 2.0).unwrap();
        assert_eq!(50, points.len());
        for x in points {
            let dist = x.iter()
                .zip(&mu)
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>()
                .sqrt();
            assert!((dist - 2.0).abs() < 1e-9, "distance is {dist}.");
        }
    }

    #[test]
    fn test_spherical_rejects_wrong_center() {
        let mut rng = StdRng::seed_from_u64(1234);
        let res = gen_spherical_data(&mut rng, 3, 5, &[0.0, 0.0], 1.0);
        assert!(matches!(
            res,
            Err(MiniLearnError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_spherical_rejects_negative_radius() {
        let mut rng = StdRng::seed_from_u64(1234);
        let res = gen_spherical_data(&mut rng, 2, 5, &[0.0, 0.0], -1.0);
        assert!(res.is_err());
    }

    #[test]
    fn test_elliptical_lies_on_ellipse() {
        // With `cov = diag(4, 1)` the Cholesky factor is `diag(2, 1)`,
        // so the points satisfy (x / 2)^2 + y^2 = 1.
        let mut rng = StdRng::seed_from_u64(7);
        let cov = vec![vec![4.0, 0.0], vec![0.0, 1.0]];
        let points = gen_elliptical_data(&mut rng, 2, 30, &[0.0, 0.0], &cov)
            .unwrap();
        for x in points {
            let v = (x[0] / 2.0).powi(2) + x[1].powi(2);
            assert!((v - 1.0).abs() < 1e-9, "got {v}.");
        }
    }

    #[test]
    fn test_elliptical_rejects_indefinite_covariance() {
        let mut rng = StdRng::seed_from_u64(7);
        let cov = vec![vec![1.0, 0.0], vec![0.0, -1.0]];
        let res = gen_elliptical_data(&mut rng, 2, 3, &[0.0, 0.0], &cov);
        assert!(matches!(res, Err(MiniLearnError::NotPositiveDefinite)));
    }

    #[test]
    fn test_spherical_normal_zero_sigma() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = gen_spherical_normal_data(&mut rng, 2, 4, &[1.0, 2.0], 0.0)
            .unwrap();
        assert!(points.iter().all(|x| x == &vec![1.0, 2.0]));
    }

    #[test]
    fn test_spherical_normal_mean() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = 20_000;
        let points = gen_spherical_normal_data(&mut rng, 2, n, &[3.0, -1.0], 0.5)
            .unwrap();
        let mean_x = points.iter().map(|x| x[0]).sum::<f64>() / n as f64;
        let mean_y = points.iter().map(|x| x[1]).sum::<f64>() / n as f64;
        assert!((mean_x - 3.0).abs() < 0.05, "mean x is {mean_x}.");
        assert!((mean_y + 1.0).abs() < 0.05, "mean y is {mean_y}.");
    }

    #[test]
    fn test_normal_covariance() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 50_000;
        let cov = vec![vec![2.0, 0.8], vec![0.8, 1.0]];
        let points = gen_normal_data(&mut rng, 2, n, &[0.0, 0.0], &cov)
            .unwrap();
        let c01 = points.iter().map(|x| x[0] * x[1]).sum::<f64>() / n as f64;
        let c00 = points.iter().map(|x| x[0] * x[0]).sum::<f64>() / n as f64;
        assert!((c01 - 0.8).abs() < 0.1, "cov[0][1] is {c01}.");
        assert!((c00 - 2.0).abs() < 0.1, "cov[0][0] is {c00}.");
    }

    #[test]
    fn test_moon_upper_and_lower() {
        let upper = gen_moon_data(2, 25, &[0.0, 0.0], 1.0, false).unwrap();
        assert!(upper.iter().all(|x| x[1] >= 0.0));

        let lower = gen_moon_data(2, 25, &[0.0, 0.0], 1.0, true).unwrap();
        assert!(lower.iter().all(|x| x[1] <= 0.0));
    }

    #[test]
    fn test_moon_end_points() {
        let moon = gen_moon_data(2, 3, &[1.0, 1.0], 2.0, false).unwrap();
        assert_eq!(vec![3.0, 1.0], moon[0]);
        assert!((moon[1][0] - 1.0).abs() < 1e-12);
        assert_eq!(3.0, moon[1][1]);
        assert!((moon[2][0] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_moon_rejects_higher_dimension() {
        let res = gen_moon_data(3, 5, &[0.0, 0.0, 0.0], 1.0, false);
        assert!(res.is_err());
    }
}
