//! Orientation-averaged form factors.
//!
//! For randomly oriented particles the measured intensity depends only on
//! |*Q*|. The sphere is handled analytically; any oriented amplitude from
//! [`ff`][crate::ff] (or [`shape`][crate::shape]) can be averaged numerically
//! over a fixed, deterministic set of directions.
//!
//! ```
//! use ndarray as nd;
//! use formfact::{ avg, ff };
//!
//! let q: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 5);
//! let analytic = avg::sphere_intensity(&q, 1.0).unwrap();
//! let numeric
//!     = avg::average_intensity(&q, 200, |qx, qy, qz| ff::sphere(qx, qy, qz, 1.0))
//!     .unwrap();
//! assert!(
//!     analytic.iter().zip(&numeric)
//!         .all(|(a, n)| (a - n).abs() < 1e-9 * a.abs().max(1.0))
//! );
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr,
    Arr1,
    error::{ FFError, ParamError },
    ff::{ FFResult, fill_masked },
    utils::fibonacci_sphere,
};

// below this, 3 (sin x - x cos x) / x³ is summed as a series
const SPHERE_SERIES_MAX: f64 = 1e-2;

// 3 (sin x - x cos x) / x³ = 1 - x²/10 + x⁴/280 - ...
fn sphere_kernel(x: f64) -> f64 {
    if x.abs() < SPHERE_SERIES_MAX {
        let x2 = x * x;
        1.0 - x2 / 10.0 + x2 * x2 / 280.0
    } else {
        3.0 * (x.sin() - x * x.cos()) / x.powi(3)
    }
}

/// Orientation-averaged (isotropic) form factor of a sphere of radius `R`,
/// ```text
/// (4/3) π R³ · 3 (sin(QR) - QR cos(QR)) / (QR)³
/// ```
/// which is real and equals the sphere volume at *Q* = 0.
pub fn sphere<S, D>(q: &Arr<S, D>, R: f64) -> FFResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ParamError::positive("R", R)?;
    let qR = q.mapv(|qk| qk * R);
    let scale = 4.0 / 3.0 * PI * R.powi(3);
    Ok(fill_masked(&qR, 1.0, sphere_kernel) * scale)
}

/// Scattered intensity of a randomly oriented sphere, the square of
/// [`sphere`].
pub fn sphere_intensity<S, D>(q: &Arr<S, D>, R: f64)
    -> FFResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    Ok(sphere(q, R)?.mapv(|f| f * f))
}

// Q arrays of shape (q.len(), dirs.nrows()) holding q[i] * u[j]
fn project<S>(q: &Arr1<S>, dirs: &nd::Array2<f64>)
    -> (nd::Array2<f64>, nd::Array2<f64>, nd::Array2<f64>)
where S: nd::Data<Elem = f64>
{
    let shape = (q.len(), dirs.nrows());
    let comp = |c: usize| {
        nd::Array2::from_shape_fn(shape, |(i, j)| q[i] * dirs[[j, c]])
    };
    (comp(0), comp(1), comp(2))
}

/// Average the intensity |*F*|² of an oriented amplitude `f` over `n_dirs`
/// directions for each momentum-transfer magnitude in `q`.
///
/// Directions lie on a Fibonacci lattice over the full sphere, so results are
/// deterministic. `f` is called once with `q.len() × n_dirs` arrays.
pub fn average_intensity<S, F>(q: &Arr1<S>, n_dirs: usize, f: F)
    -> FFResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    F: Fn(&nd::Array2<f64>, &nd::Array2<f64>, &nd::Array2<f64>)
        -> FFResult<nd::Array2<C64>>,
{
    FFError::check_count(n_dirs)?;
    let (qx, qy, qz) = project(q, &fibonacci_sphere(n_dirs));
    let amp = f(&qx, &qy, &qz)?;
    Ok(amp.mapv(|a| a.norm_sqr()).sum_axis(nd::Axis(1)) / n_dirs as f64)
}

/// Average an oriented amplitude `f` (rather than its intensity) over `n_dirs`
/// directions for each momentum-transfer magnitude in `q`.
///
/// See [`average_intensity`].
pub fn average_amplitude<S, F>(q: &Arr1<S>, n_dirs: usize, f: F)
    -> FFResult<nd::Array1<C64>>
where
    S: nd::Data<Elem = f64>,
    F: Fn(&nd::Array2<f64>, &nd::Array2<f64>, &nd::Array2<f64>)
        -> FFResult<nd::Array2<C64>>,
{
    FFError::check_count(n_dirs)?;
    let (qx, qy, qz) = project(q, &fibonacci_sphere(n_dirs));
    let amp = f(&qx, &qy, &qz)?;
    Ok(amp.sum_axis(nd::Axis(1)) / C64::from(n_dirs as f64))
}
