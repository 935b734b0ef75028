//! Miscellaneous tools.

use std::f64::consts::PI;
use ndarray as nd;
use rustfft as fft;
use num_complex::Complex64 as C64;
use crate::Arr1;

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = x.len();
    let mut f: Vec<C64> = x.iter().copied().collect();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(&mut f);
    nd::Array1::from(f)
}

/// Perform the one-dimensional, complex-valued inverse FFT.
pub fn ifft<S>(f: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = f.len();
    let mut x: Vec<C64> = f.iter().copied().collect();
    let mut plan = fft::FftPlanner::new();
    let ifft_plan = plan.plan_fft_inverse(n);
    ifft_plan.process(&mut x);
    let n = n as f64;
    x.iter_mut().for_each(|xk| { *xk /= n; });
    nd::Array1::from(x)
}

/// Circular convolution of two equal-length complex arrays via the FFT.
///
/// *Panics if the arrays have unequal length*.
pub fn fft_convolve<S, T>(a: &Arr1<S>, b: &Arr1<T>) -> nd::Array1<C64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    assert_eq!(a.len(), b.len());
    let prod = fft(a) * fft(b);
    ifft(&prod)
}

/// Return the spacing of an evenly spaced coordinate array, or `None` if the
/// array has fewer than two points or is not evenly spaced to within a
/// relative tolerance `rtol`.
pub fn uniform_spacing<S>(x: &Arr1<S>, rtol: f64) -> Option<f64>
where S: nd::Data<Elem = f64>
{
    let n = x.len();
    if n < 2 { return None; }
    let dx = (x[n - 1] - x[0]) / (n - 1) as f64;
    if !dx.is_finite() || dx == 0.0 { return None; }
    x.iter().zip(x.iter().skip(1))
        .all(|(xk, xkp1)| ((xkp1 - xk) - dx).abs() <= rtol * dx.abs())
        .then_some(dx)
}

/// Generate `n` unit vectors evenly distributed over the sphere on a Fibonacci
/// lattice, returned as an `n × 3` array.
///
/// The set is deterministic, so averages computed with it are reproducible.
pub fn fibonacci_sphere(n: usize) -> nd::Array2<f64> {
    let golden = PI * (3.0 - 5.0_f64.sqrt());
    let mut dirs: nd::Array2<f64> = nd::Array2::zeros((n, 3));
    for (k, mut u) in dirs.outer_iter_mut().enumerate() {
        // z at the centers of n equal-area bands
        let z = 1.0 - (2.0 * k as f64 + 1.0) / n as f64;
        let rho = (1.0 - z * z).max(0.0).sqrt();
        let phi = golden * k as f64;
        u[0] = rho * phi.cos();
        u[1] = rho * phi.sin();
        u[2] = z;
    }
    dirs
}
