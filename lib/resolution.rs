//! Instrumental resolution.
//!
//! Measured intensities are the model intensity convolved with the
//! instrument's resolution function. Here the resolution is a Gaussian of fixed
//! width in *Q*, applied to an intensity sampled on an evenly spaced grid.
//!
//! ```
//! use ndarray as nd;
//! use formfact::{ avg, resolution::GaussianResolution };
//!
//! let q: nd::Array1<f64> = nd::Array1::linspace(0.01, 3.0, 300);
//! let ideal = avg::sphere_intensity(&q, 5.0).unwrap();
//! let res = GaussianResolution::new(0.02).unwrap();
//! let measured = res.smear(&q, &ideal).unwrap();
//! // minima of the sphere intensity are filled in
//! let k = ideal.iter().enumerate()
//!     .skip(50)
//!     .min_by(|l, r| l.1.partial_cmp(r.1).unwrap())
//!     .map(|(k, _)| k)
//!     .unwrap();
//! assert!(measured[k] > ideal[k]);
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    DEF_GRID_RTOL,
    error::{ LengthError, RError },
    utils::{ fft_convolve, uniform_spacing },
};

pub type RResult<T> = Result<T, RError>;

/// Gaussian resolution of standard deviation `sigma` in *Q*.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussianResolution {
    pub sigma: f64,
}

impl GaussianResolution {
    /// Create a new resolution function.
    ///
    /// Fails if `sigma` is negative or non-finite.
    pub fn new(sigma: f64) -> RResult<Self> {
        RError::check_sigma(sigma)?;
        Ok(Self { sigma })
    }

    fn weight(&self, dq: f64) -> f64 {
        (-0.5 * (dq / self.sigma).powi(2)).exp()
    }

    /// Convolve an intensity sampled at evenly spaced points `q` with the
    /// resolution function.
    ///
    /// The kernel is renormalized near the ends of the grid so that constant
    /// intensities are left unchanged. A zero width returns a copy of the
    /// input.
    pub fn smear<S, T>(&self, q: &Arr1<S>, intensity: &Arr1<T>)
        -> RResult<nd::Array1<f64>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        RError::check_sigma(self.sigma)?;
        LengthError::check(q, intensity)?;
        let dq
            = uniform_spacing(q, DEF_GRID_RTOL)
            .ok_or(RError::NonUniformGrid)?
            .abs();
        if self.sigma == 0.0 { return Ok(intensity.to_owned()); }

        // zero-padded to twice the length so the circular convolution never
        // wraps around
        let n = q.len();
        let len = 2 * n;
        tracing::trace!(n, sigma = self.sigma, dq, "smearing with gaussian kernel");
        let mut kernel: nd::Array1<C64> = nd::Array1::zeros(len);
        let mut signal: nd::Array1<C64> = nd::Array1::zeros(len);
        let mut ones: nd::Array1<C64> = nd::Array1::zeros(len);
        for k in 0..n {
            let w = C64::from(self.weight(k as f64 * dq));
            kernel[k] = w;
            if k > 0 { kernel[len - k] = w; }
            signal[k] = C64::from(intensity[k]);
            ones[k] = C64::from(1.0);
        }
        let conv = fft_convolve(&signal, &kernel);
        let norm = fft_convolve(&ones, &kernel);
        let smeared: nd::Array1<f64>
            = conv.iter().zip(&norm).take(n)
            .map(|(ck, nk)| ck.re / nk.re)
            .collect();
        Ok(smeared)
    }
}
