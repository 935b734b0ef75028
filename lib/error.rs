//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when the three momentum-transfer coordinate arrays passed to a form
/// factor do not share an identical shape.
///
/// No broadcasting is ever performed.
#[derive(Debug, Error)]
#[error("coordinate arrays must share one shape; got {0:?}, {1:?}, and {2:?}")]
pub struct ShapeError(pub Vec<usize>, pub Vec<usize>, pub Vec<usize>);

impl ShapeError {
    pub(crate) fn check<S, T, U, D>(
        qx: &nd::ArrayBase<S, D>,
        qy: &nd::ArrayBase<T, D>,
        qz: &nd::ArrayBase<U, D>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        let same = qx.shape() == qy.shape() && qx.shape() == qz.shape();
        if !same {
            tracing::debug!(
                x = ?qx.shape(), y = ?qy.shape(), z = ?qz.shape(),
                "rejected mismatched coordinate arrays"
            );
        }
        same.then_some(())
            .ok_or_else(|| {
                Self(qx.shape().to_vec(), qy.shape().to_vec(), qz.shape().to_vec())
            })
    }
}

/// Returned when a shape parameter lies outside of its physical domain.
#[derive(Debug, Error)]
#[error("parameter `{name}` must be {expected}; got {value}")]
pub struct ParamError {
    /// Name of the offending parameter.
    pub name: &'static str,
    /// Value that was passed.
    pub value: f64,
    /// Human-readable description of the valid domain.
    pub expected: &'static str,
}

impl ParamError {
    fn check(name: &'static str, value: f64, expected: &'static str, ok: bool)
        -> Result<(), Self>
    {
        if !ok {
            tracing::debug!(name, value, expected, "rejected shape parameter");
        }
        ok.then_some(()).ok_or(Self { name, value, expected })
    }

    /// Lengths: finite and strictly positive.
    pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), Self> {
        Self::check(
            name, value, "finite and > 0", value.is_finite() && value > 0.0)
    }

    /// Offsets: any finite number.
    pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), Self> {
        Self::check(name, value, "finite", value.is_finite())
    }

    /// Fractions: the closed interval [0, 1].
    pub(crate) fn unit_interval(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        Self::check(
            name, value, "within [0, 1]", (0.0..=1.0).contains(&value))
    }
}

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from form factor functions in [`ff`][crate::ff],
/// [`avg`][crate::avg], and [`shape`][crate::shape].
#[derive(Debug, Error)]
pub enum FFError {
    /// [`ShapeError`]
    #[error("shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeError),

    /// [`ParamError`]
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    /// Returned when a sample count (e.g. number of averaging directions) is
    /// zero.
    #[error("sample counts must be greater than 0; got {0}")]
    BadCount(usize),
}

impl FFError {
    pub(crate) fn check_count(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadCount(n))
    }
}

/// Returned from functions in [`resolution`][crate::resolution].
#[derive(Debug, Error)]
pub enum RError {
    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// Returned when the Q grid has fewer than two points or is not evenly
    /// spaced.
    #[error("resolution smearing requires an evenly spaced grid of at least 2 points")]
    NonUniformGrid,

    /// Returned when a negative or non-finite width is encountered.
    #[error("resolution width must be finite and non-negative; got {0}")]
    BadSigma(f64),
}

impl RError {
    pub(crate) fn check_sigma(sigma: f64) -> Result<(), Self> {
        (sigma.is_finite() && sigma >= 0.0)
            .then_some(())
            .ok_or(Self::BadSigma(sigma))
    }
}
