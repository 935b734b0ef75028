#![allow(non_snake_case)]

//! Provides closed-form and orientation-averaged form factors for small-angle
//! X-ray and neutron scattering from simple particle shapes.
//!
//! Oriented form factors are evaluated over three equal-shaped arrays of
//! momentum-transfer components (*Q*<sub>x</sub>, *Q*<sub>y</sub>,
//! *Q*<sub>z</sub>) of any dimensionality and return complex amplitudes of the
//! same shape:
//! - Sphere
//! - Cuboid and cube
//! - Cylinder (axis along *z*)
//! - Triangular prism (axis along *z*)
//! - Truncated cube
//! - Translation phase factor, to place particles away from the origin
//!
//! Orientation-averaged amplitudes and intensities (analytic for the sphere,
//! numerical for everything else) are in [`avg`]; typed particle descriptions
//! that can serve as the model function of a fitting routine are in [`shape`];
//! instrumental resolution smearing is in [`resolution`].
//!
//! All functions are pure and removable singularities (e.g. at *Q* = 0) are
//! replaced by their analytic limits rather than producing NaN.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod special;
pub mod ff;
pub mod avg;
pub mod shape;
pub mod resolution;
pub mod utils;

pub mod docs;

/// Distinct shifts added to (*Q*<sub>x</sub>, *Q*<sub>y</sub>,
/// *Q*<sub>z</sub>) before the corner terms of [`ff::truncube`] are
/// evaluated.
pub const CORNER_SHIFT: [f64; 3] = [1e-8, 2e-8, 3e-8];

// node spread below which divided differences are summed as a Taylor series
pub(crate) const DEF_SERIES_RADIUS: f64 = 1.0;
pub(crate) const DEF_SERIES_TERMS: usize = 24;
// relative tolerance on the spacing of resolution grids
pub(crate) const DEF_GRID_RTOL: f64 = 1e-6;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr<S, D> = ndarray::ArrayBase<S, D>;
