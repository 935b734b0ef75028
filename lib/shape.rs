//! Typed descriptions of particles and particle assemblies.
//!
//! A [`Shape`] bundles the parameters of one of the closed-form amplitudes in
//! [`ff`], a [`Particle`] places a shape in real space, and an [`Assembly`]
//! sums the amplitudes of several particles coherently. None of these hold any
//! state beyond their parameters, so they can be rebuilt from a parameter
//! vector and evaluated as the model function of a least-squares fit.
//!
//! ```
//! use ndarray as nd;
//! use formfact::shape::{ Assembly, Particle, Shape };
//!
//! // two touching spheres along z
//! let dimer = Assembly::new(vec![
//!     Particle::at(Shape::Sphere { r: 1.0 }, [0.0, 0.0, -1.0]),
//!     Particle::at(Shape::Sphere { r: 1.0 }, [0.0, 0.0,  1.0]),
//! ]);
//! let qx: nd::Array1<f64> = nd::Array1::zeros(2);
//! let qy: nd::Array1<f64> = nd::Array1::zeros(2);
//! let qz = nd::array![0.0, std::f64::consts::FRAC_PI_2];
//! let i = dimer.intensity(&qx, &qy, &qz).unwrap();
//! assert!((i[0] - dimer.volume().powi(2)).abs() < 1e-9);
//! // the two spheres are out of phase at Qz = π/2
//! assert!(i[1] < 1e-20);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    Arr,
    error::ParamError,
    ff::{ self, FFResult },
};

/// A single particle shape centered on the origin.
///
/// See the correspondingly named functions in [`ff`] for conventions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// Sphere of radius `r`.
    Sphere { r: f64 },
    /// Cuboid with edges `a`, `b`, `c`.
    Cuboid { a: f64, b: f64, c: f64 },
    /// Cube with edge `a`.
    Cube { a: f64 },
    /// Cylinder of radius `r` and height `h` along *z*.
    Cylinder { r: f64, h: f64 },
    /// Triangular prism of edge `a` and height `h` along *z*.
    Prism { a: f64, h: f64 },
    /// Cube of edge `a` with corners truncated to degree `tau`.
    TruncCube { a: f64, tau: f64 },
}

impl Shape {
    /// Check all parameters against their physical domains.
    pub fn validate(&self) -> Result<(), ParamError> {
        match *self {
            Self::Sphere { r } => ParamError::positive("r", r),
            Self::Cuboid { a, b, c } => {
                ParamError::positive("a", a)?;
                ParamError::positive("b", b)?;
                ParamError::positive("c", c)
            },
            Self::Cube { a } => ParamError::positive("a", a),
            Self::Cylinder { r, h } => {
                ParamError::positive("r", r)?;
                ParamError::positive("h", h)
            },
            Self::Prism { a, h } => {
                ParamError::positive("a", a)?;
                ParamError::positive("h", h)
            },
            Self::TruncCube { a, tau } => {
                ParamError::positive("a", a)?;
                ParamError::unit_interval("tau", tau)
            },
        }
    }

    /// Value of the amplitude at *Q* = 0.
    ///
    /// This is the particle volume for every shape except the cuboid family,
    /// whose `a sinc(Q a)` convention gives `a b c`.
    pub fn volume(&self) -> f64 {
        match *self {
            Self::Sphere { r } => 4.0 / 3.0 * PI * r.powi(3),
            Self::Cuboid { a, b, c } => a * b * c,
            Self::Cube { a } => a.powi(3),
            Self::Cylinder { r, h } => PI * r.powi(2) * h,
            Self::Prism { a, h } => 3.0_f64.sqrt() / 4.0 * a.powi(2) * h,
            Self::TruncCube { a, tau } => a.powi(3) * (1.0 - tau.powi(3) / 6.0),
        }
    }

    /// Evaluate the oriented amplitude.
    pub fn amplitude<S, T, U, D>(
        &self,
        qx: &Arr<S, D>,
        qy: &Arr<T, D>,
        qz: &Arr<U, D>,
    ) -> FFResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        match *self {
            Self::Sphere { r } => ff::sphere(qx, qy, qz, r),
            Self::Cuboid { a, b, c } => ff::cuboid(qx, qy, qz, a, b, c),
            Self::Cube { a } => ff::cube(qx, qy, qz, a),
            Self::Cylinder { r, h } => ff::cylinder(qx, qy, qz, r, h),
            Self::Prism { a, h } => ff::prism(qx, qy, qz, a, h),
            Self::TruncCube { a, tau } => ff::truncube(qx, qy, qz, a, tau),
        }
    }
}

/// A [`Shape`] displaced to `offset` in real space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub shape: Shape,
    pub offset: [f64; 3],
}

impl Particle {
    /// A particle at the origin.
    pub fn new(shape: Shape) -> Self { Self { shape, offset: [0.0; 3] } }

    /// A particle at `offset`.
    pub fn at(shape: Shape, offset: [f64; 3]) -> Self { Self { shape, offset } }

    /// Evaluate the displaced amplitude, the shape amplitude times the
    /// [translation phase][ff::translate].
    pub fn amplitude<S, T, U, D>(
        &self,
        qx: &Arr<S, D>,
        qy: &Arr<T, D>,
        qz: &Arr<U, D>,
    ) -> FFResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        let amp = self.shape.amplitude(qx, qy, qz)?;
        if self.offset == [0.0; 3] { return Ok(amp); }
        let [x, y, z] = self.offset;
        Ok(amp * ff::translate(qx, qy, qz, x, y, z)?)
    }
}

/// A collection of particles scattering coherently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assembly {
    pub particles: Vec<Particle>,
}

impl Assembly {
    pub fn new(particles: Vec<Particle>) -> Self { Self { particles } }

    /// Add a particle.
    pub fn push(&mut self, particle: Particle) -> &mut Self {
        self.particles.push(particle);
        self
    }

    /// Total particle volume (amplitude at *Q* = 0).
    pub fn volume(&self) -> f64 {
        self.particles.iter().map(|p| p.shape.volume()).sum()
    }

    /// Coherent sum of all particle amplitudes. An empty assembly scatters
    /// nothing.
    pub fn amplitude<S, T, U, D>(
        &self,
        qx: &Arr<S, D>,
        qy: &Arr<T, D>,
        qz: &Arr<U, D>,
    ) -> FFResult<nd::Array<C64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        crate::error::ShapeError::check(qx, qy, qz)?;
        let mut total: nd::Array<C64, D>
            = nd::Array::from_elem(qx.raw_dim(), C64::zero());
        for particle in self.particles.iter() {
            total += &particle.amplitude(qx, qy, qz)?;
        }
        Ok(total)
    }

    /// Scattered intensity |*F*|² of the assembly.
    pub fn intensity<S, T, U, D>(
        &self,
        qx: &Arr<S, D>,
        qy: &Arr<T, D>,
        qz: &Arr<U, D>,
    ) -> FFResult<nd::Array<f64, D>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        Ok(self.amplitude(qx, qy, qz)?.mapv(|f| f.norm_sqr()))
    }
}

impl FromIterator<Particle> for Assembly {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = Particle>
    {
        Self { particles: iter.into_iter().collect() }
    }
}
