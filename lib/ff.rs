//! Oriented form factors of simple particle shapes.
//!
//! Every function takes three equal-shaped arrays of momentum-transfer
//! components plus scalar shape parameters and returns an array of complex
//! amplitudes of the same shape. Shapes are centered on the origin; use
//! [`translate`] to move them.
//!
//! ```
//! use ndarray as nd;
//! use formfact::ff;
//!
//! let qx = nd::array![0.0, 0.1, 0.2];
//! let qy: nd::Array1<f64> = nd::Array1::zeros(3);
//! let qz: nd::Array1<f64> = nd::Array1::zeros(3);
//! let f = ff::cuboid(&qx, &qy, &qz, 2.0, 3.0, 4.0).unwrap();
//! assert_eq!(f[0].re, 24.0);
//! assert!(f[1].re < 24.0 && f[2].re < f[1].re);
//! ```
//!
//! Most definitions follow R. Lazzari, *IsGISAXS: a program for grazing-incidence
//! small-angle X-ray scattering analysis of supported islands*, J. Appl.
//! Cryst. **35**, 406 (2002). Along each Cartesian axis the amplitudes use the
//! convention `a sinc(Q a)`, with `sinc(x) = sin(x) / x`.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr,
    CORNER_SHIFT,
    avg,
    error::{ FFError, ParamError, ShapeError },
    special::{ exp_divdiff, j1_over_x, sinc },
};

pub type FFResult<T> = Result<T, FFError>;

// the eight corners of a cube, as sign vectors
const CORNERS: [[f64; 3]; 8] = [
    [ 1.0,  1.0,  1.0],
    [-1.0, -1.0, -1.0],
    [-1.0,  1.0,  1.0],
    [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0,  1.0],
    [-1.0,  1.0, -1.0],
    [ 1.0,  1.0, -1.0],
    [-1.0, -1.0,  1.0],
];

/// Allocate an array filled with `limit`, then overwrite only the entries
/// where `x` is nonzero with `f(x)`.
///
/// `limit` must be the analytic limit of `f` at zero.
pub(crate) fn fill_masked<S, D, F>(x: &Arr<S, D>, limit: f64, f: F)
    -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
    F: Fn(f64) -> f64,
{
    let mask: nd::Array<bool, D> = x.mapv(|xk| xk != 0.0);
    let mut out: nd::Array<f64, D> = nd::Array::from_elem(x.raw_dim(), limit);
    nd::Zip::from(&mut out).and(&mask).and(x)
        .for_each(|o, &safe, &xk| { if safe { *o = f(xk); } });
    out
}

// L sinc(Q L) along a single axis
fn axis_term<S, D>(q: &Arr<S, D>, len: f64) -> nd::Array<f64, D>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let arg = q.mapv(|qk| qk * len);
    fill_masked(&arg, 1.0, sinc) * len
}

/// Phase factor `exp(i (Qx x + Qy y + Qz z))` translating a particle to the
/// real-space position `(x, y, z)`.
///
/// Multiply with any other form factor to displace it; sums of displaced
/// amplitudes describe assemblies of particles.
pub fn translate<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    x: f64,
    y: f64,
    z: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check(qx, qy, qz)?;
    ParamError::finite("x", x)?;
    ParamError::finite("y", y)?;
    ParamError::finite("z", z)?;
    let phase: nd::Array<C64, D>
        = nd::Zip::from(qx).and(qy).and(qz)
        .map_collect(|&qxk, &qyk, &qzk| {
            C64::new(0.0, qxk * x + qyk * y + qzk * z).exp()
        });
    Ok(phase)
}

/// Form factor of a sphere of radius `R`.
///
/// Depends only on |*Q*|; see [`avg::sphere`].
pub fn sphere<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    R: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check(qx, qy, qz)?;
    let q: nd::Array<f64, D>
        = nd::Zip::from(qx).and(qy).and(qz)
        .map_collect(|&qxk, &qyk, &qzk| {
            (qxk.powi(2) + qyk.powi(2) + qzk.powi(2)).sqrt()
        });
    Ok(avg::sphere(&q, R)?.mapv(C64::from))
}

/// Form factor of a cuboid with edge parameters `a`, `b`, `c` along *x*, *y*,
/// and *z*.
///
/// Equal to `a b c` at *Q* = 0.
pub fn cuboid<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    a: f64,
    b: f64,
    c: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check(qx, qy, qz)?;
    ParamError::positive("a", a)?;
    ParamError::positive("b", b)?;
    ParamError::positive("c", c)?;
    let ffx = axis_term(qx, a);
    let ffy = axis_term(qy, b);
    let ffz = axis_term(qz, c);
    Ok((ffx * ffy * ffz).mapv(C64::from))
}

/// Form factor of a cube; identical to [`cuboid`] with all three edges equal
/// to `a`.
pub fn cube<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    a: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    cuboid(qx, qy, qz, a, a, a)
}

/// Form factor of a cylinder of radius `R` and height `h` with its axis along
/// *z*.
///
/// The radial term `2π R² J1(Qr R) / (Qr R)` takes its limit `π R²` at
/// `Qr = 0`, so that the amplitude at *Q* = 0 is the volume `π R² h`.
pub fn cylinder<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    R: f64,
    h: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check(qx, qy, qz)?;
    ParamError::positive("R", R)?;
    ParamError::positive("h", h)?;
    let qr_R: nd::Array<f64, D>
        = nd::Zip::from(qx).and(qy)
        .map_collect(|&qxk, &qyk| (qxk.powi(2) + qyk.powi(2)).sqrt() * R);
    let ffr = fill_masked(&qr_R, 0.5, j1_over_x);
    let ffr_scale = 2.0 * PI * R.powi(2);
    let ffz = axis_term(qz, h);
    Ok((ffr * ffz * ffr_scale).mapv(C64::from))
}

/// Form factor of a prism of height `h` with its axis along *z* and an
/// equilateral triangular cross section of edge `a`, one edge parallel to *x*
/// and the centroid on the axis.
///
/// The cross section is transformed exactly, so there are no singular lines in
/// the *Qx*-*Qy* plane; the amplitude at *Q* = 0 is `√3 a² h / 4`.
pub fn prism<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    a: f64,
    h: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ShapeError::check(qx, qy, qz)?;
    ParamError::positive("a", a)?;
    ParamError::positive("h", h)?;
    let area = 3.0_f64.sqrt() / 4.0 * a.powi(2);
    let mask: nd::Array<bool, D>
        = nd::Zip::from(qx).and(qy)
        .map_collect(|&qxk, &qyk| qxk != 0.0 || qyk != 0.0);
    let mut ffxy: nd::Array<C64, D>
        = nd::Array::from_elem(qx.raw_dim(), C64::from(area));
    nd::Zip::from(&mut ffxy).and(&mask).and(qx).and(qy)
        .for_each(|f, &safe, &qxk, &qyk| {
            if safe { *f = triangle(qxk, qyk, a, area); }
        });
    let ffz = axis_term(qz, h).mapv(C64::from);
    Ok(ffxy * ffz)
}

// 2 A exp[i q·v₀, i q·v₁, i q·v₂] over the triangle's vertices
fn triangle(qx: f64, qy: f64, a: f64, area: f64) -> C64 {
    let r = a / 3.0_f64.sqrt();
    let verts: [(f64, f64); 3] = [
        (-a / 2.0, -r / 2.0),
        ( a / 2.0, -r / 2.0),
        ( 0.0,      r      ),
    ];
    let nodes: Vec<C64>
        = verts.iter()
        .map(|(vx, vy)| C64::new(0.0, qx * vx + qy * vy))
        .collect();
    exp_divdiff(&nodes) * (2.0 * area)
}

/// Form factor of a cube of edge `a` with all eight corners truncated to
/// degree `tau` in [0, 1].
///
/// For `tau = 0` this is exactly [`cube`]. Otherwise, the scattering of the
/// eight corner tetrahedra[^1] is subtracted from the full cube, evaluated in
/// the same axis convention as [`cuboid`] so that the amplitude at *Q* = 0 is
/// the truncated volume `a³ (1 - tau³ / 6)`; `tau = 1` gives the
/// cuboctahedron.
///
/// The corner sum is evaluated at coordinates shifted by [`CORNER_SHIFT`], so
/// results carry a relative error on the order of the shift.
///
/// [^1]: R. W. Hendricks, J. Schelten, and W. Schmatz, Philos. Mag. **30**,
/// 819 (1974).
pub fn truncube<S, T, U, D>(
    qx: &Arr<S, D>,
    qy: &Arr<T, D>,
    qz: &Arr<U, D>,
    a: f64,
    tau: f64,
) -> FFResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    ParamError::unit_interval("tau", tau)?;
    let mut fc = cube(qx, qy, qz, a)?;
    if tau == 0.0 {
        tracing::trace!("truncube: no truncation, returning cube");
        return Ok(fc);
    }
    let b = tau * a;
    let [sx, sy, sz] = CORNER_SHIFT;
    nd::Zip::from(&mut fc).and(qx).and(qy).and(qz)
        .for_each(|f, &qxk, &qyk, &qzk| {
            *f -= corner_sum(qxk + sx, qyk + sy, qzk + sz, a, b) / 8.0;
        });
    Ok(fc)
}

fn corner_sum(qx: f64, qy: f64, qz: f64, a: f64, b: f64) -> C64 {
    CORNERS.iter()
        .map(|[s1, s2, s3]| {
            let phase = C64::new(0.0, a * (s1 * qx + s2 * qy + s3 * qz)).exp();
            phase * corner(-s1 * qx, -s2 * qy, -s3 * qz, b)
        })
        .sum()
}

/// Amplitude of the corner tetrahedron spanned by the origin and `b` along each
/// positive axis.
///
/// Algebraically equal to
/// ```text
/// i (A + B + C - D)
///
/// A = exp(i b Qx) / (Qx (Qx - Qy) (Qx - Qz))
/// B = exp(i b Qy) / (Qy (Qy - Qx) (Qy - Qz))
/// C = exp(i b Qz) / (Qz (Qz - Qx) (Qz - Qy))
/// D = 1 / (Qx Qy Qz)
/// ```
/// but evaluated as a divided difference so that it stays finite and accurate
/// where components vanish or coincide.
pub(crate) fn corner(qx: f64, qy: f64, qz: f64, b: f64) -> C64 {
    let nodes = [
        C64::new(0.0, 0.0),
        C64::new(0.0, b * qx),
        C64::new(0.0, b * qy),
        C64::new(0.0, b * qz),
    ];
    exp_divdiff(&nodes) * b.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use crate::special::j1;

    fn grid() -> (nd::Array2<f64>, nd::Array2<f64>, nd::Array2<f64>) {
        let qx = nd::Array2::from_shape_fn((5, 4), |(i, j)| 0.3 * i as f64 - 0.2 * j as f64);
        let qy = nd::Array2::from_shape_fn((5, 4), |(i, j)| 0.1 * (i * j) as f64 - 0.5);
        let qz = nd::Array2::from_shape_fn((5, 4), |(i, j)| 0.7 - 0.15 * (i + j) as f64);
        (qx, qy, qz)
    }

    fn zeros() -> (nd::Array1<f64>, nd::Array1<f64>, nd::Array1<f64>) {
        (nd::Array1::zeros(1), nd::Array1::zeros(1), nd::Array1::zeros(1))
    }

    #[test]
    fn translate_is_unit_phase() {
        let (qx, qy, qz) = grid();
        let t = translate(&qx, &qy, &qz, 1.0, -2.0, 0.5).unwrap();
        t.iter().for_each(|tk| assert_abs_diff_eq!(tk.norm(), 1.0, epsilon = 1e-14));
        let expected = C64::new(0.0, qx[[2, 1]] - 2.0 * qy[[2, 1]] + 0.5 * qz[[2, 1]]).exp();
        assert_abs_diff_eq!((t[[2, 1]] - expected).norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn translate_rejects_infinite_offset() {
        let (qx, qy, qz) = zeros();
        let res = translate(&qx, &qy, &qz, f64::NAN, 0.0, 0.0);
        assert!(matches!(res, Err(FFError::InvalidParameter(_))));
    }

    #[test]
    fn volumes_at_origin() {
        let (qx, qy, qz) = zeros();
        let R: f64 = 1.5;
        let sph = sphere(&qx, &qy, &qz, R).unwrap();
        assert_eq!(sph[0].re, 4.0 / 3.0 * PI * R.powi(3));
        assert_eq!(cuboid(&qx, &qy, &qz, 2.0, 3.0, 4.0).unwrap()[0].re, 24.0);
        assert_eq!(cube(&qx, &qy, &qz, 2.0).unwrap()[0].re, 8.0);
        assert_relative_eq!(
            cylinder(&qx, &qy, &qz, 2.0, 3.0).unwrap()[0].re,
            PI * 4.0 * 3.0,
            max_relative = 1e-15,
        );
        assert_relative_eq!(
            prism(&qx, &qy, &qz, 2.0, 3.0).unwrap()[0].re,
            3.0_f64.sqrt() * 3.0,
            max_relative = 1e-15,
        );
    }

    #[test]
    fn cube_is_cuboid() {
        let (qx, qy, qz) = grid();
        let c = cube(&qx, &qy, &qz, 1.7).unwrap();
        let cc = cuboid(&qx, &qy, &qz, 1.7, 1.7, 1.7).unwrap();
        assert_eq!(c, cc);
    }

    #[test]
    fn cuboid_is_separable() {
        let (qx, qy, qz) = grid();
        let f = cuboid(&qx, &qy, &qz, 1.0, 2.0, 3.0).unwrap();
        let (x, y, z) = (qx[[3, 2]], qy[[3, 2]], qz[[3, 2]]);
        let expected
            = x.sin() / x * (2.0 * y).sin() / y * (3.0 * z).sin() / z;
        assert_relative_eq!(f[[3, 2]].re, expected, max_relative = 1e-12);
        assert_eq!(f[[3, 2]].im, 0.0);
    }

    #[test]
    fn cylinder_matches_closed_form() {
        let (qx, qy, qz) = grid();
        let (R, h) = (1.2, 0.8);
        let f = cylinder(&qx, &qy, &qz, R, h).unwrap();
        let (x, y, z) = (qx[[4, 3]], qy[[4, 3]], qz[[4, 3]]);
        let qr_R = (x * x + y * y).sqrt() * R;
        let expected
            = 2.0 * PI * R * R * j1(qr_R) / qr_R * (z * h).sin() / z;
        assert_relative_eq!(f[[4, 3]].re, expected, max_relative = 1e-12);
    }

    #[test]
    fn cylinder_axis_uses_qz() {
        let qx = nd::array![0.0, 0.0];
        let qy = nd::array![0.0, 2.0];
        let qz = nd::array![2.0, 0.0];
        let f = cylinder(&qx, &qy, &qz, 1.0, 1.0).unwrap();
        // a Qz-only point sees only the axial sinc
        assert_relative_eq!(f[0].re, PI * 2.0_f64.sin() / 2.0, max_relative = 1e-14);
        assert_relative_eq!(f[1].re, 2.0 * PI * j1(2.0) / 2.0, max_relative = 1e-14);
    }

    #[test]
    fn prism_is_continuous_across_singular_lines() {
        let (a, h) = (2.0, 1.0);
        // Qx = 0 and Qx² = 3 Qy², approached from either side
        for (x0, y0) in [(0.0, 0.8), (3.0_f64.sqrt() * 0.8, 0.8), (0.0, 0.0)] {
            let qx = nd::array![x0, x0 + 1e-7, x0 - 1e-7];
            let qy = nd::array![y0, y0 - 1e-7, y0 + 1e-7];
            let qz: nd::Array1<f64> = nd::Array1::zeros(3);
            let f = prism(&qx, &qy, &qz, a, h).unwrap();
            assert!(f.iter().all(|fk| fk.re.is_finite() && fk.im.is_finite()));
            assert_abs_diff_eq!((f[0] - f[1]).norm(), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!((f[0] - f[2]).norm(), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn prism_has_threefold_symmetry() {
        let (a, h) = (1.3, 0.7);
        let (x, y) = (0.9, -0.4);
        let (c, s) = ((2.0 * PI / 3.0).cos(), (2.0 * PI / 3.0).sin());
        let qx = nd::array![x, c * x - s * y];
        let qy = nd::array![y, s * x + c * y];
        let qz = nd::array![0.3, 0.3];
        let f = prism(&qx, &qy, &qz, a, h).unwrap();
        assert_abs_diff_eq!((f[0] - f[1]).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn prism_matches_quadrature() {
        let (a, h) = (1.3, 0.9);
        let (x, y, z) = (2.1, -1.7, 0.4);
        // strips parallel to x, integrated analytically across each strip
        let r = a / 3.0_f64.sqrt();
        let n = 20000;
        let dy = 1.5 * r / n as f64;
        let ffxy: C64
            = (0..n)
            .map(|k| {
                let yk = -r / 2.0 + (k as f64 + 0.5) * dy;
                let w = (r - yk) / 3.0_f64.sqrt();
                C64::new(0.0, y * yk).exp() * 2.0 * w * sinc(x * w) * dy
            })
            .sum();
        let expected = ffxy * h * sinc(z * h);
        let f = prism(&nd::array![x], &nd::array![y], &nd::array![z], a, h).unwrap();
        assert_abs_diff_eq!((f[0] - expected).norm(), 0.0, epsilon = 1e-8);
        // the quarter turn is a different particle
        let g = prism(&nd::array![y], &nd::array![x], &nd::array![z], a, h).unwrap();
        assert!((g[0] - expected).norm() > 1e-2);
    }

    #[test]
    fn truncube_matches_quadrature() {
        // (1/8) of the integral over [-a, a]³ with the corners s·r > 3a - b cut
        // off; at fixed (y, z) the x-extent is symmetric, so it integrates to a
        // sinc
        let (a, tau) = (1.0, 0.6);
        let b = tau * a;
        let (x, y, z) = (0.7, -1.3, 2.2);
        let n = 600;
        let d = 2.0 * a / n as f64;
        let mut acc = C64::from(0.0);
        for j in 0..n {
            let yj = -a + (j as f64 + 0.5) * d;
            for k in 0..n {
                let zk = -a + (k as f64 + 0.5) * d;
                let m = a.min(3.0 * a - b - yj.abs() - zk.abs());
                acc += C64::new(0.0, y * yj + z * zk).exp() * 2.0 * m * sinc(x * m);
            }
        }
        let expected = acc * d * d / 8.0;
        let f = truncube(&nd::array![x], &nd::array![y], &nd::array![z], a, tau).unwrap();
        assert_abs_diff_eq!((f[0] - expected).norm(), 0.0, epsilon = 1e-4);
        assert!((f[0] - cube(&nd::array![x], &nd::array![y], &nd::array![z], a).unwrap()[0])
            .norm() > 1e-3);
    }

    #[test]
    fn truncube_without_truncation_is_cube() {
        let (qx, qy, qz) = grid();
        let t = truncube(&qx, &qy, &qz, 2.5, 0.0).unwrap();
        let c = cube(&qx, &qy, &qz, 2.5).unwrap();
        assert_eq!(t, c);
    }

    #[test]
    fn truncube_volume() {
        let (qx, qy, qz) = zeros();
        let a: f64 = 2.0;
        for tau in [0.25, 0.5, 1.0] {
            let f = truncube(&qx, &qy, &qz, a, tau).unwrap();
            let vol = a.powi(3) * (1.0 - tau.powi(3) / 6.0);
            assert_relative_eq!(f[0].re, vol, max_relative = 1e-6);
            assert_abs_diff_eq!(f[0].im, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn truncube_stays_real_for_symmetric_shape() {
        let (qx, qy, qz) = grid();
        let f = truncube(&qx, &qy, &qz, 1.5, 0.6).unwrap();
        // centrosymmetric particle: imaginary part only from the shift
        f.iter().for_each(|fk| assert_abs_diff_eq!(fk.im, 0.0, epsilon = 1e-6));
    }

    #[test]
    fn truncube_at_shift_collisions() {
        let [sx, sy, sz] = CORNER_SHIFT;
        // shifted coordinates hit exactly zero and coincide pairwise
        let qx = nd::array![-sx, 0.5 - sx, 0.7 - sx];
        let qy = nd::array![-sy, 0.5 - sy, -sy];
        let qz = nd::array![-sz, 0.5 - sz, 0.7 - sz];
        let f = truncube(&qx, &qy, &qz, 2.0, 0.5).unwrap();
        assert!(f.iter().all(|fk| fk.re.is_finite() && fk.im.is_finite()));
        assert_relative_eq!(f[0].re, 8.0 * (1.0 - 0.125 / 6.0), max_relative = 1e-6);
        // neighbors away from the collision agree
        let g = truncube(
            &nd::array![0.5 + 1e-4], &nd::array![0.5], &nd::array![0.5 - 1e-4],
            2.0, 0.5,
        ).unwrap();
        assert_abs_diff_eq!((f[1] - g[0]).norm(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn corner_volume_and_symmetry() {
        let b: f64 = 1.3;
        assert_relative_eq!(corner(0.0, 0.0, 0.0, b).re, b.powi(3) / 6.0, max_relative = 1e-14);
        let c1 = corner(0.2, -0.7, 1.1, b);
        let c2 = corner(1.1, 0.2, -0.7, b);
        assert_abs_diff_eq!((c1 - c2).norm(), 0.0, epsilon = 1e-13);
    }

    #[test]
    fn corner_matches_pole_form_for_distinct_components() {
        let (x, y, z, b) = (0.9, -1.4, 2.3, 0.8);
        let i = C64::i();
        let e = |q: f64| (i * b * q).exp();
        let pa = e(x) / (x * (x - y) * (x - z));
        let pb = e(y) / (y * (y - x) * (y - z));
        let pc = e(z) / (z * (z - x) * (z - y));
        let pd = C64::from(1.0 / (x * y * z));
        let expected = i * (pa + pb + pc - pd);
        assert_abs_diff_eq!((corner(x, y, z, b) - expected).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_parameters() {
        let (qx, qy, qz) = zeros();
        assert!(matches!(sphere(&qx, &qy, &qz, -1.0), Err(FFError::InvalidParameter(_))));
        assert!(matches!(cuboid(&qx, &qy, &qz, 1.0, 0.0, 1.0), Err(FFError::InvalidParameter(_))));
        assert!(matches!(cylinder(&qx, &qy, &qz, 1.0, -1.0), Err(FFError::InvalidParameter(_))));
        assert!(matches!(prism(&qx, &qy, &qz, f64::NAN, 1.0), Err(FFError::InvalidParameter(_))));
        assert!(matches!(truncube(&qx, &qy, &qz, 1.0, 1.5), Err(FFError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let qx: nd::Array1<f64> = nd::Array1::zeros(3);
        let qy: nd::Array1<f64> = nd::Array1::zeros(3);
        let qz: nd::Array1<f64> = nd::Array1::zeros(2);
        assert!(matches!(cube(&qx, &qy, &qz, 1.0), Err(FFError::ShapeMismatch(_))));
        assert!(matches!(translate(&qx, &qz, &qy, 0.0, 0.0, 0.0), Err(FFError::ShapeMismatch(_))));
    }
}
