//! Special functions needed by the closed-form amplitudes.
//!
//! ```
//! use formfact::special::{ j1, exp_divdiff };
//! use num_complex::Complex64 as C64;
//!
//! // first zero of J1
//! assert!(j1(3.831705970207512).abs() < 1e-12);
//! // three coincident nodes: exp(z) / 2!
//! let z = C64::new(0.0, 0.7);
//! let dd = exp_divdiff(&[z, z, z]);
//! assert!((dd - z.exp() / 2.0).norm() < 1e-14);
//! ```

use std::f64::consts::{ FRAC_PI_4, PI };
use num_complex::Complex64 as C64;
use num_traits::{ Float, Zero };
use crate::{ DEF_SERIES_RADIUS, DEF_SERIES_TERMS };

// below this, the power series for J1 converges without cancellation
const J1_SERIES_MAX: f64 = 1.0;
// above this, the Hankel expansion is accurate to machine precision
const J1_ASYMP_MIN: f64 = 25.0;
const J1_RESCALE: f64 = 1e250;

/// Unnormalized cardinal sine, `sin(x) / x`, with the value 1 at `x = 0`.
///
/// Note that this differs from numpy's `sinc`, which computes
/// `sin(πx) / (πx)`.
pub fn sinc<A>(x: A) -> A
where A: Float
{
    if x.is_zero() { A::one() } else { x.sin() / x }
}

/// Bessel function of the first kind of order 1.
pub fn j1(x: f64) -> f64 {
    let ax = x.abs();
    let val
        = if ax < J1_SERIES_MAX {
            j1_series(ax)
        } else if ax <= J1_ASYMP_MIN {
            j1_miller(ax)
        } else {
            j1_asymp(ax)
        };
    if x < 0.0 { -val } else { val }
}

/// `J1(x) / x`, taking its limiting value 1/2 at `x = 0`.
pub fn j1_over_x(x: f64) -> f64 {
    if x == 0.0 { 0.5 } else { j1(x) / x }
}

// J1(x) = Σ (-1)^k (x/2)^(2k+1) / (k! (k+1)!)
fn j1_series(x: f64) -> f64 {
    let h = x / 2.0;
    let h2 = h * h;
    let mut term = h;
    let mut acc = h;
    for k in 1..20 {
        term *= -h2 / (k * (k + 1)) as f64;
        acc += term;
        if term.abs() < f64::EPSILON * acc.abs() { break; }
    }
    acc
}

// backward recurrence J(k-1) = (2k / x) J(k) - J(k+1) from an order well past
// x, normalized with 1 = J0 + 2 Σ J(2k)
fn j1_miller(x: f64) -> f64 {
    let m = 2 * ((x as usize + 40) / 2);
    let mut jp: f64 = 0.0;
    let mut j: f64 = 1e-30;
    let mut sum: f64 = 2.0 * j;
    let mut res: f64 = 0.0;
    for k in (1..=m).rev() {
        let jm = 2.0 * k as f64 / x * j - jp;
        jp = j;
        j = jm;
        let order = k - 1;
        if order == 1 { res = j; }
        if order > 0 && order % 2 == 0 { sum += 2.0 * j; }
        if j.abs() > J1_RESCALE {
            j /= J1_RESCALE;
            jp /= J1_RESCALE;
            sum /= J1_RESCALE;
            res /= J1_RESCALE;
        }
    }
    sum += j;
    res / sum
}

// J1(x) ~ √(2/πx) (P cos χ - Q sin χ), χ = x - 3π/4
fn j1_asymp(x: f64) -> f64 {
    let mut p: f64 = 1.0;
    let mut q: f64 = 0.0;
    let mut a: f64 = 1.0;
    let mut prev = f64::INFINITY;
    for k in 1..60_usize {
        let odd = (2 * k - 1) as f64;
        a *= (4.0 - odd * odd) / (8.0 * k as f64 * x);
        if a.abs() >= prev || a.abs() < 1e-17 { break; }
        prev = a.abs();
        // a_k / x^k enters P (k even) or Q (k odd) with alternating signs
        match k % 4 {
            0 => { p += a; },
            1 => { q += a; },
            2 => { p -= a; },
            _ => { q -= a; },
        }
    }
    let chi = x - 3.0 * FRAC_PI_4;
    (2.0 / (PI * x)).sqrt() * (p * chi.cos() - q * chi.sin())
}

/// Divided difference of `exp` over the complex nodes `z`,
/// `exp[z₀, ..., zₙ]`.
///
/// Coincident nodes are allowed and produce the confluent limit, e.g.
/// `exp[z, z, z] = exp(z) / 2`. By the Hermite-Genocchi formula, the Fourier
/// transform of an `n`-simplex with vertices `vⱼ` and volume `V` is
/// `n! V exp[iq·v₀, ..., iq·vₙ]`.
///
/// Returns zero for an empty node set.
pub fn exp_divdiff(z: &[C64]) -> C64 {
    match z.len() {
        0 => C64::zero(),
        1 => z[0].exp(),
        _ => {
            let (i, j, spread) = farthest_pair(z);
            if spread <= DEF_SERIES_RADIUS {
                exp_divdiff_series(z)
            } else {
                let without = |skip: usize| -> Vec<C64> {
                    z.iter().enumerate()
                        .filter(|(k, _)| *k != skip)
                        .map(|(_, zk)| *zk)
                        .collect()
                };
                (exp_divdiff(&without(i)) - exp_divdiff(&without(j)))
                    / (z[j] - z[i])
            }
        },
    }
}

fn farthest_pair(z: &[C64]) -> (usize, usize, f64) {
    let mut best = (0, 1, (z[1] - z[0]).norm());
    for i in 0..z.len() {
        for j in i + 1..z.len() {
            let d = (z[j] - z[i]).norm();
            if d > best.2 { best = (i, j, d); }
        }
    }
    best
}

// exp[z₀..zₙ] = exp(c) Σₖ hₖ(w) / (k + n)!, wⱼ = zⱼ - c, where hₖ is the
// complete homogeneous symmetric polynomial of degree k
fn exp_divdiff_series(z: &[C64]) -> C64 {
    let n = z.len() - 1;
    let c: C64 = z.iter().sum::<C64>() / z.len() as f64;
    let mut h: Vec<C64> = vec![C64::zero(); DEF_SERIES_TERMS];
    h[0] = C64::from(1.0);
    for zj in z.iter() {
        let w = zj - c;
        for k in 1..DEF_SERIES_TERMS {
            let prev = h[k - 1];
            h[k] += w * prev;
        }
    }
    let mut inv_fact: f64 = (1..=n).fold(1.0, |acc, k| acc / k as f64);
    let mut acc = C64::zero();
    for (k, hk) in h.iter().enumerate() {
        acc += hk * inv_fact;
        inv_fact /= (k + n + 1) as f64;
    }
    c.exp() * acc
}
