//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Conventions](#conventions)
//! - [Removable singularities](#removable-singularities)
//! - [Simplices and divided differences](#simplices-and-divided-differences)
//! - [Truncated cube](#truncated-cube)
//! - [Orientation averages](#orientation-averages)
//! - [Resolution](#resolution)
//!
//! # Background
//! In small-angle scattering from dilute particles, the scattered amplitude at
//! momentum transfer **Q** is the Fourier transform of the particle's
//! scattering-length density. For a particle of uniform density occupying the
//! region *V*, this is (up to a contrast factor)
//! ```text
//! F(Q) = ∫ exp(i Q·r) d³r
//!          V
//! ```
//! the *form factor*. The measured intensity is |*F*|² for a single
//! orientation, or its average over orientations for randomly oriented
//! particles. At **Q** = 0 the form factor equals the particle volume.
//!
//! Translating a particle by **r**₀ multiplies its form factor by
//! exp(*i* **Q**·**r**₀), so assemblies of particles are described by coherent
//! sums of translated form factors.
//!
//! # Conventions
//! Along each Cartesian axis, the cuboid-family amplitudes use
//! ```text
//! a sinc(Qx a),    sinc(x) = sin(x) / x
//! ```
//! (numpy writes the same quantity as `a * np.sinc(Qx * a / np.pi)`). This is
//! also the axial factor of the cylinder and prism, whose cross sections are
//! transformed exactly:
//! ```text
//! cylinder:  2π R² J1(Qr R) / (Qr R)
//! prism:     2 A exp[i Q·v₀, i Q·v₁, i Q·v₂]
//! ```
//! where *A* = √3 *a*²/4 is the area of the equilateral triangle with vertices
//! **v**ⱼ.
//!
//! # Removable singularities
//! Every closed-form expression above has removable singularities, e.g. at
//! *Q* = 0. They are never evaluated: the output is allocated filled with the
//! analytic limit, a mask of non-singular positions is computed, and only those
//! positions are overwritten. The limits used are
//! ```text
//! sin(x) / x                      → 1
//! J1(x) / x                       → 1/2
//! 3 (sin(x) - x cos(x)) / x³      → 1
//! ```
//! so that every amplitude at *Q* = 0 equals its volume.
//!
//! # Simplices and divided differences
//! The Fourier transform of an *n*-simplex with vertices **v**₀, …, **v**ₙ and
//! volume *V* is given by the Hermite-Genocchi formula,
//! ```text
//! ∫ exp(i Q·r) dⁿr = n! V exp[z₀, ..., zₙ],    zⱼ = i Q·vⱼ
//! ```
//! where exp[…] is the divided difference of the exponential. For distinct
//! nodes this is the familiar sum of poles
//! ```text
//!                      exp(zⱼ)
//! exp[z₀, ..., zₙ] = Σ --------------
//!                    ʲ  Πₖ≠ⱼ (zⱼ - zₖ)
//! ```
//! which is numerically useless when nodes approach one another (e.g. when two
//! components of **Q** coincide). [`special::exp_divdiff`][crate::special::exp_divdiff]
//! instead sums a Taylor series about the mean node when all nodes lie within
//! a unit distance of each other,
//! ```text
//! exp[z₀, ..., zₙ] = exp(c) Σ hₖ(z₀ - c, ..., zₙ - c) / (k + n)!
//!                           ᵏ
//! ```
//! with *h*ₖ the complete homogeneous symmetric polynomials, and otherwise
//! splits off the two most distant nodes with the usual recursion
//! ```text
//! exp[z₀, ..., zₙ] = (exp[z₁, ..., zₙ] - exp[z₀, ..., zₙ₋₁]) / (zₙ - z₀)
//! ```
//!
//! # Truncated cube
//! A cube truncated to degree τ is the cube minus eight corner tetrahedra[^1].
//! The tetrahedron spanned by the origin and *b* along each positive axis has
//! ```text
//! F₀(Q) = b³ exp[0, i b Qx, i b Qy, i b Qz]
//!       = i (A + B + C - D)
//!
//! A = exp(i b Qx) / (Qx (Qx - Qy) (Qx - Qz))      (B, C cyclic)
//! D = 1 / (Qx Qy Qz)
//! ```
//! and the corner at sign vector **s** contributes exp(*i a* **s**·**Q**)
//! *F*₀(-**s**∘**Q**) in the `a sinc(Q a)` convention, with *b* = τ*a* and an
//! overall factor 1/8. The corner sum is evaluated at **Q** shifted by
//! [`CORNER_SHIFT`][crate::CORNER_SHIFT].
//!
//! # Orientation averages
//! For a sphere the form factor depends only on *Q* = |**Q**|:
//! ```text
//! F(Q) = (4/3) π R³ · 3 (sin(QR) - QR cos(QR)) / (QR)³
//! ```
//! Other shapes are averaged numerically over *N* unit vectors on a Fibonacci
//! lattice,
//! ```text
//! z_k = 1 - (2k + 1) / N,    φ_k = π (3 - √5) k
//! ```
//! which places one direction in each of *N* equal-area bands.
//!
//! # Resolution
//! A Gaussian resolution of width σ is applied as a discrete convolution over
//! the sampled intensity, computed with zero-padded FFTs. The kernel is
//! renormalized by its truncated sum at every point, which keeps constant
//! intensities constant at the edges of the grid.
//!
//! [^1]: R. W. Hendricks, J. Schelten, and W. Schmatz, Philos. Mag. **30**,
//! 819 (1974).
