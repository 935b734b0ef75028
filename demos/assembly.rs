use std::f64::consts::PI;
use ndarray as nd;
use formfact::{
    avg,
    ff,
    resolution::GaussianResolution,
    shape::{ Assembly, Particle, Shape },
};

// compare isotropic intensities of a sphere, a truncated cube of equal volume,
// and a sphere dimer, with and without instrumental resolution

fn main() {
    const RADIUS: f64 = 5.0; // nm
    const TAU: f64 = 0.6; // truncation degree
    const N_DIRS: usize = 1500; // orientations per |Q|
    const SIGMA_Q: f64 = 0.01; // nm⁻¹

    // truncated cube with the same volume as the sphere
    let v_sphere = 4.0 / 3.0 * PI * RADIUS.powi(3);
    let edge = (v_sphere / (1.0 - TAU.powi(3) / 6.0)).cbrt();

    let q: nd::Array1<f64> = nd::Array1::linspace(0.005, 2.0, 400);
    let i_sphere = avg::sphere_intensity(&q, RADIUS).unwrap();
    let i_trunc
        = avg::average_intensity(
            &q, N_DIRS, |qx, qy, qz| ff::truncube(qx, qy, qz, edge, TAU))
        .unwrap();

    // two touching spheres, averaged over orientation
    let dimer: Assembly
        = [-RADIUS, RADIUS].into_iter()
        .map(|z| Particle::at(Shape::Sphere { r: RADIUS }, [0.0, 0.0, z]))
        .collect();
    let i_dimer
        = avg::average_intensity(
            &q, N_DIRS, |qx, qy, qz| dimer.amplitude(qx, qy, qz))
        .unwrap();

    let res = GaussianResolution::new(SIGMA_Q).unwrap();
    let i_sphere_meas = res.smear(&q, &i_sphere).unwrap();

    println!("edge of equal-volume truncated cube: {:.4} nm", edge);
    println!("{:>8} {:>12} {:>12} {:>12} {:>12}",
        "q", "sphere", "sphere (res)", "truncube", "dimer");
    for k in (0..q.len()).step_by(20) {
        println!("{:>8.4} {:>12.4e} {:>12.4e} {:>12.4e} {:>12.4e}",
            q[k], i_sphere[k], i_sphere_meas[k], i_trunc[k], i_dimer[k]);
    }
}
