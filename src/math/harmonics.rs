// src/math/harmonics.rs

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::DomainError;

use super::factorial::factorial;
use super::legendre::assoc_legendre;

fn normalization(l: u32, m: i32) -> Result<f64, DomainError> {
    let am = m.unsigned_abs() as i64;
    let lf = l as i64;
    let k2 = (2.0 * l as f64 + 1.0) / (4.0 * PI) * factorial(lf - am)? / factorial(lf + am)?;
    Ok(k2.sqrt())
}

/// Real (tesseral) spherical harmonic Y_l^m(theta, phi). These are the
/// angular factors of the px/py/pz, dxy/... chemistry orbitals.
pub fn real_spherical_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Result<f64, DomainError> {
    let k = normalization(l, m)?;
    let p = assoc_legendre(m.abs(), l, theta.cos())?;
    let v = match m.cmp(&0) {
        std::cmp::Ordering::Equal => k * p,
        std::cmp::Ordering::Greater => 2.0_f64.sqrt() * k * p * (m as f64 * phi).cos(),
        std::cmp::Ordering::Less => 2.0_f64.sqrt() * k * p * ((-m) as f64 * phi).sin(),
    };
    Ok(v)
}

/// Complex spherical harmonic with the Condon-Shortley phase carried
/// by the Legendre function for m >= 0 and restored explicitly for
/// negative m.
pub fn complex_spherical_harmonic(
    l: u32,
    m: i32,
    theta: f64,
    phi: f64,
) -> Result<Complex64, DomainError> {
    let k = normalization(l, m)?;
    let p = assoc_legendre(m.abs(), l, theta.cos())?;
    let sign = if m < 0 && m.rem_euclid(2) == 1 {
        -1.0
    } else {
        1.0
    };
    let phase = Complex64::new(0.0, m as f64 * phi).exp();
    Ok(sign * k * p * phase)
}
