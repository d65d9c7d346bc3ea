// src/math/legendre.rs

use crate::error::DomainError;

use super::factorial::{double_factorial, factorial};

// Slack for cos(theta) landing a hair outside [-1, 1].
const BOUNDARY_SLACK: f64 = 1e-12;

/// Associated Legendre function P_l^m(x), Condon-Shortley sign
/// convention. Returns 0 for |m| > l; negative m through the
/// (l-m)!/(l+m)! symmetry.
pub fn assoc_legendre(m: i32, l: u32, x: f64) -> Result<f64, DomainError> {
    if x.abs() > 1.0 + BOUNDARY_SLACK {
        return Err(DomainError::LegendreArgOutOfRange(x));
    }
    let x = x.clamp(-1.0, 1.0);

    if m.unsigned_abs() > l {
        return Ok(0.0);
    }
    if m < 0 {
        let am = -m;
        // P_l^{-m} = (-1)^m (l-m)!/(l+m)! P_l^m
        let ratio = factorial((l as i64) - (am as i64))? / factorial((l as i64) + (am as i64))?;
        let sign = if am % 2 == 0 { 1.0 } else { -1.0 };
        return Ok(sign * ratio * assoc_legendre(am, l, x)?);
    }

    let m = m as u32;
    // Seed P_m^m = (-1)^m (2m-1)!! (1 - x^2)^{m/2}.
    let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
    let mut pmm = sign * double_factorial(2 * (m as i64) - 1)?;
    let somx2 = (1.0 - x * x).max(0.0).sqrt();
    for _ in 0..m {
        pmm *= somx2;
    }
    if l == m {
        return Ok(pmm);
    }

    // Upward recurrence in l: (l-m) P_l^m = x(2l-1) P_{l-1}^m - (l+m-1) P_{l-2}^m
    let mut pm1 = pmm;
    let mut cur = x * (2.0 * m as f64 + 1.0) * pmm;
    for ll in (m + 2)..=l {
        let llf = ll as f64;
        let mf = m as f64;
        let next = (x * (2.0 * llf - 1.0) * cur - (llf + mf - 1.0) * pm1) / (llf - mf);
        pm1 = cur;
        cur = next;
    }
    Ok(cur)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p00_is_one() {
        assert_eq!(assoc_legendre(0, 0, 0.3).unwrap(), 1.0);
    }

    #[test]
    fn test_bonnet_low_orders() {
        // P_1 = x, P_2 = (3x^2 - 1)/2, P_3 = (5x^3 - 3x)/2
        for &x in &[-1.0, -0.5, 0.0, 0.5, 1.0] {
            assert!((assoc_legendre(0, 1, x).unwrap() - x).abs() < 1e-14);
            let p2 = (3.0 * x * x - 1.0) / 2.0;
            assert!((assoc_legendre(0, 2, x).unwrap() - p2).abs() < 1e-14);
            let p3 = (5.0 * x * x * x - 3.0 * x) / 2.0;
            assert!((assoc_legendre(0, 3, x).unwrap() - p3).abs() < 1e-14);
        }
    }

    #[test]
    fn test_condon_shortley_sign() {
        // P_1^1(x) = -sqrt(1 - x^2)
        let v = assoc_legendre(1, 1, 0.5).unwrap();
        assert!(v < 0.0);
        assert!((v + (1.0_f64 - 0.25).sqrt()).abs() < 1e-14);
    }

    #[test]
    fn test_p22() {
        // P_2^2(x) = 3(1 - x^2)
        let v = assoc_legendre(2, 2, 0.3).unwrap();
        assert!((v - 3.0 * (1.0 - 0.09)).abs() < 1e-13);
    }

    #[test]
    fn test_negative_m_symmetry() {
        // P_2^{-1} = -(1/6) P_2^1
        let p21 = assoc_legendre(1, 2, 0.4).unwrap();
        let p2m1 = assoc_legendre(-1, 2, 0.4).unwrap();
        assert!((p2m1 + p21 / 6.0).abs() < 1e-13);
    }

    #[test]
    fn test_m_above_l_is_zero() {
        assert_eq!(assoc_legendre(3, 2, 0.1).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_range_argument() {
        assert!(assoc_legendre(0, 1, 1.5).is_err());
        // boundary slack passes through
        assert!(assoc_legendre(0, 1, 1.0 + 1e-15).is_ok());
    }
}
