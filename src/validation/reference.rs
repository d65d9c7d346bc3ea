// src/validation/reference.rs

use std::f64::consts::PI;

use statrs::function::factorial::factorial as statrs_factorial;

/// An independent evaluation path for the special functions. The
/// harness diffs the recurrence-based implementations against one of
/// these over a fixed grid.
pub trait ReferenceBackend {
    fn name(&self) -> &str;
    fn factorial(&self, n: u64) -> f64;
    fn laguerre(&self, n: u32, alpha: f64, x: f64) -> f64;
    fn legendre(&self, m: i32, l: u32, x: f64) -> f64;
    fn spherical_harmonic_magnitude(&self, l: u32, m: i32, theta: f64, phi: f64) -> f64;
}

/// Explicit-series reference implementation. Deliberately shares no
/// code with the recurrence evaluators: Laguerre through its power
/// series, Legendre through the differentiated Rodrigues series, with
/// statrs factorials throughout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeriesBackend;

impl ReferenceBackend for SeriesBackend {
    fn name(&self) -> &str {
        "series"
    }

    fn factorial(&self, n: u64) -> f64 {
        statrs_factorial(n)
    }

    // L_n^a(x) = sum_k (-1)^k C(n+a, n-k) x^k / k!
    fn laguerre(&self, n: u32, alpha: f64, x: f64) -> f64 {
        let mut result = 0.0;
        for k in 0..=n {
            // Generalized binomial (n+a choose n-k), built as a product
            // so non-integer alpha works.
            let mut binom = 1.0;
            for j in 0..(n - k) {
                binom *= (n as f64 + alpha - j as f64) / (j as f64 + 1.0);
            }
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            result += sign * binom * x.powi(k as i32) / statrs_factorial(k as u64);
        }
        result
    }

    fn legendre(&self, m: i32, l: u32, x: f64) -> f64 {
        if m.unsigned_abs() > l {
            return 0.0;
        }
        if m < 0 {
            let am = (-m) as u64;
            let sign = if am % 2 == 0 { 1.0 } else { -1.0 };
            let ratio =
                statrs_factorial(l as u64 - am) / statrs_factorial(l as u64 + am);
            return sign * ratio * self.legendre(-m, l, x);
        }
        let m = m as u32;
        // P_l^m = (-1)^m (1-x^2)^{m/2} d^m/dx^m P_l, with P_l from the
        // Rodrigues series (1/2^l) sum_k (-1)^k C(l,k) C(2l-2k,l) x^{l-2k}.
        let mut dm = 0.0;
        for k in 0..=(l / 2) {
            let power = l - 2 * k;
            if power < m {
                continue;
            }
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            let c1 = statrs_factorial(l as u64)
                / (statrs_factorial(k as u64) * statrs_factorial((l - k) as u64));
            let c2 = statrs_factorial((2 * l - 2 * k) as u64)
                / (statrs_factorial(l as u64) * statrs_factorial((l - 2 * k) as u64));
            // d^m x^p = p!/(p-m)! x^{p-m}
            let deriv = statrs_factorial(power as u64) / statrs_factorial((power - m) as u64);
            dm += sign * c1 * c2 * deriv * x.powi((power - m) as i32);
        }
        dm /= 2.0_f64.powi(l as i32);
        let cs_sign = if m % 2 == 0 { 1.0 } else { -1.0 };
        cs_sign * (1.0 - x * x).max(0.0).powf(m as f64 / 2.0) * dm
    }

    // |Y_l^m| is phi-independent: K |P_l^{|m|}(cos theta)|.
    fn spherical_harmonic_magnitude(&self, l: u32, m: i32, theta: f64, _phi: f64) -> f64 {
        let am = m.unsigned_abs() as u64;
        let k2 = (2.0 * l as f64 + 1.0) / (4.0 * PI) * statrs_factorial(l as u64 - am)
            / statrs_factorial(l as u64 + am);
        k2.sqrt() * self.legendre(m.abs(), l, theta.cos()).abs()
    }
}
