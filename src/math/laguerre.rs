// src/math/laguerre.rs

use crate::error::DomainError;

/// Generalized Laguerre polynomial L_n^alpha, evaluated by the stable
/// three-term recurrence. Degree is fixed at construction so the
/// radial wavefunction can reuse one instance across sample points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedLaguerre {
    n: i64,
    alpha: f64,
}

impl GeneralizedLaguerre {
    pub fn new(n: i64, alpha: f64) -> Result<Self, DomainError> {
        if n < 0 {
            return Err(DomainError::NegativeLaguerreDegree(n));
        }
        Ok(Self { n, alpha })
    }

    pub fn degree(&self) -> i64 {
        self.n
    }

    /// L_{k+1} = ((2k + 1 + alpha - x) L_k - (k + alpha) L_{k-1}) / (k + 1)
    pub fn eval(&self, x: f64) -> f64 {
        if self.n == 0 {
            return 1.0;
        }
        let a = self.alpha;
        let mut prev = 1.0;
        let mut cur = 1.0 + a - x;
        for k in 1..self.n {
            let kf = k as f64;
            let next = ((2.0 * kf + 1.0 + a - x) * cur - (kf + a) * prev) / (kf + 1.0);
            prev = cur;
            cur = next;
        }
        cur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_zero_is_one() {
        let l = GeneralizedLaguerre::new(0, 3.5).unwrap();
        assert_eq!(l.eval(0.0), 1.0);
        assert_eq!(l.eval(17.2), 1.0);
    }

    #[test]
    fn test_degree_one() {
        // L_1^a(x) = 1 + a - x
        let l = GeneralizedLaguerre::new(1, 2.0).unwrap();
        assert!((l.eval(0.5) - 2.5).abs() < 1e-14);
    }

    #[test]
    fn test_degree_two_plain() {
        // L_2^0(x) = (x^2 - 4x + 2) / 2
        let l = GeneralizedLaguerre::new(2, 0.0).unwrap();
        for &x in &[0.0, 0.5, 1.0, 2.0, 5.0] {
            let expected = (x * x - 4.0 * x + 2.0) / 2.0;
            assert!((l.eval(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_value_at_zero_is_binomial() {
        // L_n^a(0) = C(n + a, n); for n = 3, a = 1: C(4, 3) = 4
        let l = GeneralizedLaguerre::new(3, 1.0).unwrap();
        assert!((l.eval(0.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_degree_is_error() {
        assert_eq!(
            GeneralizedLaguerre::new(-2, 0.0),
            Err(DomainError::NegativeLaguerreDegree(-2))
        );
    }
}
