// src/math/factorial.rs

use crate::error::DomainError;

/// n! as f64. Exact integers up to n = 20; beyond that the product
/// accumulates in f64 and stays within one ulp of the true value.
pub fn factorial(n: i64) -> Result<f64, DomainError> {
    if n < 0 {
        return Err(DomainError::NegativeFactorial(n));
    }
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Ok(acc)
}

/// n!! with the standard empty-product convention (-1)!! = 0!! = 1.
pub fn double_factorial(n: i64) -> Result<f64, DomainError> {
    if n < -1 {
        return Err(DomainError::NegativeDoubleFactorial(n));
    }
    let mut acc = 1.0_f64;
    let mut k = n;
    while k > 1 {
        acc *= k as f64;
        k -= 2;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_factorials_exact() {
        assert_eq!(factorial(0).unwrap(), 1.0);
        assert_eq!(factorial(1).unwrap(), 1.0);
        assert_eq!(factorial(5).unwrap(), 120.0);
        assert_eq!(factorial(10).unwrap(), 3628800.0);
        assert_eq!(factorial(20).unwrap(), 2432902008176640000.0);
    }

    #[test]
    fn test_large_factorial_close() {
        // 50! ~ 3.0414e64
        let f = factorial(50).unwrap();
        let rel = (f - 3.0414093201713376e64).abs() / 3.0414093201713376e64;
        assert!(rel < 1e-14);
    }

    #[test]
    fn test_negative_is_error() {
        assert_eq!(factorial(-1), Err(DomainError::NegativeFactorial(-1)));
        assert_eq!(
            double_factorial(-2),
            Err(DomainError::NegativeDoubleFactorial(-2))
        );
    }

    #[test]
    fn test_double_factorial() {
        assert_eq!(double_factorial(-1).unwrap(), 1.0);
        assert_eq!(double_factorial(0).unwrap(), 1.0);
        assert_eq!(double_factorial(1).unwrap(), 1.0);
        assert_eq!(double_factorial(5).unwrap(), 15.0);
        assert_eq!(double_factorial(6).unwrap(), 48.0);
        assert_eq!(double_factorial(7).unwrap(), 105.0);
    }
}
