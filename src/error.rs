// src/error.rs

use thiserror::Error;

/// Errors raised when an input lies outside the mathematical or physical
/// domain of an operation. These are always reported at the point of
/// detection and never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("factorial is not defined for negative integers: {0}")]
    NegativeFactorial(i64),

    #[error("double factorial is not defined for n < -1: {0}")]
    NegativeDoubleFactorial(i64),

    #[error("Laguerre polynomial degree must be non-negative: {0}")]
    NegativeLaguerreDegree(i64),

    #[error("associated Legendre argument {0} lies outside [-1, 1]")]
    LegendreArgOutOfRange(f64),

    #[error("invalid quantum numbers n={n}, l={l}, m={m} (need l < n and |m| <= l)")]
    InvalidQuantumNumbers { n: u32, l: u32, m: i32 },

    #[error("principal quantum number must be >= 1")]
    ZeroPrincipal,
}
