// src/validation/mod.rs

pub mod reference;

use log::warn;
use serde::Serialize;

use crate::math;

pub use reference::{ReferenceBackend, SeriesBackend};

pub const FACTORIAL_THRESHOLD: f64 = 1e-14;
pub const LAGUERRE_THRESHOLD: f64 = 1e-10;
pub const LEGENDRE_THRESHOLD: f64 = 1e-10;
pub const HARMONIC_THRESHOLD: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Passed,
    Failed,
    Unavailable,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionReport {
    pub max_relative_error: f64,
    pub max_absolute_error: f64,
    pub samples: u32,
    pub threshold: f64,
    pub status: BackendStatus,
}

impl FunctionReport {
    fn unavailable(threshold: f64) -> Self {
        Self {
            max_relative_error: 0.0,
            max_absolute_error: 0.0,
            samples: 0,
            threshold,
            status: BackendStatus::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub backend: Option<String>,
    pub factorial: FunctionReport,
    pub laguerre: FunctionReport,
    pub legendre: FunctionReport,
    pub harmonics: FunctionReport,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        [&self.factorial, &self.laguerre, &self.legendre, &self.harmonics]
            .iter()
            .all(|r| r.status == BackendStatus::Passed)
    }
}

// Relative error with an absolute fallback near zero crossings of the
// polynomials, where a ratio would blow up on harmless rounding.
struct ErrorTracker {
    max_relative: f64,
    max_absolute: f64,
    samples: u32,
}

impl ErrorTracker {
    fn new() -> Self {
        Self {
            max_relative: 0.0,
            max_absolute: 0.0,
            samples: 0,
        }
    }

    fn record(&mut self, ours: f64, reference: f64) {
        let abs = (ours - reference).abs();
        let rel = if reference.abs() > 1e-10 {
            abs / reference.abs()
        } else {
            abs
        };
        self.max_absolute = self.max_absolute.max(abs);
        self.max_relative = self.max_relative.max(rel);
        self.samples += 1;
    }

    fn report(self, threshold: f64) -> FunctionReport {
        FunctionReport {
            max_relative_error: self.max_relative,
            max_absolute_error: self.max_absolute,
            samples: self.samples,
            threshold,
            status: if self.max_relative <= threshold {
                BackendStatus::Passed
            } else {
                BackendStatus::Failed
            },
        }
    }
}

/// Cross-check the recurrence-based special functions against a
/// reference backend over fixed grids. A missing backend degrades to
/// an all-unavailable report.
pub fn run_validation(backend: Option<&dyn ReferenceBackend>) -> ValidationReport {
    let Some(backend) = backend else {
        warn!("no reference backend available, skipping validation");
        return ValidationReport {
            backend: None,
            factorial: FunctionReport::unavailable(FACTORIAL_THRESHOLD),
            laguerre: FunctionReport::unavailable(LAGUERRE_THRESHOLD),
            legendre: FunctionReport::unavailable(LEGENDRE_THRESHOLD),
            harmonics: FunctionReport::unavailable(HARMONIC_THRESHOLD),
        };
    };

    ValidationReport {
        backend: Some(backend.name().to_string()),
        factorial: check_factorial(backend),
        laguerre: check_laguerre(backend),
        legendre: check_legendre(backend),
        harmonics: check_harmonics(backend),
    }
}

fn check_factorial(backend: &dyn ReferenceBackend) -> FunctionReport {
    let mut tracker = ErrorTracker::new();
    for n in 0..=50u64 {
        let ours = math::factorial(n as i64).unwrap_or(f64::NAN);
        tracker.record(ours, backend.factorial(n));
    }
    tracker.report(FACTORIAL_THRESHOLD)
}

fn check_laguerre(backend: &dyn ReferenceBackend) -> FunctionReport {
    let mut tracker = ErrorTracker::new();
    for n in 0..8u32 {
        for &alpha in &[0.0, 0.5, 1.0, 2.0] {
            let Ok(poly) = math::GeneralizedLaguerre::new(n as i64, alpha) else {
                continue;
            };
            for &x in &[0.0, 0.5, 1.0, 2.0, 5.0] {
                tracker.record(poly.eval(x), backend.laguerre(n, alpha, x));
            }
        }
    }
    tracker.report(LAGUERRE_THRESHOLD)
}

fn check_legendre(backend: &dyn ReferenceBackend) -> FunctionReport {
    let mut tracker = ErrorTracker::new();
    for l in 0..6u32 {
        for m in -(l as i32)..=(l as i32) {
            for &x in &[-1.0, -0.5, 0.0, 0.5, 1.0] {
                let ours = math::assoc_legendre(m, l, x).unwrap_or(f64::NAN);
                tracker.record(ours, backend.legendre(m, l, x));
            }
        }
    }
    tracker.report(LEGENDRE_THRESHOLD)
}

fn check_harmonics(backend: &dyn ReferenceBackend) -> FunctionReport {
    let mut tracker = ErrorTracker::new();
    let thetas = [0.1, 0.8, 1.6, 2.4, 3.0];
    let phis = [0.0, 1.3, 2.7, 4.1, 5.5];
    for l in 0..5u32 {
        for m in -(l as i32)..=(l as i32) {
            for &theta in &thetas {
                for &phi in &phis {
                    let ours = math::complex_spherical_harmonic(l, m, theta, phi)
                        .map(|c| c.norm())
                        .unwrap_or(f64::NAN);
                    tracker.record(ours, backend.spherical_harmonic_magnitude(l, m, theta, phi));
                }
            }
        }
    }
    tracker.report(HARMONIC_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_backend_passes_all_functions() {
        let backend = SeriesBackend;
        let report = run_validation(Some(&backend));
        assert_eq!(report.factorial.status, BackendStatus::Passed);
        assert_eq!(report.laguerre.status, BackendStatus::Passed);
        assert_eq!(report.legendre.status, BackendStatus::Passed);
        assert_eq!(report.harmonics.status, BackendStatus::Passed);
        assert!(report.all_passed());
        assert!(report.factorial.samples >= 50);
        assert!(report.laguerre.samples >= 100);
        assert!(report.legendre.samples >= 100);
    }

    #[test]
    fn test_missing_backend_degrades_gracefully() {
        let report = run_validation(None);
        assert!(!report.all_passed());
        assert_eq!(report.factorial.status, BackendStatus::Unavailable);
        assert_eq!(report.harmonics.status, BackendStatus::Unavailable);
        assert_eq!(report.legendre.samples, 0);
        assert!(report.backend.is_none());
    }

    #[test]
    fn test_report_serializes() {
        let backend = SeriesBackend;
        let report = run_validation(Some(&backend));
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("max_relative_error"));
        assert!(json.contains("passed"));
    }
}
