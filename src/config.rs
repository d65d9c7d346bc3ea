// src/config.rs

use serde::{Deserialize, Serialize};

/// Independent toggles for the physical corrections applied on top of
/// the bare hydrogenic model. With everything off the engine reproduces
/// the textbook formulas exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Screen the nuclear charge with the tabulated Clementi-Raimondi
    /// values (Slater's rules as the trend fallback).
    pub screening: bool,
    /// Relativistic correction to binding energies (heavy Z only).
    pub relativistic_energy: bool,
    /// Relativistic contraction/expansion of derived orbital radii.
    pub relativistic_radius: bool,
    /// Quantum-defect correction for outer-shell ionization energies.
    pub quantum_defect: bool,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            screening: true,
            relativistic_energy: true,
            relativistic_radius: true,
            quantum_defect: true,
        }
    }
}

impl CorrectionConfig {
    /// All corrections off: the exact basic hydrogenic model.
    pub fn disabled() -> Self {
        Self {
            screening: false,
            relativistic_energy: false,
            relativistic_radius: false,
            quantum_defect: false,
        }
    }
}

/// Resolution and cost knobs for the render pipeline. Every sampling
/// loop in the core is bounded by one of these so callers can cap
/// per-frame cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Concentric shells sampled for s orbitals.
    pub shell_count: u32,
    /// Angular grid side length for d/f orbitals.
    pub grid_size: u32,
    /// Steps for radial distribution sampling.
    pub radial_steps: u32,
    /// Density floor below which a grid sample is skipped entirely.
    pub min_density: f64,
    /// Softness of the smoothstep SDF falloff, in blob radii.
    pub softness: f64,
    /// Denominator of the depth scale 1/(1 + z/denominator).
    pub depth_denominator: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shell_count: 35,
            grid_size: 25,
            radial_steps: 200,
            min_density: 0.03,
            softness: 2.0,
            depth_denominator: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all() {
        let c = CorrectionConfig::default();
        assert!(c.screening && c.relativistic_energy && c.relativistic_radius && c.quantum_defect);
    }

    #[test]
    fn test_disabled_is_all_off() {
        let c = CorrectionConfig::disabled();
        assert!(
            !c.screening && !c.relativistic_energy && !c.relativistic_radius && !c.quantum_defect
        );
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let s = RenderSettings::default();
        let json = serde_json::to_string(&s).unwrap();
        let back: RenderSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
