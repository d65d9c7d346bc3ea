// src/physics/wavefunction.rs

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::CorrectionConfig;
use crate::error::DomainError;
use crate::math::{factorial, real_spherical_harmonic, GeneralizedLaguerre};
use crate::model::QuantumState;

use super::corrections::effective_charge;

/// Bohr radius in angstroms.
pub const BOHR_RADIUS: f64 = 0.529177;

type NormKey = (u32, u32, u64);

/// Hydrogenic wavefunction evaluator. Owns the correction switches and
/// caches the radial normalization constant per (n, l, Z_eff), which
/// dominates the cost of dense sampling passes.
#[derive(Debug)]
pub struct OrbitalEngine {
    config: CorrectionConfig,
    norm_cache: RefCell<HashMap<NormKey, f64>>,
}

impl Default for OrbitalEngine {
    fn default() -> Self {
        Self::new(CorrectionConfig::default())
    }
}

impl OrbitalEngine {
    pub fn new(config: CorrectionConfig) -> Self {
        Self {
            config,
            norm_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> CorrectionConfig {
        self.config
    }

    /// Replacing the config invalidates every cached normalization.
    pub fn set_config(&mut self, config: CorrectionConfig) {
        self.config = config;
        self.norm_cache.borrow_mut().clear();
    }

    /// Z_eff seen by an (n, l) electron under the current config.
    pub fn effective_z(&self, z: u32, n: u32, l: u32) -> f64 {
        if self.config.screening {
            effective_charge(z, n, l).value
        } else {
            z as f64
        }
    }

    fn normalization(&self, n: u32, l: u32, zeff: f64) -> Result<f64, DomainError> {
        let key = (n, l, zeff.to_bits());
        if let Some(&norm) = self.norm_cache.borrow().get(&key) {
            return Ok(norm);
        }
        let nf = n as f64;
        let n_i = n as i64;
        let l_i = l as i64;
        let norm = ((2.0 * zeff / nf).powi(3) * factorial(n_i - l_i - 1)?
            / (2.0 * nf * factorial(n_i + l_i)?))
        .sqrt();
        self.norm_cache.borrow_mut().insert(key, norm);
        Ok(norm)
    }

    /// Radial wavefunction R_{nl}(r) for element Z, r in angstroms
    /// measured in Bohr radii inside the formula:
    /// R = N rho^l e^{-rho/2} L_{n-l-1}^{2l+1}(rho), rho = 2 Z_eff r / n.
    pub fn radial_wavefunction(&self, n: u32, l: u32, r: f64, z: u32) -> Result<f64, DomainError> {
        if n == 0 {
            return Err(DomainError::ZeroPrincipal);
        }
        if l >= n {
            return Err(DomainError::InvalidQuantumNumbers { n, l, m: 0 });
        }
        let zeff = self.effective_z(z, n, l);
        let rho = 2.0 * zeff * r / n as f64;
        let norm = self.normalization(n, l, zeff)?;
        let laguerre = GeneralizedLaguerre::new((n - l - 1) as i64, (2 * l + 1) as f64)?;
        Ok(norm * rho.powi(l as i32) * (-rho / 2.0).exp() * laguerre.eval(rho))
    }

    /// |psi|^2 = R^2 Y^2 with the real (tesseral) harmonic.
    pub fn probability_density(
        &self,
        state: QuantumState,
        r: f64,
        theta: f64,
        phi: f64,
        z: u32,
    ) -> Result<f64, DomainError> {
        let radial = self.radial_wavefunction(state.n(), state.l(), r, z)?;
        let angular = real_spherical_harmonic(state.l(), state.m(), theta, phi)?;
        Ok(radial * radial * angular * angular)
    }

    /// Sampled radial probability distribution P(r) = r^2 R^2 on
    /// [0, r_max], returned as (r, P) pairs. Drives density plots and
    /// the shell-sampling renderer.
    pub fn radial_distribution(
        &self,
        n: u32,
        l: u32,
        z: u32,
        r_max: f64,
        steps: u32,
    ) -> Result<Vec<(f64, f64)>, DomainError> {
        let steps = steps.max(2);
        let mut out = Vec::with_capacity(steps as usize);
        for i in 0..steps {
            let r = r_max * i as f64 / (steps - 1) as f64;
            let radial = self.radial_wavefunction(n, l, r, z)?;
            out.push((r, r * r * radial * radial));
        }
        Ok(out)
    }
}
