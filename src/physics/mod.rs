// src/physics/mod.rs

pub mod corrections;
pub mod energies;
pub mod wavefunction;

pub use corrections::{EffectiveCharge, QuantumDefectSource, ZeffSource};
pub use energies::{
    ionization_energy, orbital_radius, outermost_electron, spin_orbit_splitting, RYDBERG_EV,
};
pub use wavefunction::{OrbitalEngine, BOHR_RADIUS};
