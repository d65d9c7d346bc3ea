//src/model/mod.rs
pub mod elements;
pub mod nucleus;
pub mod quantum;

// Re-exports for cleaner imports
pub use nucleus::{NuclearComposition, Species};
pub use quantum::{available_orbitals, OrbitalShape, QuantumState};
