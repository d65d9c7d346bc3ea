// src/lib.rs

//! Numeric and geometric core of an atom visualizer: hydrogenic
//! wavefunctions with toggleable physical corrections, deterministic
//! nucleon packing, a fragment-producing projection pipeline, and a
//! validation harness for the special-function implementations.

pub mod config;
pub mod error;
pub mod math;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod validation;

pub use config::{CorrectionConfig, RenderSettings};
pub use error::DomainError;
pub use model::{NuclearComposition, QuantumState};
pub use physics::OrbitalEngine;
pub use rendering::{NucleonField, Pipeline, RenderTransform};
