// src/math/mod.rs

pub mod factorial;
pub mod harmonics;
pub mod laguerre;
pub mod legendre;

pub use factorial::{double_factorial, factorial};
pub use harmonics::{complex_spherical_harmonic, real_spherical_harmonic};
pub use laguerre::GeneralizedLaguerre;
pub use legendre::assoc_legendre;
