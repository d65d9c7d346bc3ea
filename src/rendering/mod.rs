// src/rendering/mod.rs

pub mod nucleons;
pub mod orbitals;
pub mod scene;
pub mod sdf;

pub use nucleons::NucleonField;
pub use orbitals::Pipeline;
pub use scene::{Canvas, Fragment, RenderTransform};
pub use sdf::{sdf_smooth_union, sdf_sphere, sdf_to_alpha, sdf_union};
