// src/rendering/sdf.rs

use nalgebra::Vector3;

/// Signed distance to a sphere surface. Negative inside.
pub fn sdf_sphere(p: Vector3<f64>, center: Vector3<f64>, radius: f64) -> f64 {
    (p - center).norm() - radius
}

/// Distance to coverage with a smoothstep falloff. Fully opaque well
/// inside the surface, fully transparent `softness` units outside.
pub fn sdf_to_alpha(distance: f64, softness: f64) -> f64 {
    let t = (0.5 - distance / softness).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Hard union of two distance fields.
pub fn sdf_union(d1: f64, d2: f64) -> f64 {
    d1.min(d2)
}

/// Polynomial smooth union; k controls the blend width.
pub fn sdf_smooth_union(d1: f64, d2: f64, k: f64) -> f64 {
    let h = (k - (d1 - d2).abs()).max(0.0) / k;
    d1.min(d2) - h * h * k * 0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_sign_convention() {
        let c = Vector3::new(1.0, 0.0, 0.0);
        assert!(sdf_sphere(Vector3::new(1.0, 0.0, 0.0), c, 1.0) < 0.0);
        assert_eq!(sdf_sphere(Vector3::new(3.0, 0.0, 0.0), c, 1.0), 1.0);
    }

    #[test]
    fn test_alpha_ranges() {
        // deep inside -> opaque, far outside -> transparent
        assert_eq!(sdf_to_alpha(-10.0, 2.0), 1.0);
        assert_eq!(sdf_to_alpha(10.0, 2.0), 0.0);
        let a = sdf_to_alpha(0.0, 2.0);
        assert!(a > 0.0 && a < 1.0);
        // monotone falloff
        assert!(sdf_to_alpha(-0.5, 2.0) > sdf_to_alpha(0.5, 2.0));
    }

    #[test]
    fn test_smooth_union_never_exceeds_hard_union() {
        for &(d1, d2) in &[(0.3, 0.5), (1.0, -0.2), (0.1, 0.1)] {
            assert!(sdf_smooth_union(d1, d2, 0.5) <= sdf_union(d1, d2) + 1e-12);
        }
    }
}
