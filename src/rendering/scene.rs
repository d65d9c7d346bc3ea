// src/rendering/scene.rs

use std::f64::consts::TAU;

use nalgebra::Vector3;

// Fragments are consumed by any Canvas implementation; the core never
// touches pixels itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
  pub x: f64,
  pub y: f64,
  pub depth: f64,
  pub radius: f64,
  pub color: (f64, f64, f64),
  pub alpha: f64,
}

/// View transform fed in by the interaction layer each frame. Angles
/// are normalized into [0, 2pi) on every mutation, never afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
  rot_x: f64,
  rot_y: f64,
  pub opacity: f64,
  phase: f64,
}

fn wrap_angle(a: f64) -> f64 {
  let w = a % TAU;
  if w < 0.0 {
    w + TAU
  } else {
    w
  }
}

impl Default for RenderTransform {
  fn default() -> Self {
    Self {
      rot_x: 0.0,
      rot_y: 0.0,
      opacity: 1.0,
      phase: 0.0,
    }
  }
}

impl RenderTransform {
  pub fn new(rot_x: f64, rot_y: f64, opacity: f64, phase: f64) -> Self {
    Self {
      rot_x: wrap_angle(rot_x),
      rot_y: wrap_angle(rot_y),
      opacity: opacity.clamp(0.0, 1.0),
      phase: wrap_angle(phase),
    }
  }

  pub fn rot_x(&self) -> f64 {
    self.rot_x
  }

  pub fn rot_y(&self) -> f64 {
    self.rot_y
  }

  pub fn phase(&self) -> f64 {
    self.phase
  }

  pub fn set_rotation(&mut self, rot_x: f64, rot_y: f64) {
    self.rot_x = wrap_angle(rot_x);
    self.rot_y = wrap_angle(rot_y);
  }

  /// Advances the animation phase, wrapping at 2pi.
  pub fn advance_phase(&mut self, dt: f64) {
    self.phase = wrap_angle(self.phase + dt);
  }

  // Rotation Closure: X -> Y
  pub fn rotator(&self) -> impl Fn(Vector3<f64>) -> Vector3<f64> {
    let (sin_x, cos_x) = self.rot_x.sin_cos();
    let (sin_y, cos_y) = self.rot_y.sin_cos();

    move |p: Vector3<f64>| -> Vector3<f64> {
      // Rotate around X
      let y1 = p.y * cos_x - p.z * sin_x;
      let z1 = p.y * sin_x + p.z * cos_x;

      // Rotate around Y
      let x2 = p.x * cos_y + z1 * sin_y;
      let z2 = -p.x * sin_y + z1 * cos_y;

      Vector3::new(x2, y1, z2)
    }
  }
}

/// Drawing capability supplied by the host. The pipeline replays a
/// depth-sorted fragment list onto it.
pub trait Canvas {
  fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: (f64, f64, f64), alpha: f64);
  /// Radial-gradient disc, opaque center fading to the rim.
  fn fill_circle_radial(&mut self, x: f64, y: f64, radius: f64, color: (f64, f64, f64), alpha: f64);
  fn draw_line(
    &mut self,
    from: (f64, f64),
    to: (f64, f64),
    width: f64,
    color: (f64, f64, f64),
    alpha: f64,
  );
}

/// Perspective stand-in: points farther away shrink toward the center.
pub fn depth_scale(z: f64, denominator: f64) -> f64 {
  1.0 / (1.0 + z / denominator)
}

/// Painter's algorithm: back-to-front by transformed depth.
pub fn sort_back_to_front(fragments: &mut [Fragment]) {
  fragments.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(std::cmp::Ordering::Equal));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_angles_normalized_on_construction() {
    let t = RenderTransform::new(-0.5, 3.0 * TAU + 0.25, 1.0, 0.0);
    assert!((t.rot_x() - (TAU - 0.5)).abs() < 1e-12);
    assert!((t.rot_y() - 0.25).abs() < 1e-12);
  }

  #[test]
  fn test_zero_rotation_is_identity() {
    let rotate = RenderTransform::default().rotator();
    let p = Vector3::new(1.3, -0.4, 2.2);
    assert!((rotate(p) - p).norm() < 1e-12);
  }

  #[test]
  fn test_full_turn_equals_zero() {
    let a = RenderTransform::new(TAU, TAU, 1.0, 0.0).rotator();
    let b = RenderTransform::default().rotator();
    let p = Vector3::new(0.7, 1.1, -0.9);
    assert!((a(p) - b(p)).norm() < 1e-9);
  }

  #[test]
  fn test_rotation_preserves_length() {
    let rotate = RenderTransform::new(0.8, 1.9, 1.0, 0.0).rotator();
    let p = Vector3::new(2.0, -1.0, 0.5);
    assert!((rotate(p).norm() - p.norm()).abs() < 1e-12);
  }

  #[test]
  fn test_phase_wraps() {
    let mut t = RenderTransform::default();
    t.advance_phase(TAU + 1.0);
    assert!((t.phase() - 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_depth_sort_back_to_front() {
    let frag = |depth: f64| Fragment {
      x: 0.0,
      y: 0.0,
      depth,
      radius: 1.0,
      color: (1.0, 1.0, 1.0),
      alpha: 1.0,
    };
    let mut frags = vec![frag(0.5), frag(-2.0), frag(1.5)];
    sort_back_to_front(&mut frags);
    assert_eq!(frags[0].depth, -2.0);
    assert_eq!(frags[2].depth, 1.5);
  }

  #[test]
  fn test_depth_scale_shrinks_far_points() {
    assert_eq!(depth_scale(0.0, 8.0), 1.0);
    assert!(depth_scale(4.0, 8.0) < 1.0);
    assert!(depth_scale(-2.0, 8.0) > 1.0);
  }
}
