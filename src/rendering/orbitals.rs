// src/rendering/orbitals.rs

use log::debug;
use nalgebra::Vector3;

use crate::config::RenderSettings;
use crate::error::DomainError;
use crate::model::{OrbitalShape, QuantumState};
use crate::physics::OrbitalEngine;

use super::nucleons::NucleonField;
use super::scene::{depth_scale, sort_back_to_front, Canvas, Fragment, RenderTransform};

const CLOUD_BLUE: (f64, f64, f64) = (0.39, 0.71, 1.0);
const PHASE_ORANGE: (f64, f64, f64) = (1.0, 0.59, 0.39);

// View-space light direction (upper-left, toward the viewer).
const LIGHT_DIR: (f64, f64, f64) = (-0.45, -0.6, 0.66);

/// Turns nucleon fields and orbital densities into depth-sorted
/// fragment lists. Depth increases toward the viewer; fragments are
/// ordered back to front for painter's-algorithm compositing.
#[derive(Debug)]
pub struct Pipeline {
    settings: RenderSettings,
    skipped_samples: u32,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

impl Pipeline {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            skipped_samples: 0,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Grid points dropped by the last orbital pass, from the density
    /// floor or failed evaluations.
    pub fn skipped_samples(&self) -> u32 {
        self.skipped_samples
    }

    /// Project the packed nucleons into fragments, back to front.
    pub fn render_nucleus(&self, field: &NucleonField, transform: &RenderTransform) -> Vec<Fragment> {
        let rotate = transform.rotator();
        let r = field.radius();
        let light = Vector3::new(LIGHT_DIR.0, LIGHT_DIR.1, LIGHT_DIR.2).normalize();
        let mut fragments = Vec::new();

        for (center, species) in field.nucleon_centers() {
            let p = rotate(center);
            let scale = depth_scale(p.z, self.settings.depth_denominator).clamp(0.5, 1.5);
            // Nearer nucleons draw brighter.
            let depth_alpha = (0.4 + 0.6 * (1.0 + p.z / (r + 1.0)) / 2.0).clamp(0.3, 1.0);
            // Offset from the light-facing side of the nucleus, scaled
            // into the nucleon radius for the soft-edge falloff.
            let occlusion = ((r - p.dot(&light)) / (2.0 * r)).clamp(0.0, 1.0);
            let shade = field.shade(occlusion * field.nucleon_radius());
            fragments.push(Fragment {
                x: p.x * scale,
                y: p.y * scale,
                depth: p.z,
                radius: field.nucleon_radius() * scale,
                color: species.color(),
                alpha: transform.opacity * depth_alpha * shade,
            });
        }

        sort_back_to_front(&mut fragments);
        fragments
    }

    /// Sample an orbital into fragments using the shape-specific
    /// strategy. `shell_radius` is the scene-space radius of the shell
    /// (Bohr-scaled internally). Failed density evaluations are
    /// skipped and counted, never propagated.
    pub fn render_orbital(
        &mut self,
        engine: &OrbitalEngine,
        state: QuantumState,
        z: u32,
        shell_radius: f64,
        transform: &RenderTransform,
    ) -> Vec<Fragment> {
        self.skipped_samples = 0;
        let mut fragments = match state.shape() {
            OrbitalShape::S => self.sample_shells(engine, state, z, shell_radius, transform),
            OrbitalShape::P => self.sample_lobes(shell_radius, state.m(), transform),
            OrbitalShape::D | OrbitalShape::F => {
                self.sample_angular_grid(engine, state, z, shell_radius, transform)
            }
        };
        sort_back_to_front(&mut fragments);
        fragments
    }

    // s orbitals: concentric shells outward, alpha from the radial
    // density, slight pulse from the animation phase.
    fn sample_shells(
        &mut self,
        engine: &OrbitalEngine,
        state: QuantumState,
        z: u32,
        shell_radius: f64,
        transform: &RenderTransform,
    ) -> Vec<Fragment> {
        let shells = self.settings.shell_count.max(1);
        let max_extent = shell_radius * 2.0;
        let pulse = transform.phase().sin() * 0.05;

        // Rotation squashes the projected shells into ellipses; the
        // Fragment carries one radius, so use the mean axis.
        let squash_x = transform.rot_y().cos().abs().max(0.4);
        let squash_y = transform.rot_x().cos().abs().max(0.4);
        let squash = (squash_x + squash_y) / 2.0;

        let mut fragments = Vec::new();
        for i in 0..shells {
            let t = (i + 1) as f64 / shells as f64;
            let r_bohr = t * 2.0 * state.n() as f64;
            let density = match engine.probability_density(state, r_bohr, 0.0, 0.0, z) {
                Ok(d) => (d * 8.0).min(1.0),
                Err(e) => {
                    self.skipped_samples += 1;
                    debug!("shell sample failed at r = {r_bohr}: {e}");
                    continue;
                }
            };
            let animated =
                (density * (1.0 + pulse * (t * std::f64::consts::TAU).sin())).clamp(0.0, 1.0);
            if animated < 0.01 {
                self.skipped_samples += 1;
                continue;
            }
            fragments.push(Fragment {
                x: 0.0,
                y: 0.0,
                // Outer shells sit behind inner ones.
                depth: -t * max_extent,
                radius: t * max_extent * squash,
                color: CLOUD_BLUE,
                alpha: 0.27 * animated * transform.opacity,
            });
        }
        fragments
    }

    // p orbitals: always exactly two opposed lobes on the m-selected
    // axis, opposite phase colors.
    fn sample_lobes(&self, shell_radius: f64, m: i32, transform: &RenderTransform) -> Vec<Fragment> {
        let max_extent = shell_radius * 2.2;
        // m = 0 lobes sit on the screen-vertical axis so the dumbbell
        // reads as such before any rotation; m = +1 goes into depth.
        let axis = match m {
            0 => Vector3::new(0.0, 1.0, 0.0),
            -1 => Vector3::new(1.0, 0.0, 0.0),
            _ => Vector3::new(0.0, 0.0, 1.0),
        };
        let rotate = transform.rotator();

        let mut fragments = Vec::new();
        for lobe_sign in [1.0, -1.0] {
            let p = rotate(axis * (max_extent * 0.4 * lobe_sign));
            let scale = depth_scale(p.z, max_extent * 2.0).clamp(0.5, 1.5);
            let depth_alpha = (0.4 + 0.6 * (1.0 + p.z / max_extent) / 2.0).clamp(0.3, 1.0);
            let color = if lobe_sign > 0.0 { CLOUD_BLUE } else { PHASE_ORANGE };
            fragments.push(Fragment {
                x: p.x * scale,
                y: p.y * scale,
                depth: p.z,
                radius: max_extent * 0.5 * scale,
                color,
                alpha: 0.35 * transform.opacity * depth_alpha,
            });
        }
        fragments
    }

    // d/f orbitals: coarse angular grid over the midplane slice, one
    // soft blob per surviving point.
    fn sample_angular_grid(
        &mut self,
        engine: &OrbitalEngine,
        state: QuantumState,
        z: u32,
        shell_radius: f64,
        transform: &RenderTransform,
    ) -> Vec<Fragment> {
        let grid = self.settings.grid_size.max(2);
        let max_extent = shell_radius * 2.0;
        let blob_size = max_extent / grid as f64 * 1.5;
        let rotate = transform.rotator();
        let half = grid as f64 / 2.0;

        let mut fragments = Vec::new();
        let mut failed = 0u32;
        for i in 0..grid {
            for j in 0..grid {
                let nx = (i as f64 - half) / half;
                let ny = (j as f64 - half) / half;
                let r_norm = (nx * nx + ny * ny).sqrt();
                if !(0.05..=1.0).contains(&r_norm) {
                    continue;
                }

                let theta = (ny / r_norm).clamp(-1.0, 1.0).acos();
                let phi = nx.atan2(0.1);
                let r_bohr = r_norm * 2.0 * state.n() as f64;
                let density = match engine.probability_density(state, r_bohr, theta, phi, z) {
                    Ok(d) => (d * 20.0).min(1.0),
                    Err(e) => {
                        failed += 1;
                        debug!("grid sample ({i}, {j}) failed: {e}");
                        continue;
                    }
                };
                if density < self.settings.min_density {
                    self.skipped_samples += 1;
                    continue;
                }

                let p = rotate(Vector3::new(nx * max_extent, ny * max_extent, 0.0));
                fragments.push(Fragment {
                    x: p.x,
                    y: p.y,
                    depth: p.z,
                    radius: blob_size,
                    color: CLOUD_BLUE,
                    alpha: 0.4 * density * transform.opacity,
                });
            }
        }
        if failed > 0 {
            debug!("angular pass dropped {failed} failed samples");
            self.skipped_samples += failed;
        }
        fragments
    }

    /// Radial probability curve P(r) = r^2 R^2 at the configured
    /// resolution, for the density plot drawn next to the cloud.
    pub fn radial_profile(
        &self,
        engine: &OrbitalEngine,
        state: QuantumState,
        z: u32,
        r_max: f64,
    ) -> Result<Vec<(f64, f64)>, DomainError> {
        engine.radial_distribution(state.n(), state.l(), z, r_max, self.settings.radial_steps)
    }

    /// Replay a fragment list onto a canvas, in list order.
    pub fn present(&self, fragments: &[Fragment], canvas: &mut dyn Canvas) {
        for f in fragments {
            canvas.fill_circle_radial(f.x, f.y, f.radius, f.color, f.alpha);
        }
    }
}
