// src/rendering/nucleons.rs

use nalgebra::Vector3;

use crate::model::{NuclearComposition, Species};

/// Deterministic nucleon packing inside the liquid-drop sphere,
/// sampled as a signed distance field. The enclosing cube of side 2R
/// is partitioned into a regular grid with about one cell per nucleon;
/// a query point folds modulo the cell size onto the nearest cell
/// center, and a hash of the cell index decides the species. No RNG
/// state exists anywhere, so two fields built from the same (Z, N)
/// are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NucleonField {
    composition: NuclearComposition,
    radius: f64,
    cells_per_axis: u32,
    cell_size: f64,
    nucleon_radius: f64,
}

impl NucleonField {
    /// None for an empty composition (A = 0): no nucleons, no field.
    pub fn new(composition: NuclearComposition) -> Option<Self> {
        let a = composition.mass_number();
        if a == 0 {
            return None;
        }
        let radius = composition.nuclear_radius();
        let cells_per_axis = (a as f64).cbrt().ceil() as u32;
        let cell_size = 2.0 * radius / cells_per_axis as f64;
        Some(Self {
            composition,
            radius,
            cells_per_axis,
            cell_size,
            nucleon_radius: 0.4 * cell_size,
        })
    }

    pub fn composition(&self) -> NuclearComposition {
        self.composition
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn nucleon_radius(&self) -> f64 {
        self.nucleon_radius
    }

    pub fn cells_per_axis(&self) -> u32 {
        self.cells_per_axis
    }

    /// Cell index triple and offset from that cell's center. The grid
    /// tiles all of space; indices outside [0, cells_per_axis) belong
    /// to cells beyond the nuclear surface.
    pub fn fold(&self, p: Vector3<f64>) -> ([i64; 3], Vector3<f64>) {
        let mut cell = [0i64; 3];
        let mut offset = Vector3::zeros();
        for axis in 0..3 {
            let shifted = p[axis] + self.radius;
            let idx = (shifted / self.cell_size).floor();
            cell[axis] = idx as i64;
            offset[axis] = shifted - (idx + 0.5) * self.cell_size;
        }
        (cell, offset)
    }

    /// Distance from p to the nearest nucleon surface. Negative inside
    /// a nucleon.
    pub fn signed_distance(&self, p: Vector3<f64>) -> f64 {
        let (_, offset) = self.fold(p);
        offset.norm() - self.nucleon_radius
    }

    /// Species of the nucleon occupying a cell: proton with
    /// probability Z/A under the cell-index hash. Visual heuristic,
    /// not nuclear shell structure.
    pub fn species(&self, cell: [i64; 3]) -> Species {
        let h = cell_hash(cell);
        let fraction = h as f64 / (u64::MAX as f64 + 1.0);
        if fraction < self.composition.proton_fraction() {
            Species::Proton
        } else {
            Species::Neutron
        }
    }

    /// Centers of the cells inside the liquid-drop sphere, with their
    /// species, in deterministic grid order.
    pub fn nucleon_centers(&self) -> Vec<(Vector3<f64>, Species)> {
        let n = self.cells_per_axis as i64;
        let mut out = Vec::new();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let center = Vector3::new(
                        (i as f64 + 0.5) * self.cell_size - self.radius,
                        (j as f64 + 0.5) * self.cell_size - self.radius,
                        (k as f64 + 0.5) * self.cell_size - self.radius,
                    );
                    if center.norm() <= self.radius {
                        out.push((center, self.species([i, j, k])));
                    }
                }
            }
        }
        out
    }

    /// Directional-light soft-edge factor from the local offset
    /// magnitude: 1 at the nucleon center, falling toward the surface.
    pub fn shade(&self, offset_norm: f64) -> f64 {
        let t = (offset_norm / self.nucleon_radius).clamp(0.0, 1.0);
        let lit = 1.0 - t * t;
        0.3 + 0.7 * lit
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn cell_hash(cell: [i64; 3]) -> u64 {
    let mut h = splitmix64(cell[0] as u64);
    h = splitmix64(h ^ cell[1] as u64);
    splitmix64(h ^ cell[2] as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_composition_has_no_field() {
        assert!(NucleonField::new(NuclearComposition::new(0, 0)).is_none());
    }

    #[test]
    fn test_grid_sizing() {
        // A = 8 -> 2 cells per axis, R = 2 r0
        let f = NucleonField::new(NuclearComposition::new(4, 4)).unwrap();
        assert_eq!(f.cells_per_axis(), 2);
        assert!((f.radius() - 2.5).abs() < 1e-12);
        assert!((f.nucleon_radius() - 0.4 * f.radius()).abs() < 1e-12);
    }

    #[test]
    fn test_fold_is_periodic() {
        let f = NucleonField::new(NuclearComposition::new(26, 30)).unwrap();
        let p = Vector3::new(0.37, -1.1, 0.9);
        let period = f.cell_size;
        let (_, o1) = f.fold(p);
        let (_, o2) = f.fold(p + Vector3::new(period, 0.0, 0.0));
        assert!((o1 - o2).norm() < 1e-9);
    }

    #[test]
    fn test_signed_distance_at_cell_center() {
        let f = NucleonField::new(NuclearComposition::new(2, 2)).unwrap();
        // Any cell center sits exactly -nucleon_radius deep.
        let centers = f.nucleon_centers();
        assert!(!centers.is_empty());
        let d = f.signed_distance(centers[0].0);
        assert!((d + f.nucleon_radius()).abs() < 1e-9);
    }

    #[test]
    fn test_determinism_across_instances() {
        let a = NucleonField::new(NuclearComposition::new(26, 30)).unwrap();
        let b = NucleonField::new(NuclearComposition::new(26, 30)).unwrap();
        assert_eq!(a.nucleon_centers(), b.nucleon_centers());
    }

    #[test]
    fn test_shade_falls_off_with_offset() {
        let f = NucleonField::new(NuclearComposition::new(26, 30)).unwrap();
        let r = f.nucleon_radius();
        assert!((f.shade(0.0) - 1.0).abs() < 1e-12);
        assert!((f.shade(r) - 0.3).abs() < 1e-12);
        // monotone from lit center to dark edge
        assert!(f.shade(0.25 * r) > f.shade(0.5 * r));
        assert!(f.shade(0.5 * r) > f.shade(0.75 * r));
        // clamped beyond the surface
        assert!((f.shade(2.0 * r) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_proton_fraction_converges() {
        // Folding tiles all of space, so a 16^3 block of cell indices
        // gives 4096 Bernoulli draws of the species hash.
        let f = NucleonField::new(NuclearComposition::new(26, 30)).unwrap();
        let mut protons = 0u32;
        let total = 16u32 * 16 * 16;
        for i in 0..16i64 {
            for j in 0..16i64 {
                for k in 0..16i64 {
                    if f.species([i, j, k]) == Species::Proton {
                        protons += 1;
                    }
                }
            }
        }
        let realized = protons as f64 / total as f64;
        let expected = 26.0 / 56.0;
        assert!((realized - expected).abs() < 0.05, "realized {realized}");
    }
}
