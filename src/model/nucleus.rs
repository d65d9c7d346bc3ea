// src/model/nucleus.rs

/// Liquid-drop radius coefficient r0 (length units; ~1.25 fm in nature).
pub const R0: f64 = 1.25;

/// A nuclear composition: Z protons and N neutrons.
///
/// Counts are unsigned, so negative values are unrepresentable. A
/// composition with A = 0 is legal and produces no nucleons downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NuclearComposition {
    pub protons: u32,
    pub neutrons: u32,
}

/// Nucleon identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Proton,
    Neutron,
}

impl NuclearComposition {
    pub fn new(protons: u32, neutrons: u32) -> Self {
        Self { protons, neutrons }
    }

    /// Mass number A = Z + N.
    pub fn mass_number(&self) -> u32 {
        self.protons + self.neutrons
    }

    /// Fraction of nucleons that are protons, Z/A. Zero for A = 0.
    pub fn proton_fraction(&self) -> f64 {
        let a = self.mass_number();
        if a == 0 {
            0.0
        } else {
            self.protons as f64 / a as f64
        }
    }

    /// Liquid-drop nuclear radius R = r0 * A^(1/3).
    pub fn nuclear_radius(&self) -> f64 {
        R0 * (self.mass_number() as f64).cbrt()
    }
}

impl Species {
    /// Base display color. Warm red for protons, cool blue for neutrons.
    pub fn color(&self) -> (f64, f64, f64) {
        match self {
            Species::Proton => (1.0, 0.39, 0.39),
            Species::Neutron => (0.59, 0.67, 0.86),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_number_and_fraction() {
        let fe = NuclearComposition::new(26, 30);
        assert_eq!(fe.mass_number(), 56);
        assert!((fe.proton_fraction() - 26.0 / 56.0).abs() < 1e-15);

        let empty = NuclearComposition::new(0, 0);
        assert_eq!(empty.mass_number(), 0);
        assert_eq!(empty.proton_fraction(), 0.0);
    }

    #[test]
    fn test_liquid_drop_radius() {
        let h = NuclearComposition::new(1, 0);
        assert!((h.nuclear_radius() - R0).abs() < 1e-12);

        // R scales with A^(1/3): doubling A multiplies R by 2^(1/3)
        let a8 = NuclearComposition::new(4, 4);
        assert!((a8.nuclear_radius() - R0 * 2.0).abs() < 1e-12);
    }
}
