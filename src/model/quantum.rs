// src/model/quantum.rs

use crate::error::DomainError;

/// Quantum numbers (n, l, m) for a single-electron orbital.
///
/// Immutable once constructed; a new selection produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantumState {
    n: u32,
    l: u32,
    m: i32,
}

/// Closed set of orbital shapes used by the rendering dispatch.
/// Everything with l >= 3 renders with the F (angular grid) strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitalShape {
    S,
    P,
    D,
    F,
}

impl QuantumState {
    pub fn new(n: u32, l: u32, m: i32) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::ZeroPrincipal);
        }
        if l >= n || m.unsigned_abs() > l {
            return Err(DomainError::InvalidQuantumNumbers { n, l, m });
        }
        Ok(Self { n, l, m })
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn m(&self) -> i32 {
        self.m
    }

    pub fn shape(&self) -> OrbitalShape {
        match self.l {
            0 => OrbitalShape::S,
            1 => OrbitalShape::P,
            2 => OrbitalShape::D,
            _ => OrbitalShape::F,
        }
    }

    /// Standard orbital label: "1s", "2pz", "3dxy", "3dz²", ...
    /// s orbitals carry no axis subscript.
    pub fn name(&self) -> String {
        let letter = subshell_letter(self.l);
        if self.l == 0 {
            return format!("{}{}", self.n, letter);
        }
        let sub = match (self.l, self.m) {
            (1, -1) => "x",
            (1, 0) => "z",
            (1, 1) => "y",
            (2, -2) => "xy",
            (2, -1) => "yz",
            (2, 0) => "z²",
            (2, 1) => "xz",
            (2, 2) => "x²-y²",
            _ => return format!("{}{}{:+}", self.n, letter, self.m),
        };
        format!("{}{}{}", self.n, letter, sub)
    }
}

pub fn subshell_letter(l: u32) -> char {
    match l {
        0 => 's',
        1 => 'p',
        2 => 'd',
        3 => 'f',
        4 => 'g',
        5 => 'h',
        _ => '?',
    }
}

/// Enumerate all valid (n, l, m) states up to a maximum principal
/// quantum number, in shell order.
pub fn available_orbitals(max_n: u32) -> Vec<QuantumState> {
    let mut out = Vec::new();
    for n in 1..=max_n {
        for l in 0..n {
            for m in -(l as i32)..=(l as i32) {
                // In range by construction
                if let Ok(state) = QuantumState::new(n, l, m) {
                    out.push(state);
                }
            }
        }
    }
    out
}
