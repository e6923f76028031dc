// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! The 24-element single-qubit Clifford group table.
//!
//! Matrix values and pulse-name decompositions are a wire contract with
//! downstream pulse compilation and must be reproduced bit-for-bit.
//! The table is immutable; [`GroupTable::validated`] checks pairwise
//! inequivalence and group closure once at startup instead of trusting
//! the literals.

use std::fmt;
use std::str::FromStr;

use ndarray::{arr2, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::matcher::{find_index, phase_equivalent};
use crate::error::{Result, SequenceError, TableError};

/// Order of the single-qubit Clifford group.
pub const GROUP_ORDER: usize = 24;

/// Primitive pulse name driving physical control hardware.
///
/// `X2p` is a +90° rotation about X, `X2n` the −90° rotation, and
/// likewise for Y. This is the full vocabulary used by canonical
/// decompositions and the only tokens [`check_seq`](crate::rbm::check_seq)
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pulse {
    /// Identity
    I,
    /// π rotation about X
    X,
    /// π rotation about Y
    Y,
    /// +π/2 rotation about X
    X2p,
    /// −π/2 rotation about X
    X2n,
    /// +π/2 rotation about Y
    Y2p,
    /// −π/2 rotation about Y
    Y2n,
}

impl Pulse {
    /// Canonical token string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pulse::I => "I",
            Pulse::X => "X",
            Pulse::Y => "Y",
            Pulse::X2p => "X2p",
            Pulse::X2n => "X2n",
            Pulse::Y2p => "Y2p",
            Pulse::Y2n => "Y2n",
        }
    }

    /// Group index of the element realized by this single pulse.
    ///
    /// This is the fixed partial name→index map used for verification;
    /// compound decompositions like `[Y, X]` have no single index here.
    pub fn group_index(&self) -> usize {
        match self {
            Pulse::I => 0,
            Pulse::X => 1,
            Pulse::Y => 2,
            Pulse::X2p => 4,
            Pulse::X2n => 5,
            Pulse::Y2p => 6,
            Pulse::Y2n => 7,
        }
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pulse {
    type Err = SequenceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "I" => Ok(Pulse::I),
            "X" => Ok(Pulse::X),
            "Y" => Ok(Pulse::Y),
            "X2p" => Ok(Pulse::X2p),
            "X2n" => Ok(Pulse::X2n),
            "Y2p" => Ok(Pulse::Y2p),
            "Y2n" => Ok(Pulse::Y2n),
            other => Err(SequenceError::InvalidToken(other.to_string())),
        }
    }
}

/// Immutable table of the 24 Clifford elements.
///
/// Element `i` carries a 2×2 unitary `matrix(i)` (defined up to global
/// phase) and the canonical pulse decomposition `decomposition(i)` that
/// realizes it, listed in application order (first-applied pulse first).
#[derive(Debug, Clone)]
pub struct GroupTable {
    matrices: Vec<Array2<Complex64>>,
    decompositions: Vec<Vec<Pulse>>,
}

impl GroupTable {
    /// Build the table from the canonical constants, without validation.
    pub fn new() -> Self {
        Self {
            matrices: build_matrices(),
            decompositions: build_decompositions(),
        }
    }

    /// Build the table and verify its structural invariants once:
    /// pairwise phase-inequivalence and closure under multiplication.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateElement`] if two elements match up to phase
    /// - [`TableError::ClosureViolation`] if some pairwise product
    ///   matches no element within `tolerance`
    pub fn validated(tolerance: f64) -> Result<Self> {
        let table = Self::new();
        for i in 0..GROUP_ORDER {
            for j in (i + 1)..GROUP_ORDER {
                if phase_equivalent(&table.matrices[i], &table.matrices[j], tolerance) {
                    return Err(TableError::DuplicateElement { i, j }.into());
                }
            }
        }
        for i in 0..GROUP_ORDER {
            for j in 0..GROUP_ORDER {
                let product = table.matrices[i].dot(&table.matrices[j]);
                if find_index(&product, &table, tolerance).is_none() {
                    return Err(TableError::ClosureViolation { i, j }.into());
                }
            }
        }
        info!(tolerance, "group table validated: 24 distinct elements, closed under product");
        Ok(table)
    }

    /// Number of elements (always [`GROUP_ORDER`]).
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Always false; present for the usual container pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Matrix of element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= GROUP_ORDER`.
    pub fn matrix(&self, index: usize) -> &Array2<Complex64> {
        &self.matrices[index]
    }

    /// Canonical pulse decomposition of element `index`, in application
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= GROUP_ORDER`.
    pub fn decomposition(&self, index: usize) -> &[Pulse] {
        &self.decompositions[index]
    }

    /// The identity element's matrix (element 0).
    pub fn identity(&self) -> &Array2<Complex64> {
        &self.matrices[0]
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// The 24 canonical matrices, in table order.
fn build_matrices() -> Vec<Array2<Complex64>> {
    // 1/sqrt(2), matching the correctly rounded double of the reference
    // constants.
    let s = std::f64::consts::FRAC_1_SQRT_2;
    vec![
        arr2(&[[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]]),
        arr2(&[[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, -1.0), c(0.0, 0.0)]]),
        arr2(&[[c(0.0, 0.0), c(-1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]]),
        arr2(&[[c(0.0, -1.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]]),
        arr2(&[[c(s, 0.0), c(0.0, -s)], [c(0.0, -s), c(s, 0.0)]]),
        arr2(&[[c(s, 0.0), c(0.0, s)], [c(0.0, s), c(s, 0.0)]]),
        arr2(&[[c(s, 0.0), c(-s, 0.0)], [c(s, 0.0), c(s, 0.0)]]),
        arr2(&[[c(s, 0.0), c(s, 0.0)], [c(-s, 0.0), c(s, 0.0)]]),
        arr2(&[[c(s, -s), c(0.0, 0.0)], [c(0.0, 0.0), c(s, s)]]),
        arr2(&[[c(s, s), c(0.0, 0.0)], [c(0.0, 0.0), c(s, -s)]]),
        arr2(&[[c(0.0, -s), c(0.0, -s)], [c(0.0, -s), c(0.0, s)]]),
        arr2(&[[c(0.0, s), c(0.0, -s)], [c(0.0, -s), c(0.0, -s)]]),
        arr2(&[[c(0.0, -s), c(-s, 0.0)], [c(s, 0.0), c(0.0, s)]]),
        arr2(&[[c(0.0, s), c(-s, 0.0)], [c(s, 0.0), c(0.0, -s)]]),
        arr2(&[[c(0.0, 0.0), c(-s, -s)], [c(s, -s), c(0.0, 0.0)]]),
        arr2(&[[c(0.0, 0.0), c(-s, s)], [c(s, s), c(0.0, 0.0)]]),
        arr2(&[[c(0.5, -0.5), c(-0.5, -0.5)], [c(0.5, -0.5), c(0.5, 0.5)]]),
        arr2(&[[c(0.5, 0.5), c(-0.5, 0.5)], [c(0.5, 0.5), c(0.5, -0.5)]]),
        arr2(&[[c(0.5, 0.5), c(0.5, -0.5)], [c(-0.5, -0.5), c(0.5, -0.5)]]),
        arr2(&[[c(0.5, -0.5), c(0.5, 0.5)], [c(-0.5, 0.5), c(0.5, 0.5)]]),
        arr2(&[[c(0.5, -0.5), c(0.5, -0.5)], [c(-0.5, -0.5), c(0.5, 0.5)]]),
        arr2(&[[c(0.5, 0.5), c(0.5, 0.5)], [c(-0.5, 0.5), c(0.5, -0.5)]]),
        arr2(&[[c(0.5, 0.5), c(-0.5, -0.5)], [c(0.5, -0.5), c(0.5, -0.5)]]),
        arr2(&[[c(0.5, -0.5), c(-0.5, 0.5)], [c(0.5, 0.5), c(0.5, 0.5)]]),
    ]
}

/// Canonical pulse decompositions, in table order.
fn build_decompositions() -> Vec<Vec<Pulse>> {
    use Pulse::*;
    vec![
        vec![I],
        vec![X],
        vec![Y],
        vec![Y, X],
        vec![X2p],
        vec![X2n],
        vec![Y2p],
        vec![Y2n],
        vec![X2n, Y2p, X2p],
        vec![X2n, Y2n, X2p],
        vec![X, Y2n],
        vec![X, Y2p],
        vec![Y, X2p],
        vec![Y, X2n],
        vec![X2p, Y2p, X2p],
        vec![X2n, Y2p, X2n],
        vec![Y2p, X2p],
        vec![Y2p, X2n],
        vec![Y2n, X2p],
        vec![Y2n, X2n],
        vec![X2p, Y2n],
        vec![X2n, Y2n],
        vec![X2p, Y2p],
        vec![X2n, Y2p],
    ]
}
