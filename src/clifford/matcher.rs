// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Phase-insensitive unitary matching.
//!
//! Two matrices represent the same physical gate when one equals the
//! other times a unit-modulus phase. For this table the phase
//! ambiguities are restricted to quarter turns, so equivalence is a
//! brute-force enumeration over the four candidates {1, −1, i, −i};
//! the enumeration is deliberate, not a placeholder for a norm test.

use ndarray::Array2;
use num_complex::Complex64;

use super::table::GroupTable;

/// Default comparison tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// The four candidate global phases.
const PHASES: [Complex64; 4] = [
    Complex64 { re: 1.0, im: 0.0 },
    Complex64 { re: -1.0, im: 0.0 },
    Complex64 { re: 0.0, im: 1.0 },
    Complex64 { re: 0.0, im: -1.0 },
];

/// Element-wise comparison: true iff every entry of `a − b` has
/// magnitude at most `tolerance`.
///
/// This is stricter on phase and scaling errors than a spectral-norm
/// comparison would be; it is kept element-wise for tolerance
/// compatibility with the calibration pipelines consuming sequence
/// output.
pub fn matrix_compare(a: &Array2<Complex64>, b: &Array2<Complex64>, tolerance: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= tolerance)
}

/// True iff `f·a` compares equal to `b` for some phase f in
/// {1, −1, i, −i}.
pub fn phase_equivalent(a: &Array2<Complex64>, b: &Array2<Complex64>, tolerance: f64) -> bool {
    PHASES
        .iter()
        .any(|&f| matrix_compare(&(a * f), b, tolerance))
}

/// Scan the table in index order and return the first element
/// phase-equivalent to `a`, or `None` if nothing matches.
///
/// `None` is a real outcome the caller must handle: the result indexes
/// into the canonical-name table, so substituting a default here would
/// silently corrupt downstream sequences.
pub fn find_index(a: &Array2<Complex64>, table: &GroupTable, tolerance: f64) -> Option<usize> {
    (0..table.len()).find(|&i| phase_equivalent(a, table.matrix(i), tolerance))
}
