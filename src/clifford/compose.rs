// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Reduction of a gate-index sequence to its net unitary.

use ndarray::Array2;
use num_complex::Complex64;

use super::table::GroupTable;

/// Compose a gate sequence into its net unitary.
///
/// `indices` lists gates in the order they are physically applied, so
/// the product is M_{i_n} · … · M_{i_1}: each later gate multiplies
/// from the left, leaving the first-applied gate as the rightmost
/// factor. Getting this backward silently yields a different operator
/// for any non-abelian subsequence, so the ordering here is a contract,
/// not a detail.
///
/// An empty sequence composes to the identity.
///
/// # Panics
///
/// Panics if any index is `>= table.len()`.
pub fn compose(table: &GroupTable, indices: &[usize]) -> Array2<Complex64> {
    let mut result = Array2::from_diag_elem(2, Complex64::new(1.0, 0.0));
    for &i in indices {
        result = table.matrix(i).dot(&result);
    }
    result
}

/// Conjugate transpose (Hermitian adjoint) of a matrix.
///
/// For a unitary U this is its inverse: U · U† = I.
pub fn dagger(u: &Array2<Complex64>) -> Array2<Complex64> {
    u.t().mapv(|x| x.conj())
}
