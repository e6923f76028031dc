// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! The single-qubit Clifford group: table, matcher, and composer.
//!
//! - [`GroupTable`] and [`Pulse`] — the 24 canonical (matrix, pulse-name)
//!   pairs and the 7-symbol pulse vocabulary
//! - [`matrix_compare`], [`phase_equivalent`], [`find_index`] —
//!   phase-insensitive unitary matching
//! - [`compose`], [`dagger`] — sequence reduction to a net unitary

pub mod compose;
pub mod matcher;
pub mod table;

pub use compose::{compose, dagger};
pub use matcher::{find_index, matrix_compare, phase_equivalent, DEFAULT_TOLERANCE};
pub use table::{GroupTable, Pulse, GROUP_ORDER};
