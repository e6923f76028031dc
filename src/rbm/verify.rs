// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Verification that a flattened pulse sequence composes to the
//! identity.
//!
//! Verification is restricted to the 7-symbol vocabulary: each pulse
//! maps to a group index through the fixed partial map, so compound
//! decompositions like `[Y, X]` must arrive already flattened.

use tracing::debug;

use crate::clifford::compose::compose;
use crate::clifford::matcher::phase_equivalent;
use crate::clifford::table::{GroupTable, Pulse};
use crate::error::Result;

/// True iff the pulse sequence composes to the identity up to global
/// phase.
///
/// Pulses are listed in application order and composed under the same
/// reversed convention as generation, so the output of
/// [`rbm_seq`](crate::rbm::rbm_seq) always verifies.
pub fn check_seq(table: &GroupTable, pulses: &[Pulse], tolerance: f64) -> bool {
    let indices: Vec<usize> = pulses.iter().map(|p| p.group_index()).collect();
    let net = compose(table, &indices);
    let ok = phase_equivalent(&net, table.identity(), tolerance);
    debug!(len = pulses.len(), ok, "verified pulse sequence");
    ok
}

/// Token-string entry point for [`check_seq`].
///
/// # Errors
///
/// [`crate::error::SequenceError::InvalidToken`] for any token outside
/// the 7-symbol vocabulary; unknown tokens are a usage error, never
/// skipped.
pub fn check_seq_tokens<S: AsRef<str>>(
    table: &GroupTable,
    tokens: &[S],
    tolerance: f64,
) -> Result<bool> {
    let mut pulses = Vec::with_capacity(tokens.len());
    for token in tokens {
        pulses.push(token.as_ref().parse::<Pulse>()?);
    }
    Ok(check_seq(table, &pulses, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clifford::matcher::DEFAULT_TOLERANCE;
    use crate::error::{Error, SequenceError};

    #[test]
    fn test_identity_pulse_verifies() {
        let table = GroupTable::new();
        assert!(check_seq(&table, &[Pulse::I], DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_empty_sequence_verifies() {
        let table = GroupTable::new();
        assert!(check_seq(&table, &[], DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_x_twice_verifies() {
        // X is self-inverse up to phase.
        let table = GroupTable::new();
        assert!(check_seq(&table, &[Pulse::X, Pulse::X], DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_single_quarter_turn_fails() {
        let table = GroupTable::new();
        assert!(!check_seq(&table, &[Pulse::X2p], DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_quarter_turn_pairs_verify() {
        let table = GroupTable::new();
        assert!(check_seq(&table, &[Pulse::X2p, Pulse::X2n], DEFAULT_TOLERANCE));
        assert!(check_seq(&table, &[Pulse::Y2n, Pulse::Y2p], DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_two_quarter_turns_same_axis_fail() {
        // X2p·X2p is X up to phase, not the identity.
        let table = GroupTable::new();
        assert!(!check_seq(&table, &[Pulse::X2p, Pulse::X2p], DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_non_abelian_order_sensitivity() {
        // Y2n undoes Y2p only when adjacent; with an X in between the
        // sequence is a different operator.
        let table = GroupTable::new();
        assert!(check_seq(
            &table,
            &[Pulse::Y2p, Pulse::X, Pulse::X, Pulse::Y2n],
            DEFAULT_TOLERANCE
        ));
        assert!(!check_seq(
            &table,
            &[Pulse::Y2p, Pulse::X, Pulse::Y2n],
            DEFAULT_TOLERANCE
        ));
    }

    #[test]
    fn test_tokens_entry_point() {
        let table = GroupTable::new();
        assert!(check_seq_tokens(&table, &["X", "X"], DEFAULT_TOLERANCE).unwrap());
        assert!(!check_seq_tokens(&table, &["X2p"], DEFAULT_TOLERANCE).unwrap());
    }

    #[test]
    fn test_invalid_token_is_an_error() {
        let table = GroupTable::new();
        let err = check_seq_tokens(&table, &["X", "Z2p"], DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            Error::Sequence(SequenceError::InvalidToken(ref t)) if t == "Z2p"
        ));
    }
}
