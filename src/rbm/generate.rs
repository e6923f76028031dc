// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Random RBM sequence generation.
//!
//! A sequence of `length` uniform draws from the allowed elements is
//! reduced to its net unitary U; the unique group element matching U†
//! (up to phase) is appended so the whole sequence composes back to
//! the identity. Randomness is caller-supplied, so concurrent callers
//! with independent RNGs need no coordination.

use rand::Rng;
use tracing::debug;

use crate::clifford::compose::{compose, dagger};
use crate::clifford::matcher::{find_index, DEFAULT_TOLERANCE};
use crate::clifford::table::{GroupTable, Pulse};
use crate::config::{Config, ResourceLimits};
use crate::error::{Result, TableError};
use crate::validation::validate_sequence_request;

/// A generated RBM sequence.
///
/// `pulses` is the flattened pulse-name sequence handed to downstream
/// pulse compilation: the canonical decompositions of the sampled
/// elements in draw order, then the decomposition of the inverse
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbmSequence {
    /// Sampled group indices, in application order.
    pub indices: Vec<usize>,
    /// Index of the appended inverse element.
    pub inverse_index: usize,
    /// Flattened pulse-name sequence (sampled gates first, inverse last).
    pub pulses: Vec<Pulse>,
}

impl RbmSequence {
    /// Pulse names as token strings.
    pub fn pulse_names(&self) -> Vec<&'static str> {
        self.pulses.iter().map(|p| p.as_str()).collect()
    }
}

/// Generator of random RBM sequences over a group table.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<'a> {
    table: &'a GroupTable,
    tolerance: f64,
    limits: ResourceLimits,
}

impl<'a> SequenceGenerator<'a> {
    /// Create a generator with the default tolerance and limits.
    pub fn new(table: &'a GroupTable) -> Self {
        Self {
            table,
            tolerance: DEFAULT_TOLERANCE,
            limits: ResourceLimits::default(),
        }
    }

    /// Create a generator taking tolerance and limits from `config`.
    pub fn from_config(table: &'a GroupTable, config: &Config) -> Self {
        Self {
            table,
            tolerance: config.tolerance,
            limits: config.limits.clone(),
        }
    }

    /// Generate a sequence of `length` draws over the full group.
    ///
    /// Zero length is well-defined: the net unitary is the identity,
    /// whose inverse is element 0, so the output is exactly `[I]`.
    pub fn generate<R: Rng>(&self, length: usize, rng: &mut R) -> Result<RbmSequence> {
        let all: Vec<usize> = (0..self.table.len()).collect();
        self.generate_from(length, &all, rng)
    }

    /// Generate a sequence of `length` draws from `allowed` (sampling
    /// with replacement).
    ///
    /// # Errors
    ///
    /// - [`crate::error::ValidationError`] if `length` exceeds the
    ///   configured limit, `allowed` is empty, or an index is out of
    ///   range
    /// - [`TableError::LookupFailed`] if no element matches the inverse
    ///   of the composed sequence — a corrupted table or an over-tight
    ///   tolerance, never silently replaced with a default index
    pub fn generate_from<R: Rng>(
        &self,
        length: usize,
        allowed: &[usize],
        rng: &mut R,
    ) -> Result<RbmSequence> {
        validate_sequence_request(length, allowed, &self.limits)?;

        let indices: Vec<usize> = (0..length)
            .map(|_| allowed[rng.gen_range(0..allowed.len())])
            .collect();

        let net = compose(self.table, &indices);
        let inverse = dagger(&net);
        let inverse_index = find_index(&inverse, self.table, self.tolerance).ok_or_else(|| {
            TableError::LookupFailed {
                context: "inverse of composed sequence".into(),
            }
        })?;
        debug!(?indices, inverse_index, "generated RBM sequence");

        let mut pulses = Vec::with_capacity(indices.len() + 1);
        for &i in &indices {
            pulses.extend_from_slice(self.table.decomposition(i));
        }
        pulses.extend_from_slice(self.table.decomposition(inverse_index));

        Ok(RbmSequence {
            indices,
            inverse_index,
            pulses,
        })
    }
}

/// Convenience wrapper: generate over the full group and return only
/// the flattened pulse sequence.
pub fn rbm_seq<R: Rng>(table: &GroupTable, length: usize, rng: &mut R) -> Result<Vec<Pulse>> {
    SequenceGenerator::new(table)
        .generate(length, rng)
        .map(|seq| seq.pulses)
}
