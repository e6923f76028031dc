// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Randomized-benchmarking sequence generation and verification.
//!
//! - [`SequenceGenerator`] and [`RbmSequence`] — random Clifford draws
//!   closed off with the synthesized inverse element
//! - [`check_seq`] / [`check_seq_tokens`] — independent verification
//!   that a flattened pulse sequence composes to the identity

pub mod generate;
pub mod verify;

pub use generate::{rbm_seq, RbmSequence, SequenceGenerator};
pub use verify::{check_seq, check_seq_tokens};
