// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Single-qubit Clifford group matching and randomized-benchmarking
//! (RBM) sequence generation.
//!
//! This crate produces and validates RBM pulse sequences for
//! quantum-control calibration: random draws from the 24-element
//! single-qubit Clifford group, reduced to a net unitary, closed off
//! with the unique inverse element that returns the sequence to the
//! identity up to global phase.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │   SequenceGenerator   │   check_seq         │
//! │   (rbm module)        │   (rbm module)      │
//! ├───────────────────────┴─────────────────────┤
//! │   compose · find_index · matrix_compare     │
//! │   (clifford module)                         │
//! ├─────────────────────────────────────────────┤
//! │   GroupTable — 24 (matrix, pulse-name)      │
//! │   pairs, validated at startup               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`clifford`]: Group table, phase-insensitive matcher, composer
//! - [`rbm`]: Random sequence generation and verification
//! - [`config`]: Configuration management
//! - [`validation`]: Request validation utilities
//! - [`error`]: Error types

pub mod clifford;
pub mod config;
pub mod error;
pub mod rbm;
pub mod validation;

pub use clifford::{
    compose, dagger, find_index, matrix_compare, phase_equivalent, GroupTable, Pulse,
    DEFAULT_TOLERANCE, GROUP_ORDER,
};
pub use config::Config;
pub use error::{Error, Result};
pub use rbm::{check_seq, check_seq_tokens, rbm_seq, RbmSequence, SequenceGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
