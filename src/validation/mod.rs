// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Input validation for sequence requests.

use crate::clifford::table::GROUP_ORDER;
use crate::config::ResourceLimits;
use crate::error::{Result, ValidationError};

/// Validate a sequence generation request.
///
/// Zero length is a valid degenerate request (the generator still
/// appends the identity's inverse), so only the upper bound is
/// enforced on `length`.
pub fn validate_sequence_request(
    length: usize,
    allowed: &[usize],
    limits: &ResourceLimits,
) -> Result<()> {
    if length > limits.max_sequence_length {
        return Err(ValidationError::ResourceLimit {
            resource: "sequence_length".into(),
            limit: limits.max_sequence_length as u64,
            requested: length as u64,
        }
        .into());
    }

    if allowed.is_empty() {
        return Err(ValidationError::Field {
            field: "allowed".into(),
            message: "sampling set cannot be empty".into(),
        }
        .into());
    }

    for &index in allowed {
        if index >= GROUP_ORDER {
            return Err(ValidationError::Field {
                field: "allowed".into(),
                message: format!("index {} out of range (group order {})", index, GROUP_ORDER),
            }
            .into());
        }
    }

    Ok(())
}
