// ABOUTME: Configuration error types for engine settings validation
// ABOUTME: Error variants for invalid ranges and non-positive parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Configuration error types for engine settings validation.

use ferrum_core::errors::EngineError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Value outside its acceptable range (e.g. a percentage not in (0, 1))
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),

    /// Parameter that must be positive was zero or negative
    #[error("must be positive: {0}")]
    NonPositive(&'static str),
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}
