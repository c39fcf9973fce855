// ABOUTME: Unified error types for the Ferrum progression engine
// ABOUTME: EngineError variants for malformed prescriptions, configuration, and inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! # Error Types
//!
//! Expected domain conditions (empty history, too few samples, no prior lift
//! state) are represented as typed result states, never as errors. An
//! `EngineError` is reserved for true failures where the engine refuses to
//! compute rather than guess: malformed prescriptions, invalid configuration,
//! or inputs that would violate a state invariant.

use thiserror::Error;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the progression engine
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Prescription failed validation (empty rep range, non-positive set
    /// count, non-positive load increment)
    #[error("invalid prescription: {0}")]
    InvalidPrescription(String),

    /// Engine configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input would violate a state invariant (e.g. an out-of-order sample)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Create an `InvalidPrescription` error
    pub fn invalid_prescription(message: impl Into<String>) -> Self {
        Self::InvalidPrescription(message.into())
    }

    /// Create an `InvalidConfiguration` error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
