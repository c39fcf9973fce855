// ABOUTME: Core types and constants for the Ferrum strength intelligence engine
// ABOUTME: Foundation crate with domain models, error handling, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

#![deny(unsafe_code)]

//! # Ferrum Core
//!
//! Foundation crate providing the shared domain model for the Ferrum strength
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` and `EngineResult`
//! - **constants**: Domain-wide constants organized by area
//! - **models**: Exercises, prescriptions, sessions, lift state, and user profiles

/// Unified error handling for the progression engine
pub mod errors;

/// Domain constants organized by area
pub mod constants;

/// Core data models (Exercise, SetPrescription, LiftState, WorkoutHistory, etc.)
pub mod models;
