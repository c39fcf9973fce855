// ABOUTME: Core data models for the Ferrum strength progression engine
// ABOUTME: Re-exports Exercise, SetPrescription, LiftState and other domain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! # Data Models
//!
//! Domain records consumed and produced by the progression engine.
//!
//! ## Design Principles
//!
//! - **Immutable by default**: exercises, prescriptions, and completed
//!   sessions are value records; [`LiftState`] is the only mutable entity,
//!   one per (user, exercise) pair
//! - **Append-only history**: completed sessions and e1RM samples accumulate
//!   in time order and are never reordered
//! - **Serializable**: all models support JSON serialization for the
//!   surrounding application's persistence and presentation layers
//! - **Type Safe**: strong typing prevents common data handling errors

mod context;
mod exercise;
mod history;
mod lift_state;
mod prescription;
mod session;
mod user;

// Exercise reference data
pub use exercise::{Equipment, Exercise, MovementPattern, MuscleGroup};

// Prescription domain
pub use prescription::{LoadStrategy, SetPrescription};

// Session results
pub use session::{CompletedSession, ExerciseSessionResult, SetResult};

// Per-lift progression state
pub use lift_state::{E1rmSample, LiftState, TrendState};

// Accumulated training log
pub use history::{ReadinessEntry, WorkoutHistory};

// User profile
pub use user::{
    ExperienceLevel, RecoverySignals, Sex, TrainingGoal, UserProfile, WeightUnit,
};

// Evaluation context
pub use context::ProgressionContext;
