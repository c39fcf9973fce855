// ABOUTME: Facade crate re-exporting the Ferrum core model and intelligence engine
// ABOUTME: Preserves stable import paths over the extracted workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

#![deny(unsafe_code)]

//! # Ferrum
//!
//! Strength-training progression decisions and coaching insights computed
//! from a user's workout history.
//!
//! Given an exercise's prescribed set/rep scheme, a user's profile, and the
//! accumulated history of completed sessions, the engine decides the next
//! load to prescribe and derives ranked, human-readable coaching insights
//! (plateau callouts, deload recommendations, recovery nudges) from trend
//! analysis of estimated strength over time.
//!
//! The engine is a library surface: all evaluation is pure, synchronous,
//! and deterministic given the supplied evaluation date. Persistence,
//! presentation, and scheduling belong to the surrounding application.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ferrum::intelligence::ProgressionEngine;
//! use ferrum::models::{
//!     Equipment, Exercise, LoadStrategy, MovementPattern, MuscleGroup, ProgressionContext,
//!     SetPrescription, Sex, ExperienceLevel, TrainingGoal, UserProfile, WeightUnit,
//!     WorkoutHistory,
//! };
//! use uuid::Uuid;
//!
//! let engine = ProgressionEngine::new();
//! let history = WorkoutHistory::new();
//! let squat = Exercise {
//!     id: "back_squat".into(),
//!     name: "Back Squat".into(),
//!     equipment: Equipment::Barbell,
//!     primary_muscles: vec![MuscleGroup::Quads],
//!     secondary_muscles: vec![],
//!     movement: MovementPattern::Squat,
//! };
//! let profile = UserProfile {
//!     id: Uuid::new_v4(),
//!     sex: Sex::Unspecified,
//!     experience: ExperienceLevel::Beginner,
//!     goals: vec![TrainingGoal::Strength],
//!     weekly_frequency: 3,
//!     available_equipment: vec![Equipment::Barbell],
//!     preferred_unit: WeightUnit::Pounds,
//!     body_weight_kg: None,
//!     recovery: None,
//! };
//! let prescription = SetPrescription {
//!     sets: 3,
//!     rep_range_min: 5,
//!     rep_range_max: 8,
//!     target_rir: Some(2),
//!     tempo: None,
//!     rest_seconds: 180,
//!     load_strategy: LoadStrategy::Absolute,
//!     target_percentage: None,
//!     load_increment: 5.0,
//!     starting_load: 135.0,
//! };
//! let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let ctx = ProgressionContext::new(&profile, &squat, today);
//! let plan = engine
//!     .plan_for_exercise(&history, &prescription, &ctx, 80, &[])
//!     .unwrap();
//! assert!((plan.decision.next_load - 135.0).abs() < f64::EPSILON);
//! ```

/// Core domain models (re-exported from `ferrum-core`)
pub mod models {
    pub use ferrum_core::models::*;
}

/// Error types (re-exported from `ferrum-core`)
pub mod errors {
    pub use ferrum_core::errors::*;
}

/// Domain constants (re-exported from `ferrum-core`)
pub mod constants {
    pub use ferrum_core::constants::*;
}

/// The progression decision engine (re-exported from `ferrum-intelligence`)
pub mod intelligence {
    pub use ferrum_intelligence::*;
}
