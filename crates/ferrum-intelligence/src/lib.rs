// ABOUTME: Strength progression engine: e1RM estimation, trend analysis, load decisions, insights
// ABOUTME: Pure, synchronous policies over the ferrum-core domain model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

#![deny(unsafe_code)]

//! # Ferrum Intelligence
//!
//! The progression decision engine: two cooperating policies — load
//! progression and coaching insights — over a rolling strength estimate and
//! a trend classification of each lift's e1RM history.
//!
//! Every component is a pure function over immutable inputs. Evaluation is
//! synchronous and deterministic given the supplied evaluation date; the
//! caller owns persistence of returned state and any parallelism across
//! exercises.
//!
//! ## Data flow
//!
//! Completed sessions accumulate in [`ferrum_core::models::WorkoutHistory`] →
//! the strength estimator folds each session into the lift's rolling e1RM →
//! the trend analyzer classifies the lift's trajectory → the load progression
//! policy picks the next load → the insight generator emits ranked coaching
//! feedback. Progression and insights are independent consumers of the same
//! upstream state; neither calls the other.

/// Pure strength formulas (estimated one-rep max)
pub mod algorithms;

/// Engine configuration with defaults and validation
pub mod config;

/// Session scoring and planning orchestration
pub mod engine;

/// Coaching insight generation
pub mod insights;

/// Domain constants with sports-science references
pub mod physiological_constants;

/// Load progression policy
pub mod progression;

/// e1RM trend classification
pub mod trend_analyzer;

pub use algorithms::e1rm::{blend_rolling, estimate_one_rep_max, StrengthEstimator};
pub use config::{
    ConfigError, EngineConfig, InsightConfig, ProgressionConfig, StrengthConfig, TrendConfig,
};
pub use engine::{ExercisePlan, ProgressionEngine};
pub use insights::{CoachingInsight, InsightGenerator, InsightSeverity, InsightTopic};
pub use progression::{LoadAction, LoadDecision, LoadProgressionPolicy, SessionOutcome};
pub use trend_analyzer::{TrendAnalyzer, TrendAssessment};

// Re-exported so downstream code can name the trend states without a
// ferrum-core import
pub use ferrum_core::models::TrendState;
