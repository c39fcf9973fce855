// ABOUTME: Per-lift progression state and estimated one-rep-max history
// ABOUTME: LiftState, E1rmSample, and TrendState definitions with ordering invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use crate::errors::{EngineError, EngineResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One estimated one-rep-max observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct E1rmSample {
    /// Date the underlying session was performed
    pub date: NaiveDate,
    /// Estimated one-rep max (user's unit)
    pub value: f64,
}

/// Classified trajectory of a lift's estimated strength
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendState {
    /// Too few samples or too little calendar span to judge
    Insufficient,
    /// Estimated strength is rising
    Increasing,
    /// Change is within the stable band over a short window
    Stable,
    /// Sustained absence of progress over the qualifying span
    Plateau,
    /// Estimated strength is falling
    Decreasing,
}

impl Default for TrendState {
    fn default() -> Self {
        Self::Insufficient
    }
}

/// Mutable progression state for one (user, exercise) pair
///
/// This is the only mutable entity in the domain model. It is created the
/// first time an exercise is attempted and persists for the lifetime of the
/// user's relationship with that exercise.
///
/// Invariants:
/// - `e1rm_history` is non-decreasing in date order, appended only after a
///   session is scored, never reordered
/// - `failure_count` resets to zero on any successful session and increments
///   only on a session judged unsuccessful
/// - `last_deload_date`, once set, never moves backward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftState {
    /// Exercise this state tracks
    pub exercise_id: String,
    /// Last working load used (user's unit)
    pub last_working_weight: f64,
    /// Smoothed rolling estimate of the one-rep max
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_e1rm: Option<f64>,
    /// Consecutive unsuccessful sessions
    pub failure_count: u32,
    /// Date of the most recent deload, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_deload_date: Option<NaiveDate>,
    /// Current trend classification
    #[serde(default)]
    pub trend: TrendState,
    /// Raw (unsmoothed) e1RM observations in date order
    #[serde(default)]
    pub e1rm_history: Vec<E1rmSample>,
    /// Date of the most recent session containing this exercise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_session_date: Option<NaiveDate>,
    /// Consecutive sessions completed at the top of the rep range
    pub successful_sessions: u32,
}

impl LiftState {
    /// Fresh state for a newly attempted exercise
    #[must_use]
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            last_working_weight: 0.0,
            rolling_e1rm: None,
            failure_count: 0,
            last_deload_date: None,
            trend: TrendState::Insufficient,
            e1rm_history: Vec::new(),
            last_session_date: None,
            successful_sessions: 0,
        }
    }

    /// Append a raw e1RM sample, preserving date ordering
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` when the sample predates the most
    /// recent history entry; history is append-only and never reordered.
    pub fn append_sample(&mut self, sample: E1rmSample) -> EngineResult<()> {
        if let Some(last) = self.e1rm_history.last() {
            if sample.date < last.date {
                return Err(EngineError::invalid_input(format!(
                    "e1RM sample on {} predates existing history ending {}",
                    sample.date, last.date
                )));
            }
        }
        self.e1rm_history.push(sample);
        Ok(())
    }

    /// Record a deload on `date`; the deload date never moves backward
    pub fn mark_deload(&mut self, date: NaiveDate) {
        match self.last_deload_date {
            Some(existing) if existing >= date => {}
            _ => self.last_deload_date = Some(date),
        }
    }
}
