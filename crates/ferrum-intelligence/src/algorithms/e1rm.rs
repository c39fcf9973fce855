// ABOUTME: Estimated one-rep-max computation from submaximal sets via the Epley formula
// ABOUTME: StrengthEstimator folds session results into a lift's rolling e1RM estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use crate::config::StrengthConfig;
use crate::physiological_constants::e1rm::EPLEY_REPS_DIVISOR;
use chrono::NaiveDate;
use ferrum_core::errors::{EngineError, EngineResult};
use ferrum_core::models::{E1rmSample, ExerciseSessionResult, LiftState};
use tracing::debug;

/// Estimate a one-rep max from a submaximal set
///
/// Epley formula: `e1RM = load * (1 + reps / 30)`
///
/// Monotonically increasing in both load and reps. Reps are clamped at
/// `max_reliable_reps` — beyond that bound submaximal estimates are
/// unreliable, so the estimate saturates rather than extrapolating.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` for zero reps or a non-positive load.
///
/// # Example
///
/// ```rust
/// use ferrum_intelligence::estimate_one_rep_max;
///
/// let e1rm = estimate_one_rep_max(5, 225.0, 15).unwrap();
/// assert!((e1rm - 262.5).abs() < 1e-9);
/// ```
pub fn estimate_one_rep_max(reps: u32, load: f64, max_reliable_reps: u32) -> EngineResult<f64> {
    if reps == 0 {
        return Err(EngineError::invalid_input(
            "cannot estimate a one-rep max from zero reps",
        ));
    }
    if load <= 0.0 {
        return Err(EngineError::invalid_input(
            "cannot estimate a one-rep max from a non-positive load",
        ));
    }
    let effective_reps = reps.min(max_reliable_reps);
    Ok(load * (1.0 + f64::from(effective_reps) / EPLEY_REPS_DIVISOR))
}

/// Blend a new e1RM sample into the rolling estimate
///
/// Single exponential smoothing: `rolling = alpha * sample + (1 - alpha) *
/// previous`. With no previous value the sample itself seeds the series.
#[must_use]
pub fn blend_rolling(previous: Option<f64>, sample: f64, alpha: f64) -> f64 {
    match previous {
        Some(prev) => alpha.mul_add(sample, (1.0 - alpha) * prev),
        None => sample,
    }
}

/// Folds completed session results into a lift's strength estimate
#[derive(Debug, Clone, Default)]
pub struct StrengthEstimator {
    config: StrengthConfig,
}

impl StrengthEstimator {
    /// Estimator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimator with custom settings
    #[must_use]
    pub const fn with_config(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Best (highest) e1RM estimate among a session's completed sets
    ///
    /// Returns `None` when no set was completed — an entirely skipped
    /// exercise produces no strength observation.
    #[must_use]
    pub fn session_estimate(&self, result: &ExerciseSessionResult) -> Option<f64> {
        result
            .sets
            .iter()
            .filter(|set| set.completed && set.reps > 0 && set.load > 0.0)
            .filter_map(|set| {
                estimate_one_rep_max(set.reps, set.load, self.config.max_reliable_reps).ok()
            })
            .fold(None, |best, estimate| match best {
                Some(b) if b >= estimate => Some(b),
                _ => Some(estimate),
            })
    }

    /// Score a session result into the lift's state
    ///
    /// Appends the raw best-set sample to the e1RM history, folds the
    /// smoothed value into `rolling_e1rm`, and updates the last working
    /// weight and session date. A session with no completed sets leaves the
    /// state untouched.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` when `date` predates the lift's
    /// existing history; the sample log is append-only.
    pub fn score_session(
        &self,
        state: &mut LiftState,
        result: &ExerciseSessionResult,
        date: NaiveDate,
    ) -> EngineResult<Option<f64>> {
        let Some(raw) = self.session_estimate(result) else {
            debug!(exercise_id = %result.exercise_id, %date, "no completed sets, skipping e1RM update");
            return Ok(None);
        };

        state.append_sample(E1rmSample { date, value: raw })?;
        let rolling = blend_rolling(state.rolling_e1rm, raw, self.config.smoothing_factor);
        state.rolling_e1rm = Some(rolling);
        if let Some(top_load) = result.top_completed_load() {
            state.last_working_weight = top_load;
        }
        state.last_session_date = Some(date);

        debug!(
            exercise_id = %result.exercise_id,
            %date,
            raw_e1rm = raw,
            rolling_e1rm = rolling,
            "scored session into lift state"
        );
        Ok(Some(raw))
    }
}
