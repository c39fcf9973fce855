// ABOUTME: Session scoring and planning orchestration for the progression engine
// ABOUTME: ProgressionEngine binds estimator, trend analyzer, and both policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Engine orchestration
//!
//! [`ProgressionEngine`] wires the components into the two operations the
//! surrounding application calls: scoring a completed session into the
//! history, and planning the next session for one exercise. Both policies
//! consume the same immutable state; neither calls the other.

use crate::algorithms::e1rm::StrengthEstimator;
use crate::config::{ConfigError, EngineConfig};
use crate::insights::{CoachingInsight, InsightGenerator};
use crate::progression::{LoadDecision, LoadProgressionPolicy};
use crate::trend_analyzer::TrendAnalyzer;
use ferrum_core::errors::EngineResult;
use ferrum_core::models::{
    CompletedSession, Exercise, LiftState, ProgressionContext, ReadinessEntry, SetPrescription,
    WorkoutHistory,
};
use tracing::debug;

/// A planned next session for one exercise
#[derive(Debug, Clone)]
pub struct ExercisePlan {
    /// The load decision with the updated lift state
    pub decision: LoadDecision,
    /// Ranked coaching insights for the exercise
    pub insights: Vec<CoachingInsight>,
}

/// The progression decision engine
///
/// Pure and synchronous: scoring mutates only the `WorkoutHistory` value
/// handed in, planning returns new values. The caller persists results and
/// may evaluate different exercises in parallel since each lift's state is
/// private to one (user, exercise) pair.
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    estimator: StrengthEstimator,
    analyzer: TrendAnalyzer,
    progression: LoadProgressionPolicy,
    insights: InsightGenerator,
}

impl ProgressionEngine {
    /// Engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any section fails validation; the engine
    /// refuses to run with nonsensical thresholds.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            estimator: StrengthEstimator::with_config(config.strength.clone()),
            analyzer: TrendAnalyzer::with_config(config.trend.clone()),
            progression: LoadProgressionPolicy::with_config(config.progression.clone()),
            insights: InsightGenerator::with_config(&config),
        })
    }

    /// Score a completed session into the history
    ///
    /// Appends the session, updates every trained lift's rolling e1RM and
    /// trend, records the readiness score, and accumulates per-date training
    /// volume (tonnage). Lift-state snapshots are captured prior to the
    /// update when the session does not already carry them.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` when the session predates a
    /// lift's existing sample history; the log is append-only.
    pub fn score_session(
        &self,
        history: &mut WorkoutHistory,
        mut session: CompletedSession,
    ) -> EngineResult<()> {
        if session.lift_state_snapshots.is_empty() {
            for result in &session.exercises {
                if let Some(state) = history.lift_states.get(&result.exercise_id) {
                    session
                        .lift_state_snapshots
                        .insert(result.exercise_id.clone(), state.clone());
                }
            }
        }

        let mut tonnage = 0.0;
        for result in &session.exercises {
            let state = history
                .lift_states
                .entry(result.exercise_id.clone())
                .or_insert_with(|| LiftState::new(result.exercise_id.clone()));
            self.estimator.score_session(state, result, session.date)?;
            state.trend = self.analyzer.classify(&state.e1rm_history, session.date);
            if session.is_deload {
                state.mark_deload(session.date);
            }
            tonnage += result
                .sets
                .iter()
                .filter(|s| s.completed)
                .map(|s| f64::from(s.reps) * s.load)
                .sum::<f64>();
        }

        history.readiness_history.push(ReadinessEntry {
            date: session.date,
            score: session.readiness_score,
        });
        *history.volume_by_date.entry(session.date).or_insert(0.0) += tonnage;

        debug!(
            date = %session.date,
            exercises = session.exercises.len(),
            tonnage,
            "scored session into history"
        );
        history.sessions.push(session);
        Ok(())
    }

    /// Plan the next session for one exercise
    ///
    /// Runs the load progression policy and the insight generator over the
    /// same immutable state. The returned decision carries the updated lift
    /// state for the caller to persist.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrescription` for a malformed
    /// prescription.
    pub fn plan_for_exercise(
        &self,
        history: &WorkoutHistory,
        prescription: &SetPrescription,
        ctx: &ProgressionContext<'_>,
        current_readiness: u8,
        substitutions: &[Exercise],
    ) -> EngineResult<ExercisePlan> {
        let lift_state = history.lift_state(&ctx.exercise.id);
        let decision = self.progression.compute_next_load(
            prescription,
            lift_state,
            history,
            &ctx.exercise.id,
            ctx,
        )?;

        let fresh_state;
        let state_for_insights = match lift_state {
            Some(state) => state,
            None => {
                fresh_state = LiftState::new(ctx.exercise.id.clone());
                &fresh_state
            }
        };
        let insights = self.insights.insights_for_exercise(
            ctx.exercise,
            state_for_insights,
            ctx.profile,
            history,
            ctx.today,
            current_readiness,
            substitutions,
        );

        Ok(ExercisePlan { decision, insights })
    }

    /// The trend analyzer used by this engine (shared by both policies)
    #[must_use]
    pub const fn analyzer(&self) -> &TrendAnalyzer {
        &self.analyzer
    }
}
