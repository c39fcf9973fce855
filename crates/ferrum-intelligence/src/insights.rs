// ABOUTME: Coaching insight generation from lift state, trend, and recovery signals
// ABOUTME: Rule-per-topic generator producing ranked, explainable coaching feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Coaching insight generation
//!
//! Scans lift state, trend, readiness, and recovery signals and emits zero
//! or more ranked insights. Rules are evaluated independently and every
//! applicable one is emitted; the result is ordered with higher-priority
//! topics first (a deload recommendation outranks a nutrition nudge).
//! Recovery insights only surface when there is performance evidence to
//! motivate them — a low protein number alone is not an insight.

use crate::config::{EngineConfig, InsightConfig, ProgressionConfig};
use crate::trend_analyzer::TrendAnalyzer;
use chrono::{Duration, NaiveDate};
use ferrum_core::models::{Exercise, LiftState, TrendState, UserProfile, WorkoutHistory};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Insight topic tags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightTopic {
    /// A deload is recommended or imminent
    Deload,
    /// The lift has plateaued
    Plateau,
    /// A substitute exercise is worth rotating in
    Substitution,
    /// Protein intake is limiting progress
    Nutrition,
    /// Sleep is limiting progress
    Sleep,
    /// Session readiness is low
    Readiness,
}

impl InsightTopic {
    /// Ordering rank; lower ranks are surfaced first
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Deload => 0,
            Self::Plateau => 1,
            Self::Substitution => 2,
            Self::Nutrition => 3,
            Self::Sleep => 4,
            Self::Readiness => 5,
        }
    }
}

/// Severity of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    /// Informational guidance
    Info,
    /// Needs attention
    Warning,
    /// Needs action before the next session
    Critical,
}

/// One piece of coaching feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachingInsight {
    /// Topic tag
    pub topic: InsightTopic,
    /// Severity of the insight
    pub severity: InsightSeverity,
    /// Ordering rank (lower surfaces first)
    pub priority: u8,
    /// Human-readable message
    pub message: String,
    /// Supporting data for the insight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Suggested substitute exercise id, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_substitution: Option<String>,
}

/// Generates coaching insights for one exercise at a time
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: InsightConfig,
    progression: ProgressionConfig,
    trend: TrendAnalyzer,
}

impl InsightGenerator {
    /// Generator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator sharing the engine's configuration
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            config: config.insights.clone(),
            progression: config.progression.clone(),
            trend: TrendAnalyzer::with_config(config.trend.clone()),
        }
    }

    /// Generate ranked insights for one exercise
    ///
    /// Returns a finite, restartable sequence ordered by descending
    /// priority. When the trend is insufficient only readiness insights are
    /// emitted — readiness is session-local, not history-dependent.
    #[must_use]
    pub fn insights_for_exercise(
        &self,
        exercise: &Exercise,
        lift_state: &LiftState,
        profile: &UserProfile,
        history: &WorkoutHistory,
        today: NaiveDate,
        current_readiness: u8,
        substitutions: &[Exercise],
    ) -> Vec<CoachingInsight> {
        let assessment = self.trend.assess(&lift_state.e1rm_history, today);
        let trend = assessment.state;
        let stalled = matches!(trend, TrendState::Plateau | TrendState::Decreasing);

        let mut insights = Vec::new();

        if trend != TrendState::Insufficient {
            if let Some(insight) = self.deload_insight(lift_state, trend, today) {
                insights.push(insight);
            }
            if let Some(insight) = self.plateau_insight(exercise, lift_state, history, trend, today)
            {
                insights.push(insight);
            }
            if stalled {
                if let Some(insight) = Self::substitution_insight(exercise, trend, substitutions) {
                    insights.push(insight);
                }
                insights.extend(self.recovery_insights(profile, trend));
            }
        }
        if let Some(insight) = self.readiness_insight(current_readiness) {
            insights.push(insight);
        }

        insights.sort_by_key(|i| i.priority);
        insights.truncate(self.config.max_insights);

        debug!(
            exercise_id = %exercise.id,
            ?trend,
            count = insights.len(),
            "generated coaching insights"
        );
        insights
    }

    /// Deload recommendation: one failure away from the threshold, or a
    /// declining lift that has not deloaded within the staleness interval
    fn deload_insight(
        &self,
        state: &LiftState,
        trend: TrendState,
        today: NaiveDate,
    ) -> Option<CoachingInsight> {
        let near_failure_threshold =
            state.failure_count + 1 >= self.progression.failures_before_deload;
        // A lift that has never deloaded counts as overdue.
        let deload_stale = state
            .last_deload_date
            .map_or(true, |d| (today - d).num_days() > self.config.deload_staleness_days);
        let declining_and_stale = trend == TrendState::Decreasing && deload_stale;

        if !near_failure_threshold && !declining_and_stale {
            return None;
        }

        let message = if near_failure_threshold {
            format!(
                "You've struggled with this lift {} session{} in a row. A deload week would let you rebuild momentum.",
                state.failure_count,
                if state.failure_count == 1 { "" } else { "s" }
            )
        } else {
            "Your estimated strength has been declining and it's been a while since your last deload. Consider backing off for a week.".into()
        };

        Some(CoachingInsight {
            topic: InsightTopic::Deload,
            severity: InsightSeverity::Warning,
            priority: InsightTopic::Deload.priority(),
            message,
            data: Some(serde_json::json!({
                "failure_count": state.failure_count,
                "failures_before_deload": self.progression.failures_before_deload,
                "last_deload_date": state.last_deload_date,
                "trend": trend,
            })),
            suggested_substitution: None,
        })
    }

    /// Plateau callout, suppressed when a deload already addressed it within
    /// the qualifying window
    fn plateau_insight(
        &self,
        exercise: &Exercise,
        state: &LiftState,
        history: &WorkoutHistory,
        trend: TrendState,
        today: NaiveDate,
    ) -> Option<CoachingInsight> {
        if trend != TrendState::Plateau {
            return None;
        }
        let qualifying_days = self.trend.plateau_span_days();
        let window_start = today - Duration::days(qualifying_days);
        let recently_deloaded = state
            .last_deload_date
            .is_some_and(|d| d >= window_start)
            || history.deload_since(&exercise.id, window_start);
        if recently_deloaded {
            return None;
        }

        let weeks = qualifying_days / 7;
        Some(CoachingInsight {
            topic: InsightTopic::Plateau,
            severity: InsightSeverity::Warning,
            priority: InsightTopic::Plateau.priority(),
            message: format!(
                "Your estimated strength on {} has been flat for over {weeks} weeks. Time to change the stimulus.",
                exercise.name
            ),
            data: Some(serde_json::json!({
                "qualifying_weeks": weeks,
                "rolling_e1rm": state.rolling_e1rm,
            })),
            suggested_substitution: None,
        })
    }

    /// Substitution suggestion when progress has stalled and candidates exist
    fn substitution_insight(
        exercise: &Exercise,
        trend: TrendState,
        substitutions: &[Exercise],
    ) -> Option<CoachingInsight> {
        let substitute = substitutions.first()?;
        Some(CoachingInsight {
            topic: InsightTopic::Substitution,
            severity: InsightSeverity::Info,
            priority: InsightTopic::Substitution.priority(),
            message: format!(
                "Progress on {} has stalled. Rotating in {} for a few weeks can provide a fresh stimulus.",
                exercise.name, substitute.name
            ),
            data: Some(serde_json::json!({
                "trend": trend,
                "candidates": substitutions.iter().map(|e| e.id.clone()).collect::<Vec<_>>(),
            })),
            suggested_substitution: Some(substitute.id.clone()),
        })
    }

    /// Nutrition and sleep insights, gated on performance evidence
    fn recovery_insights(&self, profile: &UserProfile, trend: TrendState) -> Vec<CoachingInsight> {
        let mut insights = Vec::new();
        let Some(recovery) = profile.recovery else {
            return insights;
        };

        if let Some(protein) = recovery.daily_protein_grams {
            if protein < self.config.min_daily_protein_grams {
                insights.push(CoachingInsight {
                    topic: InsightTopic::Nutrition,
                    severity: InsightSeverity::Info,
                    priority: InsightTopic::Nutrition.priority(),
                    message: format!(
                        "You're averaging {protein:.0} g of protein per day while progress has stalled. Aim for at least {:.0} g to support recovery.",
                        self.config.min_daily_protein_grams
                    ),
                    data: Some(serde_json::json!({
                        "daily_protein_grams": protein,
                        "minimum_grams": self.config.min_daily_protein_grams,
                        "trend": trend,
                    })),
                    suggested_substitution: None,
                });
            }
        }
        if let Some(sleep) = recovery.sleep_hours {
            if sleep < self.config.min_sleep_hours {
                insights.push(CoachingInsight {
                    topic: InsightTopic::Sleep,
                    severity: InsightSeverity::Info,
                    priority: InsightTopic::Sleep.priority(),
                    message: format!(
                        "You're averaging {sleep:.1} h of sleep while progress has stalled. Getting {:.0}+ hours would help your lifts recover.",
                        self.config.min_sleep_hours
                    ),
                    data: Some(serde_json::json!({
                        "sleep_hours": sleep,
                        "minimum_hours": self.config.min_sleep_hours,
                        "trend": trend,
                    })),
                    suggested_substitution: None,
                });
            }
        }
        insights
    }

    /// Session-local readiness warning, independent of trend
    fn readiness_insight(&self, current_readiness: u8) -> Option<CoachingInsight> {
        if current_readiness >= self.config.readiness_floor {
            return None;
        }
        Some(CoachingInsight {
            topic: InsightTopic::Readiness,
            severity: InsightSeverity::Warning,
            priority: InsightTopic::Readiness.priority(),
            message: format!(
                "Today's readiness is {current_readiness}/100. Consider lighter loads or extra warm-up sets."
            ),
            data: Some(serde_json::json!({
                "readiness": current_readiness,
                "floor": self.config.readiness_floor,
            })),
            suggested_substitution: None,
        })
    }
}
