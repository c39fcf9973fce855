// ABOUTME: e1RM trend classification over a trailing window of strength samples
// ABOUTME: Classifies lifts as insufficient, increasing, stable, plateau, or decreasing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Trend classification of a lift's e1RM trajectory
//!
//! Operates on irregular, sparse time series: the classifier looks at the
//! samples inside a trailing calendar window and compares the earliest and
//! most recent observations. Sparse data is reported as `Insufficient`
//! rather than guessed at; a plateau is only declared when the window shows
//! repeated training without progress, not merely a thin sample count.

use crate::config::TrendConfig;
use chrono::NaiveDate;
use ferrum_core::models::{E1rmSample, TrendState};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Evidence backing a trend classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrendAssessment {
    /// The classified state
    pub state: TrendState,
    /// Fractional change from the earliest to the latest window sample
    /// (zero when the window is insufficient)
    pub change_fraction: f64,
    /// Calendar span covered by the window samples (days)
    pub span_days: i64,
    /// Number of samples inside the window
    pub samples_in_window: usize,
}

impl TrendAssessment {
    const fn insufficient(samples_in_window: usize, span_days: i64) -> Self {
        Self {
            state: TrendState::Insufficient,
            change_fraction: 0.0,
            span_days,
            samples_in_window,
        }
    }
}

/// Classifies a lift's trajectory from its e1RM history
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

impl TrendAnalyzer {
    /// Analyzer with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with custom settings
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Classify a lift's trajectory
    ///
    /// `history` must be date-ordered oldest to newest, which the lift state
    /// guarantees by construction.
    #[must_use]
    pub fn classify(&self, history: &[E1rmSample], today: NaiveDate) -> TrendState {
        self.assess(history, today).state
    }

    /// Classify with the supporting evidence attached
    #[must_use]
    pub fn assess(&self, history: &[E1rmSample], today: NaiveDate) -> TrendAssessment {
        let window_start = today - chrono::Duration::days(self.config.window_days);
        let window: Vec<&E1rmSample> = history
            .iter()
            .filter(|s| s.date >= window_start && s.date <= today)
            .collect();

        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return TrendAssessment::insufficient(0, 0);
        };
        let span_days = (last.date - first.date).num_days();

        if window.len() < self.config.min_samples
            || span_days < self.config.min_span_days
            || first.value <= 0.0
        {
            return TrendAssessment::insufficient(window.len(), span_days);
        }

        let change_fraction = (last.value - first.value) / first.value;
        let state = if change_fraction > self.config.stable_band {
            TrendState::Increasing
        } else if change_fraction < -self.config.stable_band {
            TrendState::Decreasing
        } else if span_days >= self.config.plateau_min_span_days
            && window.len() >= self.config.plateau_min_samples
        {
            // Plateau outranks stable: the same band over a qualifying span
            // with enough sessions is repeated training without progress.
            TrendState::Plateau
        } else {
            TrendState::Stable
        };

        trace!(
            ?state,
            change_fraction,
            span_days,
            samples = window.len(),
            "classified e1RM trend"
        );

        TrendAssessment {
            state,
            change_fraction,
            span_days,
            samples_in_window: window.len(),
        }
    }

    /// Qualifying span (days) a plateau covers; used by insight messages
    #[must_use]
    pub const fn plateau_span_days(&self) -> i64 {
        self.config.plateau_min_span_days
    }
}
