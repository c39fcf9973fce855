// ABOUTME: Trend classifier configuration: window, sample minimums, bands
// ABOUTME: TrendConfig with defaults from physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::ConfigError;
use crate::physiological_constants::trend_detection;
use serde::{Deserialize, Serialize};

/// Trend classifier settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Trailing window examined for classification (days)
    pub window_days: i64,
    /// Minimum samples inside the window before a trend is judged
    pub min_samples: usize,
    /// Minimum calendar span inside the window before a trend is judged (days)
    pub min_span_days: i64,
    /// Fractional change treated as stable (e.g. 0.02 for ±2%)
    pub stable_band: f64,
    /// Span a stable window must cover to qualify as a plateau (days)
    pub plateau_min_span_days: i64,
    /// Samples a plateau-qualifying window must contain
    pub plateau_min_samples: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_days: trend_detection::TREND_WINDOW_DAYS,
            min_samples: trend_detection::MIN_TREND_SAMPLES,
            min_span_days: trend_detection::MIN_TREND_SPAN_DAYS,
            stable_band: trend_detection::STABLE_BAND_FRACTION,
            plateau_min_span_days: trend_detection::PLATEAU_MIN_SPAN_DAYS,
            plateau_min_samples: trend_detection::PLATEAU_MIN_SAMPLES,
        }
    }
}

impl TrendConfig {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any window, span, or band is non-positive,
    /// or when the plateau span does not exceed the minimum trend span.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days <= 0 {
            return Err(ConfigError::NonPositive("window_days"));
        }
        if self.min_samples == 0 {
            return Err(ConfigError::NonPositive("min_samples"));
        }
        if self.min_span_days <= 0 {
            return Err(ConfigError::NonPositive("min_span_days"));
        }
        if self.stable_band <= 0.0 || self.stable_band >= 1.0 {
            return Err(ConfigError::InvalidRange("stable_band must be in (0, 1)"));
        }
        if self.plateau_min_span_days < self.min_span_days {
            return Err(ConfigError::InvalidRange(
                "plateau_min_span_days must be at least min_span_days",
            ));
        }
        if self.plateau_min_samples < self.min_samples {
            return Err(ConfigError::InvalidRange(
                "plateau_min_samples must be at least min_samples",
            ));
        }
        Ok(())
    }
}
