// ABOUTME: Load progression configuration: success thresholds, deload, granularity
// ABOUTME: ProgressionConfig with defaults from physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::ConfigError;
use crate::physiological_constants::progression;
use serde::{Deserialize, Serialize};

/// Load progression settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Successes at the top of the rep range required before the load
    /// increases
    pub sessions_at_top_before_increase: u32,
    /// Base load increment used when a prescription does not override it
    pub load_increment: f64,
    /// Fractional load reduction applied on a deload, in (0, 1)
    pub deload_percentage: f64,
    /// Consecutive failed sessions before a deload triggers
    pub failures_before_deload: u32,
    /// Plate-friendly granularity computed increments snap to
    pub plate_granularity: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            sessions_at_top_before_increase: progression::DEFAULT_SESSIONS_AT_TOP_BEFORE_INCREASE,
            load_increment: progression::DEFAULT_LOAD_INCREMENT,
            deload_percentage: progression::DEFAULT_DELOAD_PERCENTAGE,
            failures_before_deload: progression::DEFAULT_FAILURES_BEFORE_DELOAD,
            plate_granularity: progression::PLATE_GRANULARITY,
        }
    }
}

impl ProgressionConfig {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any counter or step is non-positive, or the
    /// deload percentage falls outside (0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sessions_at_top_before_increase == 0 {
            return Err(ConfigError::NonPositive("sessions_at_top_before_increase"));
        }
        if self.load_increment <= 0.0 {
            return Err(ConfigError::NonPositive("load_increment"));
        }
        if self.deload_percentage <= 0.0 || self.deload_percentage >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "deload_percentage must be in (0, 1)",
            ));
        }
        if self.failures_before_deload == 0 {
            return Err(ConfigError::NonPositive("failures_before_deload"));
        }
        if self.plate_granularity <= 0.0 {
            return Err(ConfigError::NonPositive("plate_granularity"));
        }
        Ok(())
    }
}
