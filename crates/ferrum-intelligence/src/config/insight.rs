// ABOUTME: Coaching insight configuration: readiness floor, recovery minimums, limits
// ABOUTME: InsightConfig with defaults from physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::ConfigError;
use crate::physiological_constants::recovery;
use ferrum_core::constants::readiness::MAX_READINESS_SCORE;
use serde::{Deserialize, Serialize};

/// Coaching insight settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Readiness score below which a readiness insight fires
    pub readiness_floor: u8,
    /// Daily protein intake (grams) below which a nutrition insight may fire
    pub min_daily_protein_grams: f64,
    /// Nightly sleep (hours) below which a sleep insight may fire
    pub min_sleep_hours: f64,
    /// Days since the last deload after which a declining lift warrants a
    /// fresh deload recommendation
    pub deload_staleness_days: i64,
    /// Maximum insights returned per exercise
    pub max_insights: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            readiness_floor: recovery::READINESS_FLOOR,
            min_daily_protein_grams: recovery::MIN_DAILY_PROTEIN_GRAMS,
            min_sleep_hours: recovery::MIN_SLEEP_HOURS,
            deload_staleness_days: recovery::DELOAD_STALENESS_DAYS,
            max_insights: 5,
        }
    }
}

impl InsightConfig {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a floor or minimum is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.readiness_floor > MAX_READINESS_SCORE {
            return Err(ConfigError::InvalidRange(
                "readiness_floor must be within the readiness scale",
            ));
        }
        if self.min_daily_protein_grams <= 0.0 {
            return Err(ConfigError::NonPositive("min_daily_protein_grams"));
        }
        if self.min_sleep_hours <= 0.0 {
            return Err(ConfigError::NonPositive("min_sleep_hours"));
        }
        if self.deload_staleness_days <= 0 {
            return Err(ConfigError::NonPositive("deload_staleness_days"));
        }
        if self.max_insights == 0 {
            return Err(ConfigError::NonPositive("max_insights"));
        }
        Ok(())
    }
}
