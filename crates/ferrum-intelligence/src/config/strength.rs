// ABOUTME: Strength estimator configuration: smoothing factor and rep ceiling
// ABOUTME: StrengthConfig with defaults from physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::ConfigError;
use crate::physiological_constants::{e1rm, smoothing};
use serde::{Deserialize, Serialize};

/// Strength estimator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Exponential smoothing factor for the rolling e1RM, in (0, 1]
    pub smoothing_factor: f64,
    /// Rep count at which e1RM estimates clamp rather than extrapolate
    pub max_reliable_reps: u32,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: smoothing::E1RM_SMOOTHING_FACTOR,
            max_reliable_reps: e1rm::MAX_RELIABLE_REPS,
        }
    }
}

impl StrengthConfig {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the smoothing factor is outside (0, 1] or
    /// the rep ceiling is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smoothing_factor <= 0.0 || self.smoothing_factor > 1.0 {
            return Err(ConfigError::InvalidRange(
                "smoothing_factor must be in (0, 1]",
            ));
        }
        if self.max_reliable_reps == 0 {
            return Err(ConfigError::NonPositive("max_reliable_reps"));
        }
        Ok(())
    }
}
