// ABOUTME: Engine configuration aggregation with defaults and validation
// ABOUTME: EngineConfig bundles strength, trend, progression, and insight settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Engine configuration
//!
//! All thresholds are fixed configuration, not learned parameters. Each area
//! ships a `Default` built from [`crate::physiological_constants`] and a
//! `validate()` that refuses nonsensical values before any decision is
//! computed.

mod error;
mod insight;
mod progression;
mod strength;
mod trend;

pub use error::ConfigError;
pub use insight::InsightConfig;
pub use progression::ProgressionConfig;
pub use strength::StrengthConfig;
pub use trend::TrendConfig;

use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strength estimator settings
    pub strength: StrengthConfig,
    /// Trend classifier settings
    pub trend: TrendConfig,
    /// Load progression settings
    pub progression: ProgressionConfig,
    /// Coaching insight settings
    pub insights: InsightConfig,
}

impl EngineConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.strength.validate()?;
        self.trend.validate()?;
        self.progression.validate()?;
        self.insights.validate()?;
        Ok(())
    }
}
