// ABOUTME: Set prescription model defining the plan for one exercise in one session
// ABOUTME: SetPrescription with rep range, RIR, tempo, rest, and load strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use crate::constants::limits::MAX_PRESCRIBED_SETS;
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// How the working load for a prescription is derived
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadStrategy {
    /// Load is an absolute weight in the user's unit
    Absolute,
    /// Load is a percentage of the lift's estimated one-rep max
    PercentageOfMax,
}

/// The plan for one exercise in one session
///
/// A prescription is externally authored configuration; the engine validates
/// it before computing any decision and refuses malformed plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPrescription {
    /// Number of working sets
    pub sets: u32,
    /// Inclusive bottom of the target rep range
    pub rep_range_min: u32,
    /// Inclusive top of the target rep range
    pub rep_range_max: u32,
    /// Target reps-in-reserve for working sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_rir: Option<u32>,
    /// Tempo notation (e.g. "3-1-1-0")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// How the working load is derived
    pub load_strategy: LoadStrategy,
    /// Target percentage of e1RM when `load_strategy` is percentage-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_percentage: Option<f64>,
    /// Base load increment step for this exercise (user's unit)
    pub load_increment: f64,
    /// Load prescribed the first time the exercise is attempted
    pub starting_load: f64,
}

impl SetPrescription {
    /// Validate the prescription
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPrescription` when the rep range is
    /// empty, the set count is zero or implausibly large, the load increment
    /// is not positive, or a percentage strategy lacks its percentage.
    pub fn validate(&self) -> EngineResult<()> {
        if self.sets == 0 {
            return Err(EngineError::invalid_prescription(
                "set count must be positive",
            ));
        }
        if self.sets > MAX_PRESCRIBED_SETS {
            return Err(EngineError::invalid_prescription(format!(
                "set count {} exceeds the maximum of {MAX_PRESCRIBED_SETS}",
                self.sets
            )));
        }
        if self.rep_range_min == 0 || self.rep_range_max < self.rep_range_min {
            return Err(EngineError::invalid_prescription(format!(
                "rep range {}-{} is empty",
                self.rep_range_min, self.rep_range_max
            )));
        }
        if self.load_increment <= 0.0 {
            return Err(EngineError::invalid_prescription(
                "load increment must be positive",
            ));
        }
        if self.starting_load < 0.0 {
            return Err(EngineError::invalid_prescription(
                "starting load must not be negative",
            ));
        }
        if self.load_strategy == LoadStrategy::PercentageOfMax {
            match self.target_percentage {
                Some(pct) if pct > 0.0 && pct <= 100.0 => {}
                _ => {
                    return Err(EngineError::invalid_prescription(
                        "percentage strategy requires a target percentage in (0, 100]",
                    ))
                }
            }
        }
        Ok(())
    }
}
