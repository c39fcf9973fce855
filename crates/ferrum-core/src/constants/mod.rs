// ABOUTME: Domain constants organized by area for the Ferrum platform
// ABOUTME: Pure data constants shared between the core models and the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Constants module
//!
//! Domain-wide constants grouped by area. Tunable engine thresholds live in
//! the intelligence crate's configuration; the values here bound the data
//! model itself.

/// Readiness score bounds
pub mod readiness {
    /// Lowest reportable readiness score
    pub const MIN_READINESS_SCORE: u8 = 0;
    /// Highest reportable readiness score
    pub const MAX_READINESS_SCORE: u8 = 100;
}

/// Rep and set bounds for sanity checks on recorded data
pub mod limits {
    /// Upper bound on reps in a recorded set (beyond this the data is
    /// treated as an entry error, not a set)
    pub const MAX_RECORDED_REPS: u32 = 100;
    /// Upper bound on sets in one prescription
    pub const MAX_PRESCRIBED_SETS: u32 = 20;
}
