// ABOUTME: Pure strength formulas used by the progression engine
// ABOUTME: Currently the estimated one-rep-max (e1RM) algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Pure strength computation formulas

/// Estimated one-rep-max formulas and the rolling estimator
pub mod e1rm;
