// ABOUTME: Evaluation context bundling profile, exercise, and the evaluation date
// ABOUTME: Keeps policies free of hidden global time or locale state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::exercise::Exercise;
use super::user::UserProfile;
use chrono::NaiveDate;

/// Context for one progression evaluation
///
/// The evaluation date is supplied explicitly; the engine never reads the
/// wall clock. All calendar arithmetic is plain `chrono` date math over this
/// date, which keeps every decision reproducible after the fact.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionContext<'a> {
    /// Profile of the user being evaluated
    pub profile: &'a UserProfile,
    /// Exercise under evaluation
    pub exercise: &'a Exercise,
    /// Date the evaluation is performed for
    pub today: NaiveDate,
}

impl<'a> ProgressionContext<'a> {
    /// Bundle a profile, exercise, and evaluation date
    #[must_use]
    pub const fn new(profile: &'a UserProfile, exercise: &'a Exercise, today: NaiveDate) -> Self {
        Self {
            profile,
            exercise,
            today,
        }
    }
}
