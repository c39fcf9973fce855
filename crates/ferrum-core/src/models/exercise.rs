// ABOUTME: Exercise reference data models with equipment and muscle group taxonomy
// ABOUTME: Exercise, Equipment, MuscleGroup, and MovementPattern definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use serde::{Deserialize, Serialize};

/// Immutable reference data describing one exercise
///
/// # Examples
///
/// ```rust
/// use ferrum_core::models::{Equipment, Exercise, MovementPattern, MuscleGroup};
///
/// let squat = Exercise {
///     id: "back_squat".into(),
///     name: "Back Squat".into(),
///     equipment: Equipment::Barbell,
///     primary_muscles: vec![MuscleGroup::Quads, MuscleGroup::Glutes],
///     secondary_muscles: vec![MuscleGroup::Core],
///     movement: MovementPattern::Squat,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable identifier for the exercise
    pub id: String,
    /// Display name
    pub name: String,
    /// Equipment category the exercise is performed with
    pub equipment: Equipment,
    /// Primary muscle groups trained
    pub primary_muscles: Vec<MuscleGroup>,
    /// Secondary muscle groups trained
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
    /// Movement pattern classification
    pub movement: MovementPattern,
}

/// Equipment categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Barbell movements
    Barbell,
    /// Dumbbell movements
    Dumbbell,
    /// Kettlebell movements
    Kettlebell,
    /// Pin- or plate-loaded machines
    Machine,
    /// Cable stack movements
    Cable,
    /// Bodyweight movements
    Bodyweight,
    /// Resistance band movements
    Band,
}

/// Muscle groups used for exercise classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats and mid-back
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearms and grip
    Forearms,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Glutes
    Glutes,
    /// Calves
    Calves,
    /// Trunk and core
    Core,
}

/// Movement pattern classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Knee-dominant squatting
    Squat,
    /// Hip hinge (deadlifts, RDLs)
    Hinge,
    /// Horizontal pressing
    HorizontalPush,
    /// Horizontal pulling (rows)
    HorizontalPull,
    /// Vertical pressing (overhead)
    VerticalPush,
    /// Vertical pulling (pull-ups, pulldowns)
    VerticalPull,
    /// Single-leg lunging
    Lunge,
    /// Loaded carries
    Carry,
    /// Single-joint isolation work
    Isolation,
}

impl MovementPattern {
    /// Human-readable name for the pattern
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::HorizontalPush => "horizontal push",
            Self::HorizontalPull => "horizontal pull",
            Self::VerticalPush => "vertical push",
            Self::VerticalPull => "vertical pull",
            Self::Lunge => "lunge",
            Self::Carry => "carry",
            Self::Isolation => "isolation",
        }
    }
}
