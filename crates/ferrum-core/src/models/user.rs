// ABOUTME: User profile models with experience level, goals, and recovery signals
// ABOUTME: UserProfile, ExperienceLevel, TrainingGoal, and RecoverySignals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

use super::exercise::Equipment;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex, used by strength standards and increment heuristics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Female
    Female,
    /// Male
    Male,
    /// Not specified
    Unspecified,
}

/// Training experience tier
///
/// Ordered: a higher tier never receives a larger load increment than a
/// lower tier under identical history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than ~1 year of consistent training
    Beginner,
    /// 1-3 years of consistent training
    Intermediate,
    /// More than ~3 years of consistent training
    Advanced,
}

/// Primary training goals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Muscle growth
    Hypertrophy,
    /// Maximal strength
    Strength,
    /// Muscular endurance
    Endurance,
    /// General fitness and health
    GeneralFitness,
}

/// Preferred weight unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Pounds
    Pounds,
    /// Kilograms
    Kilograms,
}

/// Optional recovery signals reported by the user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RecoverySignals {
    /// Average daily protein intake in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_protein_grams: Option<f64>,
    /// Average nightly sleep in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
}

/// A user's training profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user identity
    pub id: Uuid,
    /// Biological sex
    pub sex: Sex,
    /// Training experience tier
    pub experience: ExperienceLevel,
    /// Training goals, most important first
    pub goals: Vec<TrainingGoal>,
    /// Planned training sessions per week
    pub weekly_frequency: u32,
    /// Equipment the user has access to
    #[serde(default)]
    pub available_equipment: Vec<Equipment>,
    /// Preferred weight unit
    pub preferred_unit: WeightUnit,
    /// Body weight in kilograms, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_weight_kg: Option<f64>,
    /// Self-reported recovery signals, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoverySignals>,
}
