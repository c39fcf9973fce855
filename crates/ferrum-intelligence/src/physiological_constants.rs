// ABOUTME: Strength-training constants based on sports science research
// ABOUTME: e1RM formula bounds, trend thresholds, progression increments, recovery minimums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Ferrum Strength Intelligence

//! Physiological constants based on sports science research
//!
//! Scientifically-established constants used throughout the progression
//! engine. These values are fixed configuration defaults, not learned
//! parameters; each is traceable to published research or established
//! coaching practice.

/// Estimated one-rep-max formula constants
///
/// References:
/// - Epley, B. (1985). "Poundage Chart". Boyd Epley Workout. Lincoln, NE.
/// - LeSuer, D.A., et al. (1997). "The accuracy of prediction equations for
///   estimating 1-RM performance in the bench press, squat, and deadlift."
///   *Journal of Strength and Conditioning Research*, 11(4), 211-213.
pub mod e1rm {
    /// Divisor in the Epley formula `load * (1 + reps / 30)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;

    /// Rep count beyond which submaximal-effort estimates are unreliable;
    /// estimates clamp here rather than extrapolate
    /// Reference: LeSuer et al. (1997) report degrading accuracy above ~10
    /// reps; 15 is a conservative ceiling
    pub const MAX_RELIABLE_REPS: u32 = 15;
}

/// Rolling estimate smoothing
pub mod smoothing {
    /// Exponential smoothing factor for the rolling e1RM; weights the newest
    /// session at 30% against the accumulated estimate
    /// Reference: single-exponential smoothing per Hunter, J.S. (1986). "The
    /// exponentially weighted moving average." *Journal of Quality
    /// Technology*, 18(4), 203-210.
    pub const E1RM_SMOOTHING_FACTOR: f64 = 0.3;
}

/// Trend classification thresholds
///
/// References:
/// - Hopkins, W.G. (2004). "How to interpret changes in an athletic
///   performance test." *Sportscience*, 8, 1-7.
/// - Rhea, M.R., et al. (2003). "A meta-analysis to determine the dose
///   response for strength development." *Medicine & Science in Sports &
///   Exercise*, 35(3), 456-464.
pub mod trend_detection {
    /// Trailing window examined for trend classification (8 weeks)
    pub const TREND_WINDOW_DAYS: i64 = 56;

    /// Minimum samples inside the window before a trend is judged
    pub const MIN_TREND_SAMPLES: usize = 3;

    /// Minimum calendar span inside the window before a trend is judged
    pub const MIN_TREND_SPAN_DAYS: i64 = 14;

    /// Fractional change treated as within the stable band (±2%)
    /// Reference: Hopkins (2004), smallest worthwhile change in strength
    pub const STABLE_BAND_FRACTION: f64 = 0.02;

    /// Span a stable window must cover before it qualifies as a plateau
    /// (6 weeks of repeated training without progress)
    pub const PLATEAU_MIN_SPAN_DAYS: i64 = 42;

    /// Samples a plateau-qualifying window must contain; distinguishes
    /// repeated training without progress from merely sparse data
    pub const PLATEAU_MIN_SAMPLES: usize = 4;
}

/// Load progression defaults
///
/// References:
/// - Rhea, M.R., et al. (2003), dose-response for strength development
/// - Helms, E., Valdez, A., & Morgan, A. (2019). "The Muscle and Strength
///   Pyramid: Training" (2nd ed.), progression chapter
pub mod progression {
    /// Default base load increment (user's unit)
    pub const DEFAULT_LOAD_INCREMENT: f64 = 5.0;

    /// Successes at the top of the rep range before the load increases
    pub const DEFAULT_SESSIONS_AT_TOP_BEFORE_INCREASE: u32 = 2;

    /// Fractional load reduction applied on a deload
    /// Reference: Helms et al. (2019) recommend 5-15% deloads
    pub const DEFAULT_DELOAD_PERCENTAGE: f64 = 0.10;

    /// Consecutive failed sessions before a deload triggers
    pub const DEFAULT_FAILURES_BEFORE_DELOAD: u32 = 3;

    /// Smallest plate-friendly load step; computed increments snap to
    /// multiples of this
    pub const PLATE_GRANULARITY: f64 = 2.5;

    /// Increment multiplier for beginners (novice lifters progress fastest)
    /// Reference: Rhea et al. (2003), untrained dose-response
    pub const BEGINNER_INCREMENT_MULTIPLIER: f64 = 2.0;

    /// Increment multiplier for intermediate lifters
    pub const INTERMEDIATE_INCREMENT_MULTIPLIER: f64 = 1.0;

    /// Increment multiplier for advanced lifters
    /// Reference: Rhea et al. (2003), trained dose-response
    pub const ADVANCED_INCREMENT_MULTIPLIER: f64 = 0.5;

    /// Increment multiplier applied when the lift is plateaued or declining
    pub const STALLED_TREND_MULTIPLIER: f64 = 0.5;
}

/// Recovery and readiness thresholds
///
/// References:
/// - Morton, R.W., et al. (2018). "A systematic review, meta-analysis and
///   meta-regression of the effect of protein supplementation on resistance
///   training-induced gains." *British Journal of Sports Medicine*, 52(6).
/// - Hirshkowitz, M., et al. (2015). "National Sleep Foundation's sleep time
///   duration recommendations." *Sleep Health*, 1(1), 40-43.
pub mod recovery {
    /// Daily protein intake below which a nutrition insight may fire (grams)
    /// Reference: Morton et al. (2018), ~1.6 g/kg for a ~75 kg lifter
    pub const MIN_DAILY_PROTEIN_GRAMS: f64 = 120.0;

    /// Nightly sleep below which a sleep insight may fire (hours)
    /// Reference: Hirshkowitz et al. (2015), adult recommendation 7-9 h
    pub const MIN_SLEEP_HOURS: f64 = 7.0;

    /// Readiness score below which a readiness insight fires
    pub const READINESS_FLOOR: u8 = 60;

    /// Days since the last deload after which a declining lift warrants a
    /// fresh deload recommendation
    pub const DELOAD_STALENESS_DAYS: i64 = 42;
}
