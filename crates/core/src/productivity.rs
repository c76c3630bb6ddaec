//! Weekly productivity rollups and attainment banding.

use serde::Serialize;

/// Default weekly screen target when an account carries no `meta_semanal`.
pub const DEFAULT_WEEKLY_TARGET: i64 = 5;

// ---------------------------------------------------------------------------
// Banding
// ---------------------------------------------------------------------------

/// Attainment band for a weekly rollup row.
///
/// Boundaries are inclusive toward the higher band: exactly 60% is yellow,
/// exactly 100% is green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Red,
    Yellow,
    Green,
}

impl Band {
    /// Classify an attainment percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent < 60.0 {
            Self::Red
        } else if percent < 100.0 {
            Self::Yellow
        } else {
            Self::Green
        }
    }
}

// ---------------------------------------------------------------------------
// Attainment
// ---------------------------------------------------------------------------

/// One technician's weekly attainment against a target.
#[derive(Debug, Clone, Serialize)]
pub struct Attainment {
    /// Units finished this week (screens or hours, depending on the rollup).
    pub done: f64,
    /// The weekly target the percentage is computed against.
    pub target: f64,
    /// Units still missing to hit the target (never negative).
    pub remaining: f64,
    /// `done / target * 100`.
    pub percent: f64,
    pub band: Band,
}

/// Compute weekly attainment for one rollup row.
///
/// A non-positive target falls back to [`DEFAULT_WEEKLY_TARGET`] so a
/// misconfigured account row cannot divide by zero.
pub fn weekly_attainment(done: f64, target: f64) -> Attainment {
    let target = if target > 0.0 {
        target
    } else {
        DEFAULT_WEEKLY_TARGET as f64
    };
    let percent = done / target * 100.0;
    Attainment {
        done,
        target,
        remaining: (target - done).max(0.0),
        percent,
        band: Band::from_percent(percent),
    }
}
