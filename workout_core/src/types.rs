//! Core domain types for the workout calculator.
//!
//! This module defines:
//! - Activity kinds and their sensor codes
//! - Raw training inputs shared by every activity
//! - The per-activity training records
//! - Raw sensor packages as they arrive from the device

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Activity Kinds
// ============================================================================

/// Kind of workout a sensor package describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Three-letter code used by the sensor packages
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Label shown in the summary line
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Distance covered per action (step or stroke), in meters
    pub fn step_length_m(self) -> f64 {
        match self {
            ActivityKind::Running | ActivityKind::SportsWalking => 0.65,
            ActivityKind::Swimming => 1.38,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::UnknownActivityCode(code.to_string()))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Training Records
// ============================================================================

/// Raw readings common to every activity
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct TrainingInput {
    /// Steps for running and walking, strokes for swimming
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

/// One training session, tagged by activity
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Training {
    Running(TrainingInput),
    SportsWalking {
        #[serde(flatten)]
        input: TrainingInput,
        height_cm: f64,
    },
    Swimming {
        #[serde(flatten)]
        input: TrainingInput,
        pool_length_m: f64,
        pool_laps: f64,
    },
}

impl Training {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Training::Running(_) => ActivityKind::Running,
            Training::SportsWalking { .. } => ActivityKind::SportsWalking,
            Training::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    /// Shared readings of this session
    pub fn input(&self) -> &TrainingInput {
        match self {
            Training::Running(input)
            | Training::SportsWalking { input, .. }
            | Training::Swimming { input, .. } => input,
        }
    }
}

// ============================================================================
// Sensor Packages
// ============================================================================

/// A raw package as received from the sensor: activity code plus positional values
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip_through_from_str() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.code().parse::<ActivityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        match "XYZ".parse::<ActivityKind>() {
            Err(Error::UnknownActivityCode(code)) => assert_eq!(code, "XYZ"),
            other => panic!("Expected UnknownActivityCode, got {:?}", other),
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!("run".parse::<ActivityKind>().is_err());
    }

    #[test]
    fn test_labels_and_arity() {
        assert_eq!(ActivityKind::Running.label(), "Running");
        assert_eq!(ActivityKind::SportsWalking.label(), "SportsWalking");
        assert_eq!(ActivityKind::Swimming.label(), "Swimming");
        assert_eq!(ActivityKind::Running.arity(), 3);
        assert_eq!(ActivityKind::SportsWalking.arity(), 4);
        assert_eq!(ActivityKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_training_serializes_with_kind_tag() {
        let training = Training::SportsWalking {
            input: TrainingInput {
                action: 9000,
                duration_h: 1.0,
                weight_kg: 75.0,
            },
            height_cm: 180.0,
        };

        let json = serde_json::to_value(training).unwrap();
        assert_eq!(json["kind"], "sports_walking");
        assert_eq!(json["action"], 9000);
        assert_eq!(json["height_cm"], 180.0);
    }
}
