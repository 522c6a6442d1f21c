//! Effort Estimator: calendar weeks and content hours for a phase under a learning pace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::roadmap::models::SkillNode;
use crate::roadmap::round_to_tenth;

/// Skills in the same phase can be studied side by side, so a phase takes less calendar time
/// than its skills back to back.
pub const PARALLEL_FACTOR: f64 = 0.7;

/// How much time per week the learner commits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Full-time learning
    Intensive,
    #[default]
    Moderate,
    /// Part-time learning
    Relaxed,
}

#[derive(Debug, Error)]
#[error("unknown learning pace '{0}', expected intensive, moderate or relaxed")]
pub struct UnknownPace(pub String);

impl Pace {
    pub fn multiplier(self) -> f64 {
        match self {
            Pace::Intensive => 0.6,
            Pace::Moderate => 1.0,
            Pace::Relaxed => 1.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pace::Intensive => "intensive",
            Pace::Moderate => "moderate",
            Pace::Relaxed => "relaxed",
        }
    }

    /// Parses a request-supplied pace; anything unrecognized falls back to `Moderate`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: UnknownPace| {
            debug!("{e}; using moderate");
            Pace::Moderate
        })
    }
}

impl FromStr for Pace {
    type Err = UnknownPace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "intensive" => Ok(Pace::Intensive),
            "moderate" => Ok(Pace::Moderate),
            "relaxed" => Ok(Pace::Relaxed),
            _ => Err(UnknownPace(s.to_string())),
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEffort {
    pub weeks: f64,
    pub hours: u32,
}

/// weeks = round(Σ estimated_weeks × 0.7 × pace multiplier, 1 decimal)
/// hours = Σ resource hours (raw content volume, independent of pace)
pub fn estimate_phase(skills: &[SkillNode], pace: Pace) -> PhaseEffort {
    let base_weeks: f64 = skills.iter().map(|s| s.estimated_weeks).sum();
    let hours: u32 = skills
        .iter()
        .flat_map(|s| s.resources.iter())
        .map(|r| r.hours)
        .sum();

    PhaseEffort {
        weeks: round_to_tenth(base_weeks * PARALLEL_FACTOR * pace.multiplier()),
        hours,
    }
}
