//! Gap Analyzer: which job skills the candidate lacks, and how far along they already are.

use std::collections::HashSet;

use crate::roadmap::catalog::normalize;
use crate::roadmap::round_to_tenth;

pub const PROJECTED_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GapAnalysis {
    /// Missing skills in job-list order (required first, then optional) as spelled by the job.
    pub missing: Vec<String>,
    /// 0 – 100
    pub current_score: f64,
    /// 0 – 100
    pub projected_score: f64,
}

impl GapAnalysis {
    pub fn is_closed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compares the candidate's skills against the job's required and optional lists.
///
/// `current_score` is the count of supplied current skills over the number of job skills,
/// as a percentage rounded to one decimal and clamped to 100.
pub fn analyze_gap(current_skills: &[String], required: &[String], optional: &[String]) -> GapAnalysis {
    let have: HashSet<String> = current_skills.iter().map(|s| normalize(s)).collect();

    let mut seen = HashSet::new();
    let missing: Vec<String> = required
        .iter()
        .chain(optional)
        .filter(|skill| {
            let key = normalize(skill);
            !key.is_empty() && !have.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect();

    let total_job_skills = required.len() + optional.len();
    let current_score = if total_job_skills > 0 {
        round_to_tenth(current_skills.len() as f64 / total_job_skills as f64 * 100.0)
            .clamp(0.0, 100.0)
    } else {
        0.0
    };

    GapAnalysis {
        missing,
        current_score,
        projected_score: PROJECTED_SCORE,
    }
}
