use serde::{Deserialize, Serialize};

use crate::roadmap::catalog::LearningResource;

/// A skill as it appears in a generated roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    pub name: String,
    pub category: String,
    pub difficulty: u8,
    pub estimated_weeks: f64,
    pub prerequisites: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub why_needed: String,
}

/// One topological layer of the missing-skill graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub phase_number: u32,
    pub title: String,
    pub description: String,
    pub skills: Vec<SkillNode>,
    pub total_weeks: f64,
    pub total_hours: u32,
    /// What the learner can do once the phase is complete.
    pub milestone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_job_id: Option<u64>,
    pub target_job: String,
    pub target_company: String,
    pub current_match_score: f64,
    pub projected_match_score: f64,
    pub missing_skills_count: usize,
    pub phases: Vec<LearningPhase>,
    #[serde(rename = "total_estimated_weeks")]
    pub total_weeks: f64,
    #[serde(rename = "total_estimated_hours")]
    pub total_hours: u32,
    pub summary: String,
    pub motivation_message: String,
    /// Skills whose in-gap prerequisites form a cycle; they share the final phase unordered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_skills: Vec<String>,
}
