//! Axum route handlers for the Roadmap API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::JobDescription;
use crate::roadmap::effort::Pace;
use crate::roadmap::models::RoadmapResponse;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either `target_job_id` (looked up in the job directory) or an inline `target_job`.
#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub target_job_id: Option<u64>,
    #[serde(default)]
    pub target_job: Option<JobDescription>,
    /// "intensive" | "moderate" | "relaxed"; anything else is treated as moderate.
    #[serde(default)]
    pub learning_pace: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SkillSummary {
    pub category: String,
    pub difficulty: u8,
    pub prerequisites: Vec<String>,
    pub estimated_weeks: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/roadmap/generate
///
/// Builds a phased learning roadmap from the candidate's skills to the target job.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let (job, job_id) = match (request.target_job_id, request.target_job) {
        (Some(id), None) => {
            let record = state
                .jobs
                .find(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Job with ID {id} not found")))?;
            (record.description, Some(id))
        }
        (None, Some(job)) => (job, None),
        (Some(_), Some(_)) => {
            return Err(AppError::Validation(
                "Provide either target_job_id or target_job, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(AppError::Validation(
                "target_job_id or target_job is required".to_string(),
            ))
        }
    };

    let pace = request
        .learning_pace
        .as_deref()
        .map(Pace::parse_lenient)
        .unwrap_or(state.config.default_pace);

    let roadmap = state
        .engine
        .generate(&request.current_skills, &job, job_id, pace);

    Ok(Json(roadmap))
}

/// GET /api/roadmap/skills
///
/// Returns the skill taxonomy keyed by skill name.
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, SkillSummary>> {
    let skills = state
        .engine
        .catalog()
        .records()
        .into_iter()
        .map(|record| {
            (
                record.name.clone(),
                SkillSummary {
                    category: record.category.clone(),
                    difficulty: record.difficulty,
                    prerequisites: record.prerequisites.clone(),
                    estimated_weeks: record.base_weeks,
                },
            )
        })
        .collect();

    Json(skills)
}
