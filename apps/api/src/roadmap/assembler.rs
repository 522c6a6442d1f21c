//! Roadmap Assembler: turns scheduled phases into the response the learner sees.

use crate::jobs::JobDescription;
use crate::roadmap::catalog::{display_name, normalize, SkillCatalog};
use crate::roadmap::effort::{estimate_phase, Pace};
use crate::roadmap::gap::GapAnalysis;
use crate::roadmap::models::{LearningPhase, RoadmapResponse, SkillNode};
use crate::roadmap::scheduler::Schedule;

// ────────────────────────────────────────────────────────────────────────────
// Fixed copy
// ────────────────────────────────────────────────────────────────────────────

pub const PHASE_TITLES: [&str; 5] = [
    "Foundation",
    "Core Skills",
    "Advanced Topics",
    "Specialization",
    "Mastery",
];

pub const PHASE_MILESTONES: [&str; 5] = [
    "You'll have the fundamentals to start building",
    "You can contribute to real projects",
    "You'll be comfortable with complex implementations",
    "You'll be an expert in key areas",
    "You'll be ready for senior-level responsibilities",
];

pub const WHY_REQUIRED: &str = "Required skill for this role";
pub const WHY_NICE_TO_HAVE: &str = "Nice-to-have skill that strengthens your profile";

const MOTIVATION_ALMOST_THERE: &str =
    "🚀 You're almost there! Just a few skills to learn and you'll be a perfect match.";
const MOTIVATION_SOLID_JOURNEY: &str =
    "💪 A solid learning journey ahead! With dedication, you'll be job-ready soon.";
const MOTIVATION_ACHIEVABLE: &str =
    "📚 This is achievable! Many developers have bridged similar gaps in a few months.";
const MOTIVATION_LONG_JOURNEY: &str =
    "🎯 A significant but rewarding journey. Break it into phases and celebrate each milestone!";

/// Title for the phase at `index` (0-based). Phases past the end reuse the last title.
pub fn phase_title(index: usize) -> &'static str {
    PHASE_TITLES[index.min(PHASE_TITLES.len() - 1)]
}

/// Milestone for the phase at `index` (0-based), clamped like [`phase_title`].
pub fn phase_milestone(index: usize) -> &'static str {
    PHASE_MILESTONES[index.min(PHASE_MILESTONES.len() - 1)]
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

pub fn build_skill_node(skill: &str, catalog: &SkillCatalog, required: &[String]) -> SkillNode {
    let record = catalog.lookup_or_default(skill);
    let key = normalize(skill);
    let is_required = required.iter().any(|r| normalize(r) == key);

    SkillNode {
        name: display_name(skill),
        category: record.category.clone(),
        difficulty: record.difficulty,
        estimated_weeks: record.base_weeks,
        prerequisites: record.prerequisites.iter().map(|p| display_name(p)).collect(),
        resources: record.resources.clone(),
        why_needed: if is_required {
            WHY_REQUIRED
        } else {
            WHY_NICE_TO_HAVE
        }
        .to_string(),
    }
}

pub fn build_phase(
    index: usize,
    skills: &[String],
    catalog: &SkillCatalog,
    job: &JobDescription,
    pace: Pace,
) -> LearningPhase {
    let nodes: Vec<SkillNode> = skills
        .iter()
        .map(|s| build_skill_node(s, catalog, &job.required_skills))
        .collect();
    let effort = estimate_phase(&nodes, pace);
    let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();

    LearningPhase {
        phase_number: index as u32 + 1,
        title: phase_title(index).to_string(),
        description: format!("Learn {}", names.join(", ")),
        skills: nodes,
        total_weeks: effort.weeks,
        total_hours: effort.hours,
        milestone: phase_milestone(index).to_string(),
    }
}

/// "{n} weeks" for a timeline of at least a week, otherwise "{n} days" (a week counts as four
/// study days). Both are truncated to whole numbers.
pub fn format_duration(total_weeks: f64) -> String {
    if total_weeks >= 1.0 {
        format!("{} weeks", total_weeks as u32)
    } else {
        format!("{} days", (total_weeks * 4.0) as u32)
    }
}

pub fn build_summary(
    job: &JobDescription,
    missing_count: usize,
    phase_count: usize,
    total_weeks: f64,
    pace: Pace,
) -> String {
    format!(
        "To become a strong candidate for {} at {}, you need to learn {} skills across {} phases. \
         Estimated timeline: {} at a {} pace.",
        job.title,
        job.company,
        missing_count,
        phase_count,
        format_duration(total_weeks),
        pace
    )
}

pub fn motivation_message(missing_count: usize, total_weeks: f64) -> &'static str {
    if missing_count <= 2 {
        MOTIVATION_ALMOST_THERE
    } else if missing_count <= 5 {
        MOTIVATION_SOLID_JOURNEY
    } else if total_weeks <= 8.0 {
        MOTIVATION_ACHIEVABLE
    } else {
        MOTIVATION_LONG_JOURNEY
    }
}

/// Builds the full roadmap from a non-empty gap and its schedule.
pub fn assemble(
    schedule: Schedule,
    gap: &GapAnalysis,
    pace: Pace,
    job: &JobDescription,
    job_id: Option<u64>,
    catalog: &SkillCatalog,
) -> RoadmapResponse {
    let phases: Vec<LearningPhase> = schedule
        .phases
        .iter()
        .enumerate()
        .map(|(i, skills)| build_phase(i, skills, catalog, job, pace))
        .collect();

    let total_weeks: f64 = phases.iter().map(|p| p.total_weeks).sum();
    let total_hours: u32 = phases.iter().map(|p| p.total_hours).sum();
    let missing_count = gap.missing.len();

    RoadmapResponse {
        target_job_id: job_id,
        target_job: job.title.clone(),
        target_company: job.company.clone(),
        current_match_score: gap.current_score,
        projected_match_score: gap.projected_score,
        missing_skills_count: missing_count,
        summary: build_summary(job, missing_count, phases.len(), total_weeks, pace),
        motivation_message: motivation_message(missing_count, total_weeks).to_string(),
        phases,
        total_weeks,
        total_hours,
        unresolved_skills: schedule.unresolved.iter().map(|s| display_name(s)).collect(),
    }
}
