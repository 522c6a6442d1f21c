//! Roadmap Engine: gap analysis → phase scheduling → effort estimation → assembly.

use std::sync::Arc;

use tracing::{debug, info};

use crate::jobs::JobDescription;
use crate::roadmap::assembler::assemble;
use crate::roadmap::catalog::SkillCatalog;
use crate::roadmap::effort::Pace;
use crate::roadmap::gap::analyze_gap;
use crate::roadmap::models::RoadmapResponse;
use crate::roadmap::scheduler::schedule_phases;

const CLOSED_GAP_SUMMARY: &str = "Congratulations! You already have all the skills for this role.";
const CLOSED_GAP_MOTIVATION: &str = "🎉 You're ready to apply! Your skills are a perfect match.";

/// Stateless roadmap generator over a shared, read-only skill catalog.
#[derive(Debug, Clone)]
pub struct RoadmapEngine {
    catalog: Arc<SkillCatalog>,
}

impl RoadmapEngine {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn generate(
        &self,
        current_skills: &[String],
        job: &JobDescription,
        job_id: Option<u64>,
        pace: Pace,
    ) -> RoadmapResponse {
        let gap = analyze_gap(current_skills, &job.required_skills, &job.nice_to_have_skills);

        if gap.is_closed() {
            debug!(job = %job.title, "No skill gap; returning completed roadmap");
            return closed_gap_response(job, job_id);
        }

        let schedule = schedule_phases(&gap.missing, &self.catalog);
        debug!(
            skills = schedule.skill_count(),
            phases = schedule.phases.len(),
            "Scheduled missing skills"
        );
        let roadmap = assemble(schedule, &gap, pace, job, job_id, &self.catalog);

        info!(
            job = %job.title,
            company = %job.company,
            missing = roadmap.missing_skills_count,
            phases = roadmap.phases.len(),
            weeks = roadmap.total_weeks,
            %pace,
            "Generated learning roadmap"
        );

        roadmap
    }
}

fn closed_gap_response(job: &JobDescription, job_id: Option<u64>) -> RoadmapResponse {
    RoadmapResponse {
        target_job_id: job_id,
        target_job: job.title.clone(),
        target_company: job.company.clone(),
        current_match_score: 100.0,
        projected_match_score: 100.0,
        missing_skills_count: 0,
        phases: vec![],
        total_weeks: 0.0,
        total_hours: 0,
        summary: CLOSED_GAP_SUMMARY.to_string(),
        motivation_message: CLOSED_GAP_MOTIVATION.to_string(),
        unresolved_skills: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::catalog::{normalize, SkillRecord};
    use std::collections::HashMap;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn engine() -> RoadmapEngine {
        RoadmapEngine::new(Arc::new(SkillCatalog::builtin().unwrap()))
    }

    fn job(required: &[&str], optional: &[&str]) -> JobDescription {
        JobDescription {
            title: "Backend Engineer".to_string(),
            company: "Northwind Labs".to_string(),
            required_skills: skills(required),
            nice_to_have_skills: skills(optional),
        }
    }

    fn phase_names(roadmap: &RoadmapResponse) -> Vec<Vec<String>> {
        roadmap
            .phases
            .iter()
            .map(|p| p.skills.iter().map(|s| normalize(&s.name)).collect())
            .collect()
    }

    #[test]
    fn test_python_then_fastapi() {
        let roadmap = engine().generate(&[], &job(&["python", "fastapi"], &[]), None, Pace::Moderate);
        assert_eq!(roadmap.missing_skills_count, 2);
        assert_eq!(phase_names(&roadmap), vec![skills(&["python"]), skills(&["fastapi"])]);
        assert_eq!(roadmap.current_match_score, 0.0);
        assert_eq!(roadmap.projected_match_score, 100.0);
    }

    #[test]
    fn test_full_match_short_circuits() {
        let all = skills(&[
            "python", "fastapi", "sql", "postgresql", "docker", "kubernetes", "aws", "react",
            "javascript",
        ]);
        let description = JobDescription {
            title: "Senior Software Engineer".to_string(),
            company: "Helix Systems".to_string(),
            required_skills: all.clone(),
            nice_to_have_skills: vec![],
        };
        let roadmap = engine().generate(&all, &description, Some(5), Pace::Intensive);
        assert_eq!(roadmap.current_match_score, 100.0);
        assert_eq!(roadmap.projected_match_score, 100.0);
        assert_eq!(roadmap.missing_skills_count, 0);
        assert!(roadmap.phases.is_empty());
        assert_eq!(roadmap.total_weeks, 0.0);
        assert_eq!(roadmap.total_hours, 0);
        assert_eq!(roadmap.summary, CLOSED_GAP_SUMMARY);
        assert_eq!(roadmap.target_job_id, Some(5));
    }

    #[test]
    fn test_docker_then_kubernetes_weeks() {
        let roadmap = engine().generate(
            &skills(&["python"]),
            &job(&["docker", "kubernetes"], &[]),
            None,
            Pace::Moderate,
        );
        assert_eq!(phase_names(&roadmap), vec![skills(&["docker"]), skills(&["kubernetes"])]);
        assert_eq!(roadmap.phases[0].total_weeks, 1.4);
        // kubernetes: 4 * 0.7
        assert_eq!(roadmap.phases[1].total_weeks, 2.8);
        assert_eq!(roadmap.phases[0].total_hours, 25);
        assert_eq!(roadmap.phases[1].total_hours, 50);
        assert_eq!(roadmap.total_hours, 75);
    }

    #[test]
    fn test_cyclic_catalog_terminates_with_single_phase() {
        let record = |name: &str, prereq: &str| SkillRecord {
            name: name.to_string(),
            category: "Testing".to_string(),
            difficulty: 3,
            prerequisites: vec![prereq.to_string()],
            base_weeks: 1.0,
            resources: vec![],
        };
        let catalog = SkillCatalog::from_records(vec![record("x", "y"), record("y", "x")]).unwrap();
        let engine = RoadmapEngine::new(Arc::new(catalog));

        let roadmap = engine.generate(&[], &job(&["x", "y"], &[]), None, Pace::Moderate);
        assert_eq!(roadmap.phases.len(), 1);
        assert_eq!(phase_names(&roadmap), vec![skills(&["x", "y"])]);
        assert_eq!(roadmap.unresolved_skills, skills(&["X", "Y"]));
    }

    #[test]
    fn test_coverage_matches_missing_set() {
        let description = job(
            &["Python", "Spark", "Airflow", "SQL"],
            &["AWS", "PostgreSQL", "Rust", "spark"],
        );
        let roadmap = engine().generate(&skills(&["sql"]), &description, None, Pace::Relaxed);

        let mut scheduled: Vec<String> = phase_names(&roadmap).concat();
        scheduled.sort();
        assert_eq!(
            scheduled,
            skills(&["airflow", "aws", "postgresql", "python", "rust", "spark"])
        );
        assert_eq!(roadmap.missing_skills_count, scheduled.len());
    }

    #[test]
    fn test_in_gap_prerequisites_precede_dependents() {
        let description = job(
            &["React", "TypeScript", "GraphQL", "Node.js"],
            &["JavaScript", "Spark", "Python", "SQL", "PostgreSQL"],
        );
        let engine = engine();
        let roadmap = engine.generate(&[], &description, None, Pace::Moderate);

        let position: HashMap<String, usize> = phase_names(&roadmap)
            .into_iter()
            .enumerate()
            .flat_map(|(i, phase)| phase.into_iter().map(move |s| (s, i)))
            .collect();
        for (skill, phase) in &position {
            for prereq in &engine.catalog().get(skill).unwrap().prerequisites {
                if let Some(prereq_phase) = position.get(prereq) {
                    assert!(prereq_phase < phase, "{prereq} must precede {skill}");
                }
            }
        }
    }

    #[test]
    fn test_totals_are_phase_sums() {
        let description = job(&["React", "Node.js", "MongoDB"], &["TypeScript", "GraphQL"]);
        let roadmap = engine().generate(&[], &description, None, Pace::Intensive);
        let weeks: f64 = roadmap.phases.iter().map(|p| p.total_weeks).sum();
        let hours: u32 = roadmap.phases.iter().map(|p| p.total_hours).sum();
        assert_eq!(roadmap.total_weeks, weeks);
        assert_eq!(roadmap.total_hours, hours);
        assert!(roadmap.total_weeks >= 0.0);
    }

    #[test]
    fn test_pace_orders_total_weeks() {
        let description = job(&["Kubernetes", "AWS", "Terraform"], &[]);
        let engine = engine();
        let weeks = |pace| engine.generate(&[], &description, None, pace).total_weeks;
        assert!(weeks(Pace::Intensive) < weeks(Pace::Moderate));
        assert!(weeks(Pace::Moderate) < weeks(Pace::Relaxed));
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let many = skills(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let roadmap = engine().generate(&many, &job(&["python"], &["sql"]), None, Pace::Moderate);
        assert!((0.0..=100.0).contains(&roadmap.current_match_score));
        assert_eq!(roadmap.projected_match_score, 100.0);
    }

    #[test]
    fn test_phase_numbers_follow_emission_order() {
        let roadmap = engine().generate(
            &[],
            &job(&["sql", "postgresql", "python", "spark", "airflow"], &[]),
            None,
            Pace::Moderate,
        );
        let numbers: Vec<u32> = roadmap.phases.iter().map(|p| p.phase_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(roadmap.summary.contains("5 skills across 2 phases"));
    }
}
