//! Phase Scheduler: layered topological sort of the missing skills.
//!
//! Only prerequisite edges between two missing skills constrain ordering; a prerequisite the
//! candidate already has (or that the job never mentions) is treated as satisfied. Each round
//! emits every skill whose in-gap prerequisites were scheduled in earlier rounds. If a round
//! finds nothing ready, the rest of the gap is caught in a cycle and is emitted as one final,
//! unordered phase.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::roadmap::catalog::{normalize, SkillCatalog};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    /// Lowercase skill names per phase, in learning order.
    pub phases: Vec<Vec<String>>,
    /// Skills placed by the cycle fallback (all members of the last phase), if any.
    pub unresolved: Vec<String>,
}

impl Schedule {
    pub fn skill_count(&self) -> usize {
        self.phases.iter().map(Vec::len).sum()
    }
}

/// Orders `missing` into phases. Within a phase skills keep their order from `missing`.
pub fn schedule_phases(missing: &[String], catalog: &SkillCatalog) -> Schedule {
    let mut seen = HashSet::new();
    let order: Vec<String> = missing
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect();

    let in_gap: HashSet<&str> = order.iter().map(String::as_str).collect();
    let dependencies: HashMap<&str, Vec<&str>> = order
        .iter()
        .map(|skill| {
            let prereqs = catalog
                .get(skill)
                .map(|record| {
                    record
                        .prerequisites
                        .iter()
                        .map(String::as_str)
                        .filter(|p| in_gap.contains(p))
                        .collect::<Vec<&str>>()
                })
                .unwrap_or_default();
            (skill.as_str(), prereqs)
        })
        .collect();

    let mut schedule = Schedule::default();
    let mut remaining: Vec<&str> = order.iter().map(String::as_str).collect();

    while !remaining.is_empty() {
        let pending: HashSet<&str> = remaining.iter().copied().collect();
        let (ready, blocked): (Vec<&str>, Vec<&str>) =
            remaining.into_iter().partition(|skill| {
                dependencies
                    .get(skill)
                    .map_or(true, |prereqs| prereqs.iter().all(|p| !pending.contains(p)))
            });

        if ready.is_empty() {
            warn!(
                skills = ?blocked,
                "Circular prerequisites in skill gap; scheduling remaining skills as one phase"
            );
            let fallback: Vec<String> = blocked.iter().map(|s| s.to_string()).collect();
            schedule.unresolved = fallback.clone();
            schedule.phases.push(fallback);
            break;
        }

        schedule
            .phases
            .push(ready.iter().map(|s| s.to_string()).collect());
        remaining = blocked;
    }

    schedule
}
