//! Skill Catalog: static reference table of skills, their prerequisites and learning resources.
//!
//! The catalog is loaded once at startup (embedded JSON by default, or an external file named by
//! `SKILL_CATALOG_PATH`), validated, and then shared read-only behind an `Arc` by every request.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded default taxonomy.
const BUILTIN_CATALOG: &str = include_str!("../../data/skill_catalog.json");

const DEFAULT_CATEGORY: &str = "Technical";
const DEFAULT_DIFFICULTY: u8 = 3;
const DEFAULT_WEEKS: f64 = 2.0;
const DEFAULT_RESOURCE_HOURS: u32 = 10;
const DEFAULT_PROVIDER: &str = "Various";

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Tutorial,
    Documentation,
    Project,
}

/// A single learning resource attached to a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub url: Option<String>,
    pub provider: String,
    #[serde(rename = "estimated_hours")]
    pub hours: u32,
    pub is_free: bool,
}

/// Catalog entry for one skill. `name` and `prerequisites` are lowercase once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub category: String,
    /// 1 (easy) – 5 (hard)
    pub difficulty: u8,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub base_weeks: f64,
    #[serde(default)]
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    skills: Vec<SkillRecord>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read skill catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed skill catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("skill catalog contains an entry with an empty name")]
    EmptyName,

    #[error("skill '{0}' is listed more than once")]
    Duplicate(String),

    #[error("skill '{skill}' has difficulty {value}, expected 1-5")]
    Difficulty { skill: String, value: u8 },

    #[error("skill '{0}' must have a positive base_weeks")]
    NonPositiveWeeks(String),

    #[error("resource '{resource}' of skill '{skill}' must have positive estimated_hours")]
    ZeroHours { skill: String, resource: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: HashMap<String, SkillRecord>,
}

impl SkillCatalog {
    /// The taxonomy compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_records(file.skills)
    }

    /// Normalizes names to lowercase and validates every record.
    pub fn from_records(records: Vec<SkillRecord>) -> Result<Self, CatalogError> {
        let mut skills = HashMap::with_capacity(records.len());

        for mut record in records {
            record.name = normalize(&record.name);
            if record.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !(1..=5).contains(&record.difficulty) {
                return Err(CatalogError::Difficulty {
                    skill: record.name,
                    value: record.difficulty,
                });
            }
            if !(record.base_weeks > 0.0) {
                return Err(CatalogError::NonPositiveWeeks(record.name));
            }
            if let Some(resource) = record.resources.iter().find(|r| r.hours == 0) {
                return Err(CatalogError::ZeroHours {
                    skill: record.name.clone(),
                    resource: resource.title.clone(),
                });
            }

            let mut seen = HashSet::new();
            record.prerequisites = record
                .prerequisites
                .iter()
                .map(|p| normalize(p))
                .filter(|p| !p.is_empty() && seen.insert(p.clone()))
                .collect();

            if skills.contains_key(&record.name) {
                return Err(CatalogError::Duplicate(record.name));
            }
            skills.insert(record.name.clone(), record);
        }

        Ok(Self { skills })
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&SkillRecord> {
        self.skills.get(&normalize(name))
    }

    /// Returns the catalog record, or a synthesized default for unknown skills.
    ///
    /// Known skills without any resources also receive the generic default resource, so every
    /// record handed out by this function carries at least one resource.
    pub fn lookup_or_default(&self, name: &str) -> Cow<'_, SkillRecord> {
        match self.get(name) {
            Some(record) if !record.resources.is_empty() => Cow::Borrowed(record),
            Some(record) => {
                let mut record = record.clone();
                record.resources = vec![default_resource(&record.name)];
                Cow::Owned(record)
            }
            None => Cow::Owned(default_record(name)),
        }
    }

    /// All records, sorted by name.
    pub fn records(&self) -> Vec<&SkillRecord> {
        let mut records: Vec<&SkillRecord> = self.skills.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Canonical catalog key for a skill name.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Display form of a skill name: every letter that follows a non-letter is uppercased,
/// the rest lowercased ("node.js" → "Node.Js", "ci/cd" → "Ci/Cd").
pub fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.trim().chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn default_record(name: &str) -> SkillRecord {
    let name = normalize(name);
    SkillRecord {
        resources: vec![default_resource(&name)],
        name,
        category: DEFAULT_CATEGORY.to_string(),
        difficulty: DEFAULT_DIFFICULTY,
        prerequisites: vec![],
        base_weeks: DEFAULT_WEEKS,
    }
}

fn default_resource(name: &str) -> LearningResource {
    LearningResource {
        title: format!("Learn {}", display_name(name)),
        kind: ResourceKind::Tutorial,
        url: None,
        provider: DEFAULT_PROVIDER.to_string(),
        hours: DEFAULT_RESOURCE_HOURS,
        is_free: true,
    }
}
