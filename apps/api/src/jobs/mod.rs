//! Job Directory: resolves a target job id to the skills it asks for.
//!
//! `AppState` holds an `Arc<dyn JobDirectory>`; the default backend is
//! [`StaticJobDirectory`], loaded from a JSON file at startup.

pub mod directory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub use directory::StaticJobDirectory;

/// What the roadmap engine needs to know about a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default, alias = "optional_skills")]
    pub nice_to_have_skills: Vec<String>,
}

/// A job posting as stored in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: u64,
    #[serde(flatten)]
    pub description: JobDescription,
}

#[async_trait]
pub trait JobDirectory: Send + Sync {
    /// `Ok(None)` when no job has this id.
    async fn find(&self, id: u64) -> Result<Option<JobRecord>, AppError>;
}
