use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jobs::{JobDirectory, JobRecord};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read jobs file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed jobs file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("job id {0} is listed more than once")]
    DuplicateId(u64),
}

#[derive(Debug, Deserialize)]
struct JobsFile {
    #[serde(default)]
    jobs: Vec<JobRecord>,
}

/// In-memory job directory, fixed after construction.
#[derive(Debug, Clone, Default)]
pub struct StaticJobDirectory {
    jobs: HashMap<u64, JobRecord>,
}

impl StaticJobDirectory {
    pub fn new(records: Vec<JobRecord>) -> Result<Self, DirectoryError> {
        let mut jobs = HashMap::with_capacity(records.len());
        for record in records {
            if jobs.contains_key(&record.id) {
                return Err(DirectoryError::DuplicateId(record.id));
            }
            jobs.insert(record.id, record);
        }
        Ok(Self { jobs })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DirectoryError> {
        let file: JobsFile = serde_json::from_str(raw)?;
        Self::new(file.jobs)
    }

    /// Loads `{"jobs": [...]}` from `path`. A missing file gives an empty directory, so every
    /// lookup reports the job as not found.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Jobs file {} not found; job directory is empty", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(DirectoryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let directory = Self::from_json_str(&raw)?;
        info!("Loaded {} jobs from {}", directory.len(), path.display());
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobDirectory for StaticJobDirectory {
    async fn find(&self, id: u64) -> Result<Option<JobRecord>, AppError> {
        Ok(self.jobs.get(&id).cloned())
    }
}
