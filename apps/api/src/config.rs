use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::roadmap::effort::Pace;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// External skill catalog; the embedded taxonomy is used when unset.
    pub skill_catalog_path: Option<PathBuf>,
    pub jobs_path: PathBuf,
    /// Pace applied when a request does not name one.
    pub default_pace: Pace,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_pace = match optional_env("DEFAULT_PACE") {
            Some(raw) => raw
                .parse::<Pace>()
                .context("DEFAULT_PACE must be intensive, moderate or relaxed")?,
            None => Pace::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_catalog_path: optional_env("SKILL_CATALOG_PATH").map(PathBuf::from),
            jobs_path: optional_env("JOBS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/jobs.json")),
            default_pace,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
