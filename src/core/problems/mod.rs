//! Problem records: one analysed photo and the solution text the model wrote for it.
//!
//! Records live in `problems.json` under the data directory, newest first.

mod storage;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::analyze::AnalysisResult;
use crate::core::paths;
use crate::core::persistence::StoreError;

/// A stored problem. Only the raw `solution` is persisted; steps and the final
/// answer are recomputed from it on every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub solution: String,
    pub problem_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// New record with a fresh id, created now.
    pub fn new(image_uri: impl Into<String>, analysis: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_uri: image_uri.into(),
            image_url: None,
            solution: analysis.solution,
            problem_type: analysis.problem_type,
            subject: Some(analysis.subject).filter(|s| !s.trim().is_empty()),
            created_at: Utc::now(),
        }
    }

    /// First 8 characters of the id, enough to address it from the CLI.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Problem records in one data directory.
#[derive(Debug, Clone)]
pub struct ProblemStore {
    dir: PathBuf,
}

impl ProblemStore {
    /// Store in the platform data directory (or `SOLVENOTE_DATA_DIR`).
    pub fn open() -> Result<Self, StoreError> {
        paths::data_dir()
            .map(Self::at)
            .ok_or(StoreError::NoDataDir)
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All problems, newest first.
    pub fn list(&self) -> Result<Vec<Problem>, StoreError> {
        Ok(storage::load(&self.dir)?.problems)
    }

    /// Insert at the front. A record with the same id is replaced.
    pub fn save(&self, problem: &Problem) -> Result<(), StoreError> {
        let mut file = storage::load(&self.dir)?;
        file.problems.retain(|p| p.id != problem.id);
        file.problems.insert(0, problem.clone());
        storage::save(&self.dir, &file)?;
        log::info!("saved problem {}", problem.id);
        Ok(())
    }

    /// Look up by full id, or by an id prefix that matches exactly one problem.
    pub fn get(&self, id: &str) -> Result<Problem, StoreError> {
        let problems = self.list()?;
        let index = resolve(&problems, id)?;
        Ok(problems[index].clone())
    }

    /// Remove a problem and return it.
    pub fn delete(&self, id: &str) -> Result<Problem, StoreError> {
        let mut file = storage::load(&self.dir)?;
        let index = resolve(&file.problems, id)?;
        let removed = file.problems.remove(index);
        storage::save(&self.dir, &file)?;
        log::info!("deleted problem {}", removed.id);
        Ok(removed)
    }
}

fn resolve(problems: &[Problem], id: &str) -> Result<usize, StoreError> {
    let id = id.trim();
    if let Some(index) = problems.iter().position(|p| p.id == id) {
        return Ok(index);
    }
    if id.is_empty() {
        return Err(StoreError::NotFound(id.to_string()));
    }
    let mut matches = problems
        .iter()
        .enumerate()
        .filter(|(_, p)| p.id.starts_with(id))
        .map(|(i, _)| i);
    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(StoreError::Ambiguous(id.to_string())),
        (None, _) => Err(StoreError::NotFound(id.to_string())),
    }
}

#[cfg(test)]
mod tests;
