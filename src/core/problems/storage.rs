//! On-disk layout of the problem store (`problems.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::persistence::{self, StoreError};

use super::Problem;

pub(super) fn problems_path(dir: &Path) -> PathBuf {
    dir.join("problems.json")
}

/// Problems, newest first.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct ProblemsFile {
    pub(super) problems: Vec<Problem>,
}

/// Load the store. Returns an empty file when none exists yet (first run).
pub(super) fn load(dir: &Path) -> Result<ProblemsFile, StoreError> {
    Ok(persistence::read_json(&problems_path(dir))?.unwrap_or_default())
}

pub(super) fn save(dir: &Path, file: &ProblemsFile) -> Result<(), StoreError> {
    persistence::write_json(&problems_path(dir), file)
}
