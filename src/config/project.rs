//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.notetaker` in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    constants::PROJECT_CONFIG_FILE,
    error::{NoteError, Result},
};

/// Project configuration stored at .notetaker in project root.
///
/// Every field is optional; set fields override the global configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Notes file, relative to the project root unless absolute
    #[serde(default)]
    pub notes_file: Option<PathBuf>,

    /// Template name override
    #[serde(default)]
    pub template: Option<String>,

    /// Template directory, relative to the project root unless absolute
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Fenced block language override
    #[serde(default)]
    pub content_type: Option<String>,

    /// Timestamp pattern override
    #[serde(default)]
    pub date_format: Option<String>,

    #[serde(default)]
    pub append_date_to_header: Option<bool>,

    #[serde(default)]
    pub autohashtag: Option<bool>,

    #[serde(default)]
    pub prepend: Option<bool>,
}

impl ProjectConfig {
    /// Finds the project root by searching for .notetaker upward from `start`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .notetaker in the given directory,
    /// resolving relative paths against `project_root`.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| NoteError::io(&path, e))?;
        let mut config: Self = toml::from_str(&content).map_err(|e| NoteError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        config.notes_file = config.notes_file.map(|p| project_root.join(p));
        config.template_dir = config.template_dir.map(|p| project_root.join(p));

        log::debug!("loaded project config from {}", path.display());
        Ok(config)
    }
}
