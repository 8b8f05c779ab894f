//! # Configuration
//!
//! Merged configuration system combining global (~/.config/notetaker/config)
//! and project (.notetaker) settings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::path::{Path, PathBuf};

pub use self::{
    global::{set_home_override, GlobalConfig},
    project::ProjectConfig,
};
use crate::error::{NoteError, Result};

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration
    pub project: ProjectConfig,

    /// Resolved project root path, if a `.notetaker` file was found
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, searching for a project config from the current directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| NoteError::io(".", e))?;
        Self::load_from(&cwd)
    }

    /// Loads configuration, searching for a project config upward from `start`
    pub fn load_from(start: &Path) -> Result<Self> {
        let global = GlobalConfig::load()?;

        let project_root = ProjectConfig::find_project_root(start);
        let project = match &project_root {
            Some(root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            global,
            project,
            project_root,
        })
    }

    /// Returns the effective notes file
    pub fn notes_file(&self) -> Option<&Path> {
        self.project
            .notes_file
            .as_deref()
            .or(self.global.notes_file.as_deref())
    }

    /// Returns the effective template name
    pub fn template(&self) -> &str {
        self.project
            .template
            .as_deref()
            .unwrap_or(&self.global.template)
    }

    /// Returns the effective template directory
    pub fn template_dir(&self) -> Option<&Path> {
        self.project
            .template_dir
            .as_deref()
            .or(self.global.template_dir.as_deref())
    }

    /// Returns the effective fenced block language
    pub fn content_type(&self) -> &str {
        self.project
            .content_type
            .as_deref()
            .unwrap_or(&self.global.content_type)
    }

    /// Returns the effective timestamp pattern
    pub fn date_format(&self) -> &str {
        self.project
            .date_format
            .as_deref()
            .unwrap_or(&self.global.date_format)
    }

    pub fn append_date_to_header(&self) -> bool {
        self.project
            .append_date_to_header
            .unwrap_or(self.global.append_date_to_header)
    }

    pub fn autohashtag(&self) -> bool {
        self.project.autohashtag.unwrap_or(self.global.autohashtag)
    }

    pub fn prepend(&self) -> bool {
        self.project.prepend.unwrap_or(self.global.prepend)
    }

    /// Returns the effective editor command
    pub fn editor(&self) -> Option<String> {
        self.global.editor.clone().or_else(|| {
            std::env::var("VISUAL")
                .ok()
                .or_else(|| std::env::var("EDITOR").ok())
        })
    }
}
