//! # Test Harness
//!
//! Provides utilities for integration testing notetaker without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{Local, TimeZone};
use tempfile::TempDir;

use notetaker::{
    clock::FixedClock,
    commands::{create, CreateArgs, Environment},
    input::ScriptedInput,
    set_home_override,
    template::HandlebarsEngine,
    Config, WriteOutcome,
};

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Timestamp produced by [`fixed_clock`] with the default date format.
pub const FIXED_DATE: &str = "Wed Aug 01 09:30:05 2018";

/// A clock stopped at 2018-08-01 09:30:05 local time.
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        Local
            .with_ymd_and_hms(2018, 8, 1, 9, 30, 5)
            .single()
            .expect("valid local time"),
    )
}

/// The dashed separator line under a note's title.
pub fn separator() -> String {
    "-".repeat(80)
}

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the project directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/notetaker/config)
    pub home_dir: TempDir,
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    /// Changes to the project directory for the duration of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let project_dir = TempDir::new().expect("Failed to create temp project dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            home_dir,
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path to the simulated home directory.
    pub fn home_path(&self) -> &Path {
        self.home_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("notetaker")
            .join("config")
    }

    /// Returns the path where project config would be stored.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir.path().join(".notetaker")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Creates a project config file with the given content.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Writes a file relative to the project directory, creating parents.
    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write project file");
        path
    }

    /// Reads a file relative to the project directory.
    pub fn read_project_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_dir.path().join(relative))
            .expect("Failed to read project file")
    }

    /// Runs the create command with the loaded config, a fixed clock and
    /// scripted stdin. Returns the outcome and whatever went to stdout.
    pub fn create(
        &self,
        args: &CreateArgs,
        input: ScriptedInput,
    ) -> anyhow::Result<(WriteOutcome, String)> {
        let config = Config::load()?;
        let mut input = input;
        let mut out = Vec::new();
        let mut prompt = Vec::new();

        let outcome = create::run(
            args,
            Environment {
                config: &config,
                input: &mut input,
                clock: &fixed_clock(),
                engine: &HandlebarsEngine::new(),
                out: &mut out,
                prompt_out: &mut prompt,
            },
        )?;

        Ok((outcome, String::from_utf8(out)?))
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Helper to build TOML config lines from optional values.
struct ConfigLines(Vec<String>);

impl ConfigLines {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn add_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = \"{v}\""));
        }
    }

    fn add_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn build(self) -> String {
        self.0.join("\n")
    }
}

/// Builder for global and project configurations.
///
/// Every key is optional; unset keys are left out of the file so the
/// loader's defaults (or the global values, for a project file) apply.
#[derive(Default)]
pub struct ConfigBuilder {
    notes_file: Option<String>,
    template: Option<String>,
    template_dir: Option<String>,
    content_type: Option<String>,
    date_format: Option<String>,
    append_date_to_header: Option<bool>,
    autohashtag: Option<bool>,
    prepend: Option<bool>,
    editor: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes_file(mut self, path: impl Into<String>) -> Self {
        self.notes_file = Some(path.into());
        self
    }

    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    pub fn template_dir(mut self, dir: impl Into<String>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    pub fn append_date_to_header(mut self, append: bool) -> Self {
        self.append_date_to_header = Some(append);
        self
    }

    pub fn autohashtag(mut self, autohashtag: bool) -> Self {
        self.autohashtag = Some(autohashtag);
        self
    }

    pub fn prepend(mut self, prepend: bool) -> Self {
        self.prepend = Some(prepend);
        self
    }

    pub fn editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_string("notes_file", self.notes_file.as_deref());
        lines.add_string("template", self.template.as_deref());
        lines.add_string("template_dir", self.template_dir.as_deref());
        lines.add_string("content_type", self.content_type.as_deref());
        lines.add_string("date_format", self.date_format.as_deref());
        lines.add_bool("append_date_to_header", self.append_date_to_header);
        lines.add_bool("autohashtag", self.autohashtag);
        lines.add_bool("prepend", self.prepend);
        lines.add_string("editor", self.editor.as_deref());
        lines.build()
    }
}
