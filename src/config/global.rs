//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/notetaker/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use serde::Deserialize;

use crate::{
    constants::{
        DEFAULT_CONTENT_TYPE, DEFAULT_DATE_FORMAT, DEFAULT_TEMPLATE, GLOBAL_CONFIG_DIR,
        GLOBAL_CONFIG_FILENAME,
    },
    error::{NoteError, Result},
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Returns the effective home directory (override first, then the real one).
pub fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Expands a leading `~/` to the home directory.
pub fn expand_home(path: PathBuf) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    home_dir().map_or_else(|| path.clone(), |home| home.join(rest))
}

/// Global configuration stored at ~/.config/notetaker/config
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// File notes are appended to when `--file` is not given
    #[serde(default)]
    pub notes_file: Option<PathBuf>,

    /// Name of the template used when `--template` is not given
    #[serde(default = "default_template")]
    pub template: String,

    /// Directory searched for `<name>.hbs` before the built-in templates
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Language tag for the fenced body block
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// `strftime` pattern for note timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether a header line reads `header / date` instead of just `header`
    #[serde(default = "default_true")]
    pub append_date_to_header: bool,

    /// Whether tags render as `#tag` tokens by default
    #[serde(default)]
    pub autohashtag: bool,

    /// Whether notes are written to the top of the file instead of the end
    #[serde(default)]
    pub prepend: bool,

    /// Editor command (e.g., "nvim", "code --wait")
    #[serde(default)]
    pub editor: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            notes_file: None,
            template: default_template(),
            template_dir: None,
            content_type: default_content_type(),
            date_format: default_date_format(),
            append_date_to_header: true,
            autohashtag: false,
            prepend: false,
            editor: None,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/notetaker/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/notetaker)
    pub fn dir() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            log::debug!("no home directory, using default global config");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("global config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| NoteError::io(&path, e))?;
        let mut config: Self = toml::from_str(&content).map_err(|e| NoteError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        config.notes_file = config.notes_file.map(expand_home);
        config.template_dir = config.template_dir.map(expand_home);

        log::debug!("loaded global config from {}", path.display());
        Ok(config)
    }

    /// Creates the global config with default values and comments.
    /// Used by `notes setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            return Err(NoteError::Config {
                path: PathBuf::from("~/.config"),
                message: "could not determine home directory".to_string(),
            });
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| NoteError::io(parent, e))?;
        }

        fs::write(&path, Self::default().commented_toml()).map_err(|e| NoteError::io(&path, e))?;
        Ok(true)
    }

    /// Renders the config with a comment above every option.
    ///
    /// Optional fields (`notes_file`, `template_dir`, `editor`) are shown as
    /// commented examples when not set.
    pub fn commented_toml(&self) -> String {
        let optional = |value: Option<String>, key: &str, example: &str| {
            value.map_or_else(
                || format!("# {key} = \"{example}\""),
                |v| format!("{key} = \"{v}\""),
            )
        };

        let notes_file_line = optional(
            self.notes_file.as_ref().map(|p| p.display().to_string()),
            "notes_file",
            "~/notes/journal.md",
        );
        let template_dir_line = optional(
            self.template_dir.as_ref().map(|p| p.display().to_string()),
            "template_dir",
            "~/.config/notetaker/templates",
        );
        let editor_line = optional(self.editor.clone(), "editor", "nvim");

        format!(
            r#"# notetaker Global Configuration
# Location: ~/.config/notetaker/config
# A `.notetaker` file in a project directory overrides any of these values.

# File that notes are appended to when --file is not given.
# Without it (and without --file) notes are printed to stdout.
{notes_file_line}

# Template used when --template is not given.
# Built-in: default, comment, yaml, text, todo, todo-oneliner
template = "{template}"

# Directory searched for <name>.hbs before the built-in templates.
{template_dir_line}

# Language tag of the fenced code block holding the note body.
content_type = "{content_type}"

# strftime pattern for the note timestamp.
date_format = "{date_format}"

# Render a header as "header / date" (true) or just "header" (false).
append_date_to_header = {append_date_to_header}

# Render tags as #tag tokens.
autohashtag = {autohashtag}

# Write new notes at the top of the file instead of the end.
prepend = {prepend}

# Editor used by --edit. Falls back to $VISUAL, then $EDITOR, then "vi".
{editor_line}
"#,
            template = self.template,
            content_type = self.content_type,
            date_format = self.date_format,
            append_date_to_header = self.append_date_to_header,
            autohashtag = self.autohashtag,
            prepend = self.prepend,
        )
    }
}
