//! # Constants
//!
//! Centralized constants for magic values used throughout notetaker.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Note Format
// =============================================================================

/// Width of the dashed separator line under a note's title.
pub const SEPARATOR_WIDTH: usize = 80;

/// Default `strftime` pattern for note timestamps.
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Default language tag for the fenced body block in markdown templates.
pub const DEFAULT_CONTENT_TYPE: &str = "text";

/// Name of the template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "default";

/// File extension for user templates inside the template directory.
pub const TEMPLATE_FILE_EXTENSION: &str = "hbs";

// =============================================================================
// Interactive Input
// =============================================================================

/// Instruction printed before reading the body from a terminal.
pub const PROMPT_INSTRUCTION: &str = "Press CTRL-D (^D) or send 'EOF' to terminate input...";

/// Lines that end interactive input (compared without the line terminator).
pub const INPUT_TERMINATORS: &[&str] = &["EOF", "."];

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "notetaker";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Project configuration file name, searched upward from the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".notetaker";

/// Prefix for the temporary file handed to the editor.
pub const EDITOR_TEMP_PREFIX: &str = "note-";

// =============================================================================
// Shell Completion Paths
// =============================================================================

/// Zsh custom completions directory (relative to home).
pub const ZSH_COMPLETIONS_DIR: &str = ".zfunc";

/// Bash completions directory (relative to home).
pub const BASH_COMPLETIONS_DIR: &str = ".local/share/bash-completion/completions";

/// Fish completions directory (relative to home).
pub const FISH_COMPLETIONS_DIR: &str = ".config/fish/completions";
