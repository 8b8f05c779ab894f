//! # Editor Integration
//!
//! Launches the user's preferred editor to compose a note body.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, io, path::Path, process::Command};

use crate::{
    config::Config,
    constants::EDITOR_TEMP_PREFIX,
    error::{NoteError, Result},
};

/// Editor used when none is configured.
const FALLBACK_EDITOR: &str = "vi";

/// Opens `path` in `editor` and waits for it to exit.
///
/// The command is split with shell quoting rules so editors with arguments
/// (e.g., `code --wait`) work.
pub fn open(path: &Path, editor: &str) -> Result<()> {
    let parts = shlex::split(editor).unwrap_or_default();
    let Some((program, args)) = parts.split_first() else {
        return Err(NoteError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"),
        ));
    };

    log::debug!("launching editor: {editor} {}", path.display());
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| {
            NoteError::io(
                path,
                io::Error::new(e.kind(), format!("failed to launch editor '{editor}': {e}")),
            )
        })?;

    if !status.success() {
        return Err(NoteError::io(
            path,
            io::Error::other(format!("editor exited with error: {status}")),
        ));
    }

    Ok(())
}

/// Lets the user write the body in their editor and returns what they saved.
///
/// The editor is determined by (in order of priority):
/// 1. `editor` setting in config
/// 2. `$VISUAL` environment variable
/// 3. `$EDITOR` environment variable
/// 4. Fallback to `vi`
pub fn compose_body(config: &Config) -> Result<String> {
    let editor = config
        .editor()
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

    let file = tempfile::Builder::new()
        .prefix(EDITOR_TEMP_PREFIX)
        .suffix(".md")
        .tempfile()
        .map_err(|e| NoteError::io(std::env::temp_dir(), e))?;

    open(file.path(), &editor)?;

    fs::read_to_string(file.path()).map_err(|e| NoteError::io(file.path(), e))
}
