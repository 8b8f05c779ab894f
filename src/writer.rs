//! # Note Writer
//!
//! Sends a rendered note to its destination: the end of a file, the top of a
//! file, or stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::{NoteError, Result};

/// Where in the target file a note goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Append,
    Prepend,
}

/// What the writer did with the note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Printed to stdout; no file was touched
    Printed,
    /// Written into the file at this path
    Written(PathBuf),
}

/// Writes `text` to `target`, or to `out` for dry runs and when no target is given.
///
/// The parent directory of `target` must already exist. A note that does not
/// end in a newline gets one so the next note starts on its own line.
pub fn write_note(
    text: &str,
    target: Option<&Path>,
    mode: WriteMode,
    dry_run: bool,
    out: &mut dyn Write,
) -> Result<WriteOutcome> {
    let text = terminated(text);

    let Some(path) = target.filter(|_| !dry_run) else {
        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| NoteError::io("<stdout>", e))?;
        return Ok(WriteOutcome::Printed);
    };

    check_parent(path)?;

    match mode {
        WriteMode::Append => append(path, &text)?,
        WriteMode::Prepend => prepend(path, &text)?,
    }

    log::info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(WriteOutcome::Written(path.to_path_buf()))
}

fn terminated(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

fn check_parent(path: &Path) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match parent {
        Some(dir) if !dir.is_dir() => Err(NoteError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory does not exist: {}", dir.display()),
            ),
        )),
        _ => Ok(()),
    }
}

/// Appends in a single write, creating the file if needed.
fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| NoteError::io(path, e))?;

    file.write_all(text.as_bytes())
        .map_err(|e| NoteError::io(path, e))
}

/// Writes the note followed by the old content to a sibling temp file, then
/// renames it over `path`. The replaced file keeps its permissions.
fn prepend(path: &Path, text: &str) -> Result<()> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return append(path, text),
        Err(e) => return Err(NoteError::io(path, e)),
    };

    // Surface permission problems before replacing the file.
    let permissions = OpenOptions::new()
        .append(true)
        .open(path)
        .and_then(|file| file.metadata())
        .map_err(|e| NoteError::io(path, e))?
        .permissions();

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| NoteError::io(dir, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|()| tmp.write_all(existing.as_bytes()))
        .and_then(|()| tmp.as_file().set_permissions(permissions))
        .map_err(|e| NoteError::io(tmp.path(), e))?;

    tmp.persist(path).map_err(|e| NoteError::io(path, e.error))?;
    Ok(())
}
