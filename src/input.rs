//! # Input Collection
//!
//! Reads the note body from stdin and parses the list-valued command-line
//! fields (tags, URLs, key-value pairs).
//!
//! Whether stdin is a terminal is decided by an [`InputSource`], so the
//! piped-vs-interactive branching can be exercised with [`ScriptedInput`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, Cursor, IsTerminal, StdinLock, Write};

use crate::{
    constants::{INPUT_TERMINATORS, PROMPT_INSTRUCTION},
    error::{NoteError, Result},
};

/// Label used for stdin in I/O errors.
const STDIN_LABEL: &str = "<stdin>";

/// A readable stream that knows whether a person is typing into it.
pub trait InputSource {
    /// True when input comes from a terminal rather than a pipe or file.
    fn is_interactive(&self) -> bool;

    fn reader(&mut self) -> &mut dyn BufRead;
}

/// The process's standard input.
pub struct StdinSource {
    interactive: bool,
    lock: StdinLock<'static>,
}

impl StdinSource {
    pub fn new() -> Self {
        let stdin = io::stdin();
        Self {
            interactive: stdin.is_terminal(),
            lock: stdin.lock(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinSource {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn reader(&mut self) -> &mut dyn BufRead {
        &mut self.lock
    }
}

/// In-memory input that pretends to be either a pipe or a terminal.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    interactive: bool,
    data: Cursor<Vec<u8>>,
}

impl ScriptedInput {
    /// Input arriving through a pipe.
    pub fn piped(data: impl Into<String>) -> Self {
        Self {
            interactive: false,
            data: Cursor::new(data.into().into_bytes()),
        }
    }

    /// Input typed at a terminal.
    pub fn terminal(data: impl Into<String>) -> Self {
        Self {
            interactive: true,
            data: Cursor::new(data.into().into_bytes()),
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn reader(&mut self) -> &mut dyn BufRead {
        &mut self.data
    }
}

/// Collects the note body.
///
/// Piped input is read to end-of-stream. Terminal input is read line by line
/// after printing an instruction to `prompt_out`, until end-of-stream or a
/// terminator line (`EOF` or `.`), which is not part of the body. With
/// `prompt` disabled a terminal yields an empty body.
pub fn collect_body(
    source: &mut dyn InputSource,
    prompt: bool,
    prompt_out: &mut dyn Write,
) -> Result<String> {
    if !source.is_interactive() {
        let mut body = String::new();
        source
            .reader()
            .read_to_string(&mut body)
            .map_err(|e| NoteError::io(STDIN_LABEL, e))?;
        log::debug!("read {} bytes of piped input", body.len());
        return Ok(body);
    }

    if !prompt {
        log::debug!("prompt suppressed, body left empty");
        return Ok(String::new());
    }

    writeln!(prompt_out, "{PROMPT_INSTRUCTION}").map_err(|e| NoteError::io(STDIN_LABEL, e))?;
    prompt_out
        .flush()
        .map_err(|e| NoteError::io(STDIN_LABEL, e))?;

    let reader = source.reader();
    let mut body = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| NoteError::io(STDIN_LABEL, e))?;
        if read == 0 {
            break;
        }

        let content = line.trim_end_matches(['\n', '\r']);
        if INPUT_TERMINATORS.contains(&content) {
            break;
        }
        body.push_str(&line);
    }

    Ok(body)
}

/// Splits a `key:value` argument on its first colon.
pub fn parse_keyvalue(arg: &str) -> Result<(String, String)> {
    let Some((key, value)) = arg.split_once(':') else {
        return Err(NoteError::format(format!(
            "expected key:value, got '{arg}'"
        )));
    };

    if key.is_empty() {
        return Err(NoteError::format(format!("missing key in '{arg}'")));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Parses every `--keyvalue` argument, failing on the first malformed one.
pub fn parse_keyvalues(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter().map(|arg| parse_keyvalue(arg)).collect()
}

/// Flattens multi-value arguments into whitespace-separated tokens, keeping
/// order and duplicates.
pub fn split_tokens(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect()
}
