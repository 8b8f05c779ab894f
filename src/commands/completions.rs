//! # Completions Command
//!
//! Prints or installs shell completion scripts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::{generate, Shell};

use crate::{
    config::global::home_dir,
    constants::{BASH_COMPLETIONS_DIR, FISH_COMPLETIONS_DIR, ZSH_COMPLETIONS_DIR},
};

/// Writes the completion script for `shell` to stdout.
/// The `cmd` parameter should be the CLI command (from `Cli::command()`).
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_script(shell, cmd, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Writes the completion script for `shell` to `out`.
pub fn write_script(shell: Shell, cmd: &mut Command, out: &mut dyn Write) -> Result<()> {
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, cmd, name, &mut buf);
    out.write_all(&buf)?;
    Ok(())
}

/// Detects the user's shell from `$SHELL`.
pub fn detect_shell() -> Option<Shell> {
    let shell_path = env::var("SHELL").ok()?;
    let name = shell_path.rsplit('/').next().unwrap_or(&shell_path);
    // Handle login shell prefix (e.g., "-zsh")
    match name.strip_prefix('-').unwrap_or(name) {
        "zsh" => Some(Shell::Zsh),
        "bash" => Some(Shell::Bash),
        "fish" => Some(Shell::Fish),
        _ => None,
    }
}

/// Where an auto-loaded completion file for `shell` lives, if the shell has one.
pub fn install_path(shell: Shell, bin_name: &str) -> Option<PathBuf> {
    let home = home_dir()?;

    match shell {
        Shell::Zsh => Some(home.join(ZSH_COMPLETIONS_DIR).join(format!("_{bin_name}"))),
        Shell::Bash => Some(home.join(BASH_COMPLETIONS_DIR).join(bin_name)),
        Shell::Fish => Some(home.join(FISH_COMPLETIONS_DIR).join(format!("{bin_name}.fish"))),
        _ => None,
    }
}

/// Installs the completion script for `shell`. Returns the written path, or
/// `None` when the shell has no auto-load directory.
pub fn install(shell: Shell, cmd: &mut Command) -> Result<Option<PathBuf>> {
    let Some(path) = install_path(shell, cmd.get_name()) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut script = Vec::new();
    write_script(shell, cmd, &mut script)?;
    fs::write(&path, script)
        .with_context(|| format!("Failed to write completions: {}", path.display()))?;

    Ok(Some(path))
}
