//! # Setup Command
//!
//! One-time setup for notetaker: creates the global config and installs shell
//! completions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::Command;
use clap_complete::Shell;
use owo_colors::OwoColorize;

use super::completions;
use crate::config::GlobalConfig;

/// Executes the setup command.
///
/// The `cmd` parameter should be a clone of the CLI command for generating completions.
/// The `shell_override` parameter names the shell explicitly and skips detection.
pub fn execute(cmd: &mut Command, shell_override: Option<Shell>) -> Result<()> {
    eprintln!("{}\n", "Setting up notetaker...".bold());

    setup_global_config()?;
    setup_completions(cmd, shell_override)?;

    eprintln!("\n{} Setup complete!", "✓".green().bold());
    Ok(())
}

/// Creates the global config file if it doesn't exist
fn setup_global_config() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    Ok(())
}

/// Installs completions for the given or detected shell.
fn setup_completions(cmd: &mut Command, shell_override: Option<Shell>) -> Result<()> {
    let Some(shell) = shell_override.or_else(completions::detect_shell) else {
        eprintln!(
            "{} Could not detect your shell; skipping completions.",
            "!".yellow()
        );
        eprintln!(
            "    Run: {} > <completions-file>",
            format!("{} completions <shell>", cmd.get_name()).green()
        );
        return Ok(());
    };

    match completions::install(shell, cmd)? {
        Some(path) => eprintln!(
            "{} Installed {} completions: {}",
            "✓".green(),
            format!("{shell:?}").to_lowercase(),
            path.display()
        ),
        None => eprintln!(
            "{} No auto-load directory for {:?}; run: {}",
            "!".yellow(),
            shell,
            format!("{} completions {}", cmd.get_name(), format!("{shell:?}").to_lowercase())
                .green()
        ),
    }

    if shell == Shell::Zsh {
        eprintln!(
            "    {}",
            "Add to ~/.zshrc: fpath=(~/.zfunc $fpath) && autoload -Uz compinit && compinit"
                .dimmed()
        );
    }

    Ok(())
}
