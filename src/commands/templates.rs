//! # Templates Command
//!
//! Lists the available templates or prints one of them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    constants::TEMPLATE_FILE_EXTENSION,
    template::{BuiltinTemplate, TemplateSource},
};

/// Arguments for the templates command
#[derive(Debug, Clone, Default)]
pub struct TemplatesArgs {
    /// Print the source of this template instead of listing
    pub show: Option<String>,
}

/// Executes the templates command.
pub fn execute(args: &TemplatesArgs) -> Result<()> {
    let config = Config::load()?;
    let mut stdout = io::stdout().lock();

    match &args.show {
        Some(name) => show(name, config.template_dir(), &mut stdout),
        None => list(config.template_dir(), &mut stdout),
    }
}

/// Writes the source of template `name`, resolved the same way `create` does.
pub fn show(name: &str, template_dir: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let layout = TemplateSource::Named(name.to_string()).load(template_dir)?;
    out.write_all(layout.source.as_bytes())?;
    Ok(())
}

/// Writes one line per template: user templates first, then built-ins.
pub fn list(template_dir: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let user = user_templates(template_dir);

    for name in &user {
        writeln!(out, "{:<15} {}", name, "(user template)".dimmed())?;
    }

    for template in BuiltinTemplate::ALL {
        if user.iter().any(|name| name == template.name()) {
            continue;
        }
        writeln!(out, "{:<15} {}", template.name(), template.description())?;
    }

    Ok(())
}

/// Names of `*.hbs` files in the template directory, sorted.
fn user_templates(template_dir: Option<&Path>) -> Vec<String> {
    let Some(dir) = template_dir else {
        return Vec::new();
    };
    let Ok(entries) = fs::read_dir(dir) else {
        log::warn!("cannot read template directory {}", dir.display());
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == TEMPLATE_FILE_EXTENSION)
        })
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
        .collect();
    names.sort();
    names
}
