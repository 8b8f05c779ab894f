//! # Create Command
//!
//! Collects a note, renders it with its template, and writes it out.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    clock::{Clock, SystemClock},
    config::Config,
    editor,
    input::{self, InputSource, StdinSource},
    note::NoteRequest,
    template::{self, HandlebarsEngine, TemplateEngine, TemplateSource},
    writer::{self, WriteMode, WriteOutcome},
};

/// Arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub file: Option<PathBuf>,
    pub template_file: Option<PathBuf>,
    pub template: Option<String>,
    pub header: Option<String>,
    pub comment: Option<String>,
    pub tags: Vec<String>,
    pub urls: Vec<String>,
    pub keyvalue: Vec<String>,
    pub date: Option<String>,
    pub content_type: Option<String>,
    pub autohashtag: bool,
    pub noprompt: bool,
    pub dryrun: bool,
    pub prepend: bool,
    pub edit: bool,
}

impl CreateArgs {
    /// The template source: an explicit file wins over a name, which wins over config.
    fn template_source(&self, config: &Config) -> TemplateSource {
        self.template_file.clone().map_or_else(
            || {
                TemplateSource::Named(
                    self.template
                        .clone()
                        .unwrap_or_else(|| config.template().to_string()),
                )
            },
            TemplateSource::File,
        )
    }
}

/// Everything the create command talks to besides its arguments.
pub struct Environment<'a> {
    pub config: &'a Config,
    pub input: &'a mut dyn InputSource,
    pub clock: &'a dyn Clock,
    pub engine: &'a dyn TemplateEngine,
    /// Receives the note on dry runs or when there is no target file
    pub out: &'a mut dyn Write,
    /// Receives the interactive prompt instruction
    pub prompt_out: &'a mut dyn Write,
}

/// Executes the create command against the real terminal.
pub fn execute(args: &CreateArgs) -> Result<()> {
    let config = Config::load()?;
    let mut input = StdinSource::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let outcome = run(
        args,
        Environment {
            config: &config,
            input: &mut input,
            clock: &SystemClock,
            engine: &HandlebarsEngine::new(),
            out: &mut stdout,
            prompt_out: &mut stderr,
        },
    )?;

    if let WriteOutcome::Written(path) = outcome {
        eprintln!("{} Added note to {}", "✓".green(), path.display());
    }

    Ok(())
}

/// Runs the create pipeline: fields → note → rendered text → destination.
pub fn run(args: &CreateArgs, env: Environment<'_>) -> Result<WriteOutcome> {
    let Environment {
        config,
        input,
        clock,
        engine,
        out,
        prompt_out,
    } = env;

    // Reject bad input before asking the user to type a body.
    let keyvalue = input::parse_keyvalues(&args.keyvalue)?;
    let source = args.template_source(config);
    let layout = source.load(config.template_dir())?;
    log::info!("using template {source}");

    let body = if args.edit && input.is_interactive() {
        editor::compose_body(config).context("Failed to compose note in editor")?
    } else {
        input::collect_body(input, !args.noprompt, prompt_out)?
    };

    let note = NoteRequest::builder()
        .header(args.header.clone())
        .date(args.date.clone())
        .comment(args.comment.clone())
        .tags(input::split_tokens(&args.tags))
        .urls(input::split_tokens(&args.urls))
        .keyvalue(keyvalue)
        .body(body)
        .autohashtag(args.autohashtag || config.autohashtag())
        .append_date_to_header(config.append_date_to_header())
        .content_type(
            args.content_type
                .clone()
                .unwrap_or_else(|| config.content_type().to_string()),
        )
        .template(source)
        .build(clock, config.date_format())?;
    log::debug!("note: {note:?}");

    let rendered = template::render_layout(&layout, &note, engine)?;

    let target = args.file.as_deref().or_else(|| config.notes_file());
    let mode = if args.prepend || config.prepend() {
        WriteMode::Prepend
    } else {
        WriteMode::Append
    };
    log::debug!("target: {target:?}, mode: {mode:?}, dry run: {}", args.dryrun);

    Ok(writer::write_note(
        &rendered,
        target,
        mode,
        args.dryrun,
        out,
    )?)
}
