//! # notetaker CLI
//!
//! Command-line interface for the notetaker note appender.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use notetaker::commands::{self, CreateArgs, TemplatesArgs};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/notetaker/config   Global configuration (notes file, template, editor)
  .notetaker                   Project configuration (overrides global values)

Built-in Templates:
  default        Markdown note with metadata list and fenced body
  comment        Markdown title and comment only
  yaml           YAML list item
  text           Plain text note
  todo           Markdown todo (needs --keyvalue due:<date>)
  todo-oneliner  Single-line todo entry

Getting Started:
  notes setup                                   Create the global config
  echo \"hello\" | notes create -f notes.md       Append a note
  notes create --header demo --dryrun           Preview a note

Learn more:
  notes <COMMAND> --help        Show detailed help for a command";

#[derive(Parser)]
#[command(name = "notes")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Append timestamped, templated notes to a file")]
#[command(
    long_about = "notes appends timestamped notes to a plain file. Each note is rendered from a \
template (markdown, YAML, plain text, or todo) filled with the metadata you pass on the command \
line and a body read from stdin, an interactive prompt, or your editor."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a note and append it to a file
    #[command(
        long_about = "Create a note and append it to a file.\n\n\
The body is read from stdin when it is piped. On a terminal you are prompted to type \
it; finish with CTRL-D or a line containing only EOF. Use --noprompt to skip the body \
or --edit to write it in your editor.\n\n\
The note goes to --file, then to notes_file from the configuration. Without either, \
or with --dryrun, it is printed to stdout instead.",
        after_help = "Examples:\n  \
notes create --header demo --noprompt\n  \
echo \"Get all the things done!\" | notes create --template todo --keyvalue due:2018-08-01\n  \
notes create --template todo-oneliner --comment Hi --tags a b --autohashtag --keyvalue due:1\n  \
notes create -f ~/notes.md --tags rust cli --urls https://docs.rs --edit"
    )]
    Create {
        /// File to append the note to
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Template file to render instead of a named template
        #[arg(short = 't', long = "templatefile", visible_alias = "template-file")]
        template_file: Option<PathBuf>,

        /// Name of the template to use
        #[arg(long)]
        template: Option<String>,

        /// Note header (title line)
        #[arg(long)]
        header: Option<String>,

        /// Short comment
        #[arg(long)]
        comment: Option<String>,

        /// Tags (one or more, can be repeated)
        #[arg(long, num_args = 1..)]
        tags: Vec<String>,

        /// URLs (one or more, can be repeated)
        #[arg(long, num_args = 1..)]
        urls: Vec<String>,

        /// key:value pairs (one or more, can be repeated)
        #[arg(long, num_args = 1.., value_name = "KEY:VALUE")]
        keyvalue: Vec<String>,

        /// Timestamp to use instead of the current time
        #[arg(long)]
        date: Option<String>,

        /// Language of the fenced body block (markdown templates)
        #[arg(long)]
        content_type: Option<String>,

        /// Render tags as #tag tokens
        #[arg(long)]
        autohashtag: bool,

        /// Do not prompt for a body on a terminal
        #[arg(long)]
        noprompt: bool,

        /// Print the note instead of writing it
        #[arg(long)]
        dryrun: bool,

        /// Write the note at the top of the file
        #[arg(long)]
        prepend: bool,

        /// Write the body in your editor
        #[arg(short, long, conflicts_with = "noprompt")]
        edit: bool,
    },

    /// List templates or show one
    #[command(after_help = "Examples:\n  \
notes templates\n  \
notes templates --show todo > ~/.config/notetaker/templates/todo.hbs")]
    Templates {
        /// Print the source of this template
        #[arg(long, value_name = "NAME")]
        show: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Create the global config and install shell completions
    Setup {
        /// Shell to install completions for (detected from $SHELL if omitted)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `-v`.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create {
            file,
            template_file,
            template,
            header,
            comment,
            tags,
            urls,
            keyvalue,
            date,
            content_type,
            autohashtag,
            noprompt,
            dryrun,
            prepend,
            edit,
        } => commands::create(&CreateArgs {
            file,
            template_file,
            template,
            header,
            comment,
            tags,
            urls,
            keyvalue,
            date,
            content_type,
            autohashtag,
            noprompt,
            dryrun,
            prepend,
            edit,
        }),

        Commands::Templates { show } => commands::templates(&TemplatesArgs { show }),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),

        Commands::Setup { shell } => commands::setup(&mut Cli::command(), shell),
    }
}
