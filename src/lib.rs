//! # notetaker
//!
//! Appends timestamped, templated notes to a file or stdout.
//!
//! A note is assembled from command-line metadata (header, comment, tags,
//! URLs, key-value pairs, date) and a body read from stdin, an interactive
//! prompt, or the user's editor, then rendered with a template and written
//! in append mode.
//!
//! ## Features
//!
//! - **Templates**: markdown, YAML, plain text, and todo layouts, plus user
//!   templates in Handlebars syntax
//! - **Plain files**: notes land in a flat, human-readable log
//! - **Layered config**: global and per-project settings
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod input;
pub mod note;
pub mod template;
pub mod writer;

pub use config::{set_home_override, Config};
pub use error::NoteError;
pub use note::{NoteBuilder, NoteRequest};
pub use template::TemplateSource;
pub use writer::{WriteMode, WriteOutcome};
