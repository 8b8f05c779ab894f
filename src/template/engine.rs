//! # Template Engine
//!
//! Turns a layout plus a field mapping into text. The shipped engine is
//! Handlebars in strict mode with HTML escaping off, so an unknown
//! placeholder is an error instead of an empty string.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::{Map, Value};

use crate::{
    constants::SEPARATOR_WIDTH,
    error::{NoteError, Result},
    note::NoteRequest,
};

/// Renders a layout with a field mapping.
pub trait TemplateEngine {
    /// `name` identifies the layout in error messages.
    fn render(&self, name: &str, layout: &str, fields: &Value) -> Result<String>;
}

/// Handlebars-backed engine with the `yaml` and `indent` helpers registered.
pub struct HandlebarsEngine {
    hbs: Handlebars<'static>,
}

handlebars_helper!(yaml: |value: str| yaml_scalar(value));
handlebars_helper!(indent: |text: str, width: u64| indent_lines(text, width));

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        hbs.register_helper("yaml", Box::new(yaml));
        hbs.register_helper("indent", Box::new(indent));
        Self { hbs }
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, name: &str, layout: &str, fields: &Value) -> Result<String> {
        log::debug!("rendering template '{name}'");
        self.hbs
            .render_template(layout, fields)
            .map_err(|e| NoteError::template(format!("failed to render template '{name}': {e}")))
    }
}

/// Builds the field mapping a template sees for `note`.
///
/// Absent optional values are present as `null` (or empty lists), so
/// `{{#if}}` sections vanish instead of tripping strict mode.
pub fn note_fields(note: &NoteRequest) -> Value {
    let keyvalue: Map<String, Value> = note
        .keyvalue()
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let mut fields = Map::new();
    fields.insert("header".into(), note.header().into());
    fields.insert("date".into(), note.date().into());
    fields.insert("title".into(), note.title().into());
    fields.insert("comment".into(), note.comment().into());
    fields.insert("tags".into(), note.display_tags().into());
    fields.insert("urls".into(), note.urls().to_vec().into());
    fields.insert("keyvalue".into(), Value::Object(keyvalue));
    fields.insert("body".into(), note.body().into());
    fields.insert("content_type".into(), note.content_type().into());
    fields.insert("separator".into(), "-".repeat(SEPARATOR_WIDTH).into());
    Value::Object(fields)
}

/// Renders a string as a YAML scalar, quoting only when plain style would
/// change its meaning.
fn yaml_scalar(value: &str) -> String {
    if !value.contains('\n') {
        if let Ok(rendered) = serde_yml::to_string(&value) {
            let rendered = rendered.trim_end_matches('\n');
            if !rendered.contains('\n') {
                return rendered.to_string();
            }
        }
    }
    // Double-quoted JSON strings are valid YAML flow scalars.
    serde_json::to_string(value).unwrap_or_default()
}

/// Indents every non-empty line of `text` by `width` spaces.
fn indent_lines(text: &str, width: u64) -> String {
    let pad = " ".repeat(usize::try_from(width).unwrap_or(0));
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
