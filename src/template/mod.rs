//! # Templates
//!
//! Resolves which layout a note uses and renders the note with it.
//!
//! A named template is looked up in this order:
//! 1. `<template_dir>/<name>.hbs`, when a template directory is configured
//! 2. The built-in template of that name
//!
//! An explicit template path bypasses the lookup.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod builtin;
pub mod engine;

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

pub use self::{
    builtin::BuiltinTemplate,
    engine::{note_fields, HandlebarsEngine, TemplateEngine},
};
use crate::{
    constants::{DEFAULT_TEMPLATE, TEMPLATE_FILE_EXTENSION},
    error::{NoteError, Result},
    note::NoteRequest,
};

/// Where a note's layout comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A user template in the template directory or a built-in
    Named(String),
    /// A template file given on the command line
    File(PathBuf),
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self::Named(DEFAULT_TEMPLATE.to_string())
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A resolved layout ready for rendering.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: String,
    pub source: String,
}

impl TemplateSource {
    /// Reads the layout text, consulting `template_dir` for named templates.
    pub fn load(&self, template_dir: Option<&Path>) -> Result<Layout> {
        match self {
            Self::File(path) => {
                log::debug!("reading template file {}", path.display());
                let source = fs::read_to_string(path).map_err(|e| {
                    NoteError::template(format!(
                        "cannot read template file {}: {e}",
                        path.display()
                    ))
                })?;
                Ok(Layout {
                    name: path.display().to_string(),
                    source,
                })
            }
            Self::Named(name) => {
                if let Some(dir) = template_dir {
                    let path = dir.join(format!("{name}.{TEMPLATE_FILE_EXTENSION}"));
                    if path.is_file() {
                        log::debug!("using user template {}", path.display());
                        return Self::File(path).load(None).map(|layout| Layout {
                            name: name.clone(),
                            ..layout
                        });
                    }
                }

                let builtin = BuiltinTemplate::from_name(name).ok_or_else(|| {
                    let available: Vec<_> =
                        BuiltinTemplate::ALL.iter().map(|t| t.name()).collect();
                    NoteError::template(format!(
                        "unknown template '{name}' (available: {})",
                        available.join(", ")
                    ))
                })?;
                log::debug!("using built-in template '{builtin}'");
                Ok(Layout {
                    name: builtin.name().to_string(),
                    source: builtin.source().to_string(),
                })
            }
        }
    }
}

/// Renders `note` with its template.
pub fn render(
    note: &NoteRequest,
    template_dir: Option<&Path>,
    engine: &dyn TemplateEngine,
) -> Result<String> {
    let layout = note.template().load(template_dir)?;
    render_layout(&layout, note, engine)
}

/// Renders `note` with an already loaded layout.
pub fn render_layout(
    layout: &Layout,
    note: &NoteRequest,
    engine: &dyn TemplateEngine,
) -> Result<String> {
    let fields = note_fields(note);
    log::debug!("note fields: {fields}");
    engine.render(&layout.name, &layout.source, &fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;

    fn note(builder: crate::note::NoteBuilder) -> NoteRequest {
        builder
            .date(Some("Wed Aug 01 09:30:05 2018".to_string()))
            .build_now(&SystemClock)
            .unwrap()
    }

    fn render_builtin(builder: crate::note::NoteBuilder, name: &str) -> String {
        let note = note(builder.template(TemplateSource::Named(name.to_string())));
        render(&note, None, &HandlebarsEngine::new()).unwrap()
    }

    fn sep() -> String {
        "-".repeat(80)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_default_minimal() {
        let out = render_builtin(
            NoteRequest::builder().header(Some("demo".to_string())),
            "default",
        );
        assert_eq!(
            out,
            format!(
                "# demo / Wed Aug 01 09:30:05 2018\n{}\n\n```text\n\n```\n\n",
                sep()
            )
        );
    }

    #[test]
    fn test_default_body_fenced_verbatim() {
        let out = render_builtin(NoteRequest::builder().body("hello"), "default");
        let fenced: Vec<&str> = out
            .lines()
            .skip_while(|l| !l.starts_with("```"))
            .skip(1)
            .take_while(|l| !l.starts_with("```"))
            .collect();
        assert_eq!(fenced.join("\n"), "hello");
    }

    #[test]
    fn test_default_all_sections() {
        let builder = NoteRequest::builder()
            .comment(Some("Hi".to_string()))
            .tags(strings(&["a", "b"]))
            .urls(strings(&["https://one.test", "https://two.test"]))
            .keyvalue(vec![("due".to_string(), "2018-08-01".to_string())])
            .content_type("rust")
            .body("fn main() {}");
        let out = render_builtin(builder, "default");
        assert_eq!(
            out,
            format!(
                "# Wed Aug 01 09:30:05 2018\n{}\n\
                 * `comment:` Hi\n\
                 * `tags:` a b\n\
                 * `urls:`\n    \
                 * [https://one.test](https://one.test)\n    \
                 * [https://two.test](https://two.test)\n\
                 * `keyvalue:` due:2018-08-01\n\
                 \n```rust\nfn main() {{}}\n```\n\n",
                sep()
            )
        );
    }

    #[test]
    fn test_empty_lists_omit_sections() {
        let out = render_builtin(NoteRequest::builder().body("x"), "default");
        assert!(!out.contains("`tags:`"));
        assert!(!out.contains("`urls:`"));
        assert!(!out.contains("`comment:`"));
        assert!(!out.contains("`keyvalue:`"));

        let out = render_builtin(NoteRequest::builder().body("x"), "text");
        assert!(!out.contains("# Tags:"));
        assert!(!out.contains("# URLs:"));
    }

    #[test]
    fn test_tags_and_urls_once_in_order() {
        let tags = strings(&["zeta", "alpha", "mid"]);
        let urls = strings(&["https://b.test", "https://a.test"]);
        for name in ["default", "text", "yaml"] {
            let out = render_builtin(
                NoteRequest::builder().tags(tags.clone()).urls(urls.clone()),
                name,
            );
            let positions: Vec<usize> = tags
                .iter()
                .map(|t| {
                    assert_eq!(out.matches(t.as_str()).count(), 1, "{name}: {t}");
                    out.find(t.as_str()).unwrap()
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{name}");
            let b = out.find("https://b.test").unwrap();
            let a = out.find("https://a.test").unwrap();
            assert!(b < a, "{name}");
        }
    }

    #[test]
    fn test_todo_template() {
        let out = render_builtin(
            NoteRequest::builder()
                .keyvalue(vec![("due".to_string(), "2018-08-01".to_string())])
                .body("Get all the things done!"),
            "todo",
        );
        assert_eq!(
            out,
            format!(
                "# Wed Aug 01 09:30:05 2018\n## Due: 2018-08-01\n{}\nGet all the things done!\n\n",
                sep()
            )
        );
    }

    #[test]
    fn test_todo_without_due_is_template_error() {
        let note = note(NoteRequest::builder().template(TemplateSource::Named("todo".to_string())));
        let err = render(&note, None, &HandlebarsEngine::new()).unwrap_err();
        assert!(matches!(err, NoteError::Template { .. }));
    }

    #[test]
    fn test_oneliner_template() {
        let out = render_builtin(
            NoteRequest::builder()
                .comment(Some("Hi".to_string()))
                .tags(strings(&["a", "b"]))
                .autohashtag(true)
                .keyvalue(vec![("due".to_string(), "1".to_string())]),
            "todo-oneliner",
        );
        assert_eq!(
            out,
            "- created:Wed Aug 01 09:30:05 2018 comment:Hi  #a #b due:1\n"
        );
    }

    #[test]
    fn test_oneliner_without_optional_fields() {
        let out = render_builtin(NoteRequest::builder(), "todo-oneliner");
        assert_eq!(out, "- created:Wed Aug 01 09:30:05 2018\n");
    }

    #[test]
    fn test_keyvalue_rendered_verbatim() {
        let pairs = vec![
            ("due".to_string(), "2018-08-01".to_string()),
            ("at".to_string(), "12:30".to_string()),
        ];
        for name in ["default", "text", "todo-oneliner"] {
            let out = render_builtin(NoteRequest::builder().keyvalue(pairs.clone()), name);
            assert!(out.contains("due:2018-08-01"), "{name}");
            assert!(out.contains("at:12:30"), "{name}");
            assert!(out.find("due:").unwrap() < out.find("at:").unwrap(), "{name}");
        }
    }

    #[test]
    fn test_text_template() {
        let out = render_builtin(
            NoteRequest::builder()
                .header(Some("log".to_string()))
                .tags(strings(&["a", "b"]))
                .urls(strings(&["https://x.test"]))
                .body("line 1\nline 2"),
            "text",
        );
        assert_eq!(
            out,
            format!(
                "# log / Wed Aug 01 09:30:05 2018\n# Tags: a b\n# URLs: https://x.test\n{}\nline 1\nline 2\n\n",
                sep()
            )
        );
    }

    #[test]
    fn test_comment_template() {
        let out = render_builtin(
            NoteRequest::builder()
                .comment(Some("just this".to_string()))
                .body("ignored body"),
            "comment",
        );
        assert_eq!(
            out,
            format!(
                "# Wed Aug 01 09:30:05 2018\n{}\n* `comment:` just this\n\n",
                sep()
            )
        );
    }

    #[test]
    fn test_yaml_template_parses() {
        let out = render_builtin(
            NoteRequest::builder()
                .header(Some("demo".to_string()))
                .comment(Some("note: with colon".to_string()))
                .tags(strings(&["a", "b"]))
                .urls(strings(&["https://x.test"]))
                .keyvalue(vec![
                    ("due".to_string(), "2018-08-01".to_string()),
                    ("#prio".to_string(), "1".to_string()),
                    ("[x".to_string(), "2".to_string()),
                ])
                .body("first\n\nthird"),
            "yaml",
        );

        let parsed: serde_yml::Value = serde_yml::from_str(&out).unwrap();
        let item = &parsed[0];
        assert_eq!(
            item["header"].as_str(),
            Some("demo / Wed Aug 01 09:30:05 2018")
        );
        assert_eq!(item["comment"].as_str(), Some("note: with colon"));
        assert_eq!(item["tags"][0].as_str(), Some("a"));
        assert_eq!(item["tags"][1].as_str(), Some("b"));
        assert_eq!(item["urls"][0].as_str(), Some("https://x.test"));
        assert_eq!(item["keyvalue"]["due"].as_str(), Some("2018-08-01"));
        assert_eq!(item["keyvalue"]["#prio"].as_str(), Some("1"));
        assert_eq!(item["keyvalue"]["[x"].as_str(), Some("2"));
        assert_eq!(item["content"].as_str(), Some("first\n\nthird\n"));
    }

    #[test]
    fn test_yaml_content_with_indented_first_line() {
        let out = render_builtin(NoteRequest::builder().body("    indented\nflush"), "yaml");

        let parsed: serde_yml::Value = serde_yml::from_str(&out).unwrap();
        assert_eq!(parsed[0]["content"].as_str(), Some("    indented\nflush\n"));
    }

    #[test]
    fn test_yaml_template_omits_empty() {
        let out = render_builtin(NoteRequest::builder(), "yaml");
        assert!(!out.contains("tags:"));
        assert!(!out.contains("urls:"));
        assert!(!out.contains("content:"));
    }

    #[test]
    fn test_unknown_template_name() {
        let err = TemplateSource::Named("nope".to_string())
            .load(None)
            .unwrap_err();
        assert!(matches!(err, NoteError::Template { .. }));
        assert!(err.to_string().contains("todo-oneliner"));
    }

    #[test]
    fn test_missing_template_file() {
        let err = TemplateSource::File(PathBuf::from("/definitely/not/here.hbs"))
            .load(None)
            .unwrap_err();
        assert!(matches!(err, NoteError::Template { .. }));
    }

    #[test]
    fn test_template_dir_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.hbs"), "custom {{date}}\n").unwrap();

        let note = note(NoteRequest::builder());
        let out = render(&note, Some(dir.path()), &HandlebarsEngine::new()).unwrap();
        assert_eq!(out, "custom Wed Aug 01 09:30:05 2018\n");

        // Names not in the directory still fall back to built-ins.
        let layout = TemplateSource::Named("todo".to_string())
            .load(Some(dir.path()))
            .unwrap();
        assert_eq!(layout.source, BuiltinTemplate::Todo.source());
    }
}
