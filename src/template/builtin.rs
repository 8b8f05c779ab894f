//! # Built-in Templates
//!
//! The layouts shipped with notetaker. Their text lives in `templates/*.hbs`
//! and is embedded at compile time.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

/// A template bundled with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTemplate {
    /// Markdown with a metadata list and a fenced body block
    Default,
    /// Markdown title and comment only
    Comment,
    /// A single YAML list item
    Yaml,
    /// Plain text with `#`-prefixed metadata lines
    Text,
    /// Markdown todo with a due date
    Todo,
    /// One-line todo list entry
    TodoOneliner,
}

impl BuiltinTemplate {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Comment,
        Self::Yaml,
        Self::Text,
        Self::Todo,
        Self::TodoOneliner,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Comment => "comment",
            Self::Yaml => "yaml",
            Self::Text => "text",
            Self::Todo => "todo",
            Self::TodoOneliner => "todo-oneliner",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Default => "markdown note with metadata list and fenced body",
            Self::Comment => "markdown title and comment only",
            Self::Yaml => "YAML list item",
            Self::Text => "plain text note",
            Self::Todo => "markdown todo with a due date (needs --keyvalue due:...)",
            Self::TodoOneliner => "single-line todo entry",
        }
    }

    pub const fn source(self) -> &'static str {
        match self {
            Self::Default => include_str!("../../templates/default.hbs"),
            Self::Comment => include_str!("../../templates/comment.hbs"),
            Self::Yaml => include_str!("../../templates/yaml.hbs"),
            Self::Text => include_str!("../../templates/text.hbs"),
            Self::Todo => include_str!("../../templates/todo.hbs"),
            Self::TodoOneliner => include_str!("../../templates/todo-oneliner.hbs"),
        }
    }

    /// Looks up a template by name. `oneliner` is accepted for `todo-oneliner`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "oneliner" | "todo_oneliner" => Some(Self::TodoOneliner),
            _ => Self::ALL.into_iter().find(|t| t.name() == name),
        }
    }
}

impl fmt::Display for BuiltinTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
