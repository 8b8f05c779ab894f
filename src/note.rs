//! # Note Request
//!
//! The in-memory record of everything collected for one note before it is
//! rendered. Built once per invocation through [`NoteBuilder`] and read-only
//! afterwards.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    clock::{self, Clock},
    constants::{DEFAULT_CONTENT_TYPE, DEFAULT_DATE_FORMAT},
    error::Result,
    template::TemplateSource,
};

/// All fields of a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRequest {
    header: Option<String>,
    date: String,
    comment: Option<String>,
    tags: Vec<String>,
    urls: Vec<String>,
    keyvalue: Vec<(String, String)>,
    body: String,
    autohashtag: bool,
    append_date_to_header: bool,
    content_type: String,
    template: TemplateSource,
}

impl NoteRequest {
    pub fn builder() -> NoteBuilder {
        NoteBuilder::default()
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn keyvalue(&self) -> &[(String, String)] {
        &self.keyvalue
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub const fn autohashtag(&self) -> bool {
        self.autohashtag
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub const fn template(&self) -> &TemplateSource {
        &self.template
    }

    /// Title line text: `header / date`, the bare header, or just the date.
    pub fn title(&self) -> String {
        match &self.header {
            Some(header) if self.append_date_to_header => format!("{header} / {}", self.date),
            Some(header) => header.clone(),
            None => self.date.clone(),
        }
    }

    /// Tags as they should be displayed, with a `#` prefix in autohashtag mode.
    pub fn display_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| {
                if self.autohashtag && !tag.starts_with('#') {
                    format!("#{tag}")
                } else {
                    tag.clone()
                }
            })
            .collect()
    }
}

/// Builder for [`NoteRequest`].
#[derive(Debug, Clone)]
pub struct NoteBuilder {
    header: Option<String>,
    date: Option<String>,
    comment: Option<String>,
    tags: Vec<String>,
    urls: Vec<String>,
    keyvalue: Vec<(String, String)>,
    body: String,
    autohashtag: bool,
    append_date_to_header: bool,
    content_type: String,
    template: TemplateSource,
}

impl Default for NoteBuilder {
    fn default() -> Self {
        Self {
            header: None,
            date: None,
            comment: None,
            tags: Vec::new(),
            urls: Vec::new(),
            keyvalue: Vec::new(),
            body: String::new(),
            autohashtag: false,
            append_date_to_header: true,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            template: TemplateSource::default(),
        }
    }
}

/// Empty strings count as "not given".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl NoteBuilder {
    pub fn header(mut self, header: Option<String>) -> Self {
        self.header = non_empty(header);
        self
    }

    /// Overrides the timestamp; the string is used verbatim.
    pub fn date(mut self, date: Option<String>) -> Self {
        self.date = non_empty(date);
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = non_empty(comment);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }

    pub fn keyvalue(mut self, pairs: Vec<(String, String)>) -> Self {
        self.keyvalue = pairs;
        self
    }

    /// Sets the body. Trailing line terminators are dropped; the template
    /// decides what follows the body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = body.trim_end_matches(['\n', '\r']).to_string();
        self
    }

    pub const fn autohashtag(mut self, enabled: bool) -> Self {
        self.autohashtag = enabled;
        self
    }

    pub const fn append_date_to_header(mut self, enabled: bool) -> Self {
        self.append_date_to_header = enabled;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn template(mut self, template: TemplateSource) -> Self {
        self.template = template;
        self
    }

    /// Finishes the note, stamping it with the clock's time unless a date was given.
    pub fn build(self, clock: &dyn Clock, date_format: &str) -> Result<NoteRequest> {
        let date = match self.date {
            Some(date) => date,
            None => clock::timestamp(clock, date_format)?,
        };

        Ok(NoteRequest {
            header: self.header,
            date,
            comment: self.comment,
            tags: self.tags,
            urls: self.urls,
            keyvalue: self.keyvalue,
            body: self.body,
            autohashtag: self.autohashtag,
            append_date_to_header: self.append_date_to_header,
            content_type: self.content_type,
            template: self.template,
        })
    }

    /// Finishes the note with the default timestamp pattern.
    pub fn build_now(self, clock: &dyn Clock) -> Result<NoteRequest> {
        self.build(clock, DEFAULT_DATE_FORMAT)
    }
}
