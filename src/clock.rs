//! # Clock
//!
//! Source of the "current time" stamped on each note.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local,
};

use crate::error::{NoteError, Result};

/// Provides the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Formats the clock's current time with a `strftime` pattern.
///
/// An unknown specifier in `format` is a format error rather than a panic.
pub fn timestamp(clock: &dyn Clock, format: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(NoteError::format(format!("invalid date format '{format}'")));
    }

    Ok(clock.now().format_with_items(items.into_iter()).to_string())
}
