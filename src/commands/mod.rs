//! # Commands
//!
//! CLI command implementations for notetaker.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod create;
pub mod setup;
pub mod templates;

pub use self::{
    completions::execute as completions,
    create::{execute as create, CreateArgs, Environment},
    setup::execute as setup,
    templates::{execute as templates, TemplatesArgs},
};
