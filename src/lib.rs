// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

//! Greet is a tiny fixture program: it builds a `Person` and prints a greeting.
//!
//! It exists as a small, predictable target for editor and language-server tooling.

/// Command-line output formatting.
pub mod cli;
/// Configuration handling for the greeted person.
pub mod config;
/// The `Person` entity.
pub mod person;

pub use person::Person;
