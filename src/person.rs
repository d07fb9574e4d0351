// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

//! The `Person` entity and its greeting.

use serde::Serialize;
use std::fmt;

/// Name of the person the program greets when nothing is configured.
pub const DEFAULT_NAME: &str = "Alice";

/// Age of the default person.
pub const DEFAULT_AGE: i32 = 30;

/// A named person with an age.
///
/// Both fields are fixed at construction. No validation is applied: an empty
/// name or a negative age is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Creates a new person.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Returns `Hello, <name>!`. The age plays no part in it.
    #[must_use]
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_AGE)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello, {}!", self.name)
    }
}
