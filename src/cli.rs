/*
 * Copyright (C) 2026 Mark Wells Dev
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! CLI output formatting.

use clap::ValueEnum;
use serde::Serialize;

use crate::person::Person;

/// How the greeting is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The greeting text on its own.
    #[default]
    Plain,
    /// A single-line JSON object with the person and the greeting.
    Json,
}

#[derive(Serialize)]
struct GreetingRecord<'a> {
    #[serde(flatten)]
    person: &'a Person,
    greeting: String,
}

/// Render a person's greeting in the requested format, without a trailing newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(person: &Person, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(person.greet()),
        OutputFormat::Json => serde_json::to_string(&GreetingRecord {
            person,
            greeting: person.greet(),
        }),
    }
}
