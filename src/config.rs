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

//! Layered configuration for the person being greeted.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::person::{DEFAULT_AGE, DEFAULT_NAME, Person};

/// Prefix for environment overrides (`GREET_NAME`, `GREET_AGE`).
pub const ENV_PREFIX: &str = "GREET";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or merged.
    #[error("failed to build configuration")]
    Build(#[source] config::ConfigError),

    /// The merged sources did not match the expected shape.
    #[error("failed to deserialize configuration")]
    Deserialize(#[source] config::ConfigError),
}

/// Resolved settings for the person being greeted.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the person to greet (default: "Alice")
    #[serde(default = "default_name", deserialize_with = "string_only")]
    pub name: String,

    /// Age of the person (default: 30)
    #[serde(default = "default_age")]
    pub age: i32,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

const fn default_age() -> i32 {
    DEFAULT_AGE
}

/// Accept only string values, so `name = 7` in a file is an error rather
/// than the name "7".
fn string_only<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringVisitor;

    impl Visitor<'_> for StringVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }
    }

    deserializer.deserialize_any(StringVisitor)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: default_age(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if a value
    /// has the wrong type (e.g. a non-numeric `GREET_AGE`).
    pub fn load(explicit_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        // 1. Start with defaults
        builder = builder
            .set_default("name", DEFAULT_NAME)
            .and_then(|b| b.set_default("age", i64::from(DEFAULT_AGE)))
            .map_err(ConfigError::Build)?;

        // 2. Load from explicit file if provided
        if let Some(path) = explicit_file {
            tracing::debug!("Loading config file {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        // 3. Load from environment variables (GREET_NAME, GREET_AGE).
        // Values stay strings; `age` is parsed during deserialization.
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));

        let config = builder.build().map_err(ConfigError::Build)?;

        config.try_deserialize().map_err(ConfigError::Deserialize)
    }

    /// The person this configuration describes.
    #[must_use]
    pub fn person(&self) -> Person {
        Person::new(self.name.clone(), self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_person() {
        let config = Config::default();
        assert_eq!(config.person(), Person::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"Bob\"").unwrap();

        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.name, "Bob");
        assert_eq!(config.age, DEFAULT_AGE);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Build(_))));
    }

    #[test]
    fn test_numeric_looking_name_is_kept_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"007\"").unwrap();

        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.name, "007");
    }

    #[test]
    fn test_non_string_name_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = 7").unwrap();

        let result = Config::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "age = \"thirty\"").unwrap();

        let result = Config::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }
}
