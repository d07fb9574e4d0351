// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

//! Greet CLI.
//!
//! With no arguments this prints `Hello, Alice!` and exits.

#![allow(clippy::print_stdout, reason = "CLI tool needs to output to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use greet::Person;
use greet::cli::{self, OutputFormat};
use greet::config::Config;

/// Command-line arguments for greet.
#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(about = "Print a greeting for a person")]
#[command(version)]
struct Args {
    /// Name of the person to greet. Overrides config and environment.
    #[arg(long)]
    name: Option<String>,

    /// Age of the person. Overrides config and environment.
    #[arg(long, allow_negative_numbers = true)]
    age: Option<i32>,

    /// Path to configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the greet binary.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or output cannot be rendered.
fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG replaces the default filter; --verbose adds debug for greet on top.
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("greet=warn"));
    if args.verbose {
        filter = filter.add_directive("greet=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let person = resolve_person(&args)?;
    info!("Greeting {} (age {})", person.name(), person.age());

    let output = cli::render(&person, args.format).context("Failed to render greeting")?;
    println!("{output}");

    Ok(())
}

/// Build the person from config, environment and CLI overrides.
fn resolve_person(args: &Args) -> Result<Person> {
    let mut config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    debug!("Loaded config: {config:?}");

    if let Some(name) = &args.name {
        config.name.clone_from(name);
    }
    if let Some(age) = args.age {
        config.age = age;
    }

    Ok(config.person())
}
