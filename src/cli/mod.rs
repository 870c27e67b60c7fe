//! CLI command definitions and handlers

mod audit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a minimum score (0-100)
fn parse_min_score(s: &str) -> Result<f64, String> {
    let n: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=100.0).contains(&n) {
        Err("min-score must be between 0 and 100".to_string())
    } else {
        Ok(n)
    }
}

/// Archlens - Heuristic architecture and code-quality auditor
#[derive(Parser, Debug)]
#[command(name = "archlens")]
#[command(
    version,
    about = "Audit a project's structure, code quality, and architecture patterns",
    long_about = "Archlens classifies a project (web app, REST API, microservice, data \
science, library, RAG app) and scores it on four axes: directory structure, clean-code \
heuristics over sampled sources, architecture patterns, and design patterns. The weighted \
total gates CI via --min-score.",
    after_help = "\
Examples:
  archlens audit .                          Audit current directory
  archlens audit . --format json            JSON report for scripting
  archlens audit . --type api_rest          Skip classification
  archlens audit . -o report.json           Write the JSON report to a file
  archlens audit . --min-score 70           Exit code 1 below 70 (CI mode)"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a project and report scores, patterns, and recommendations
    #[command(after_help = "\
Examples:
  archlens audit .                                   Audit current directory
  archlens audit /path/to/project --type web_app     Audit as a web app
  archlens audit . --profiles profiles.toml          Use a custom profile table
  archlens audit . --format json -o report.json      Machine-readable report
  archlens audit . --min-score 60                    Fail the build below 60")]
    Audit {
        /// Path to the project root
        path: PathBuf,

        /// Project type (skips classification); unknown names audit as generic
        #[arg(long = "type", value_name = "NAME")]
        project_type: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Write the JSON report to this file (independent of --format)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// TOML profile table replacing the built-in project types
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Exit with code 1 if the weighted score falls below this value
        #[arg(long, default_value = "0", value_parser = parse_min_score)]
        min_score: f64,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Audit {
            path,
            project_type,
            format,
            output,
            profiles,
            min_score,
        } => audit::run(
            &path,
            project_type.as_deref(),
            &format,
            output.as_deref(),
            profiles.as_deref(),
            min_score,
        ),
    }
}
