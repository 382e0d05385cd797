//! CLI interface for the career-readiness engine

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-readiness")]
#[command(about = "Skill matching, career roadmaps, and assessment compliance for campus placement")]
#[command(long_about = "Analyze resumes against an industry benchmark, rank job postings by skill match, generate week-by-week learning roadmaps, and check assessment compliance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume: extract skills and generate a career roadmap
    Analyze {
        /// Path to resume text file (TXT, MD)
        resume: PathBuf,

        /// Benchmark skills as a comma-separated list (defaults to the built-in benchmark)
        #[arg(short, long)]
        benchmark: Option<String>,

        /// Job catalog JSON to rank against the extracted skills
        #[arg(short, long)]
        jobs: Option<PathBuf>,

        /// Persist the result into the profile store under this key
        #[arg(long)]
        profile: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show tips and resources for every roadmap step
        #[arg(short, long)]
        detailed: bool,
    },

    /// Rank a job catalog against a skill list
    Match {
        /// Candidate skills as a comma-separated list
        #[arg(short, long)]
        skills: String,

        /// Path to job catalog JSON file
        #[arg(short, long)]
        jobs: PathBuf,

        /// Only show the top N matches
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Generate a gap analysis and roadmap from a skill list (no resume file)
    Roadmap {
        /// Candidate skills as a comma-separated list
        #[arg(short, long)]
        skills: String,

        /// Benchmark skills as a comma-separated list
        #[arg(short, long)]
        benchmark: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show tips and resources for every roadmap step
        #[arg(short, long)]
        detailed: bool,
    },

    /// Evaluate assessment compliance for given facts
    Compliance {
        /// Last assessment date (ISO-8601, e.g. 2026-08-15T10:00:00Z)
        #[arg(long)]
        last_date: Option<String>,

        /// Last assessment score (0-100)
        #[arg(long)]
        score: Option<String>,

        /// Evaluate as of this instant instead of the current time
        #[arg(long)]
        now: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Split a comma-separated skill list, dropping blanks.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
