//! Career-readiness engine: skill matching, roadmaps, and assessment compliance

mod cli;
mod compliance;
mod config;
mod engine;
mod error;
mod extract;
mod matcher;
mod output;
mod profile;
mod roadmap;
mod skills;

use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use compliance::{CompliancePolicy, PromptState};
use config::Config;
use engine::CareerEngine;
use error::{CareerReadinessError, Result};
use log::{error, info};
use matcher::{JobPosting, SkillMatcher};
use output::{OutputManager, RankedJob, ReadinessReport};
use profile::{JsonFileStore, MemoryStore, ProfileRecord, ProfileStore, ScoreValue};
use roadmap::RoadmapGenerator;
use skills::SkillSet;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            benchmark,
            jobs,
            profile,
            output,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| CareerReadinessError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = cli::parse_output_format(&output).map_err(CareerReadinessError::InvalidInput)?;

            info!("Starting resume analysis for {}", resume.display());
            println!("📄 Analyzing resume: {}", resume.display());

            let text = tokio::fs::read_to_string(&resume).await?;

            // Persist only when the caller names a profile key
            let store: Box<dyn ProfileStore> = match &profile {
                Some(_) => Box::new(JsonFileStore::new(JsonFileStore::default_path())),
                None => Box::new(MemoryStore::new()),
            };
            let mut engine = CareerEngine::new(&config, store)?;
            if let Some(benchmark) = &benchmark {
                engine = engine.with_benchmark(SkillSet::from_labels(cli::parse_skill_list(benchmark)));
            }
            let key = profile.unwrap_or_else(|| "local".to_string());

            // Stand-in for the analysis backend's round-trip latency
            println!("🔍 Extracting skills and building your roadmap...");
            tokio::time::sleep(Duration::from_millis(300)).await;

            let target_benchmark = engine.benchmark().clone();
            let resume_profile = engine.extractor().analyze(&text, &target_benchmark);
            let token = engine.begin_analysis();
            let Some(analysis) = engine.apply_analysis(&key, token, Ok(resume_profile.clone()))? else {
                return Ok(());
            };

            let record = engine.profile(&key)?.unwrap_or_default();
            let mut report = ReadinessReport::new(record.skills.clone())
                .with_resume_notes(resume_profile.summary.clone(), resume_profile.improvements.clone())
                .with_analysis(analysis);

            if let Some(jobs_path) = jobs {
                let catalog = load_catalog(&jobs_path).await?;
                let ranked = engine.rank_jobs(&key, &catalog)?;
                report = report.with_matches(
                    ranked
                        .iter()
                        .filter_map(|r| RankedJob::from_result(r, &catalog))
                        .collect(),
                );
            }

            print_report(&config, &report, format, detailed)?;
        }

        Commands::Match {
            skills,
            jobs,
            top,
            output,
        } => {
            let format = cli::parse_output_format(&output).map_err(CareerReadinessError::InvalidInput)?;
            let candidate = SkillSet::from_labels(cli::parse_skill_list(&skills));
            let catalog = load_catalog(&jobs).await?;
            info!("Ranking {} postings against {} skills", catalog.len(), candidate.len());

            let matcher = SkillMatcher::new();
            let mut ranked = matcher.rank(&candidate, &catalog);
            if let Some(top) = top {
                ranked.truncate(top);
            }

            let report = ReadinessReport::new(candidate.to_vec()).with_matches(
                ranked
                    .iter()
                    .filter_map(|r| RankedJob::from_result(r, &catalog))
                    .collect(),
            );
            print_report(&config, &report, format, false)?;
        }

        Commands::Roadmap {
            skills,
            benchmark,
            output,
            detailed,
        } => {
            let format = cli::parse_output_format(&output).map_err(CareerReadinessError::InvalidInput)?;
            let candidate = SkillSet::from_labels(cli::parse_skill_list(&skills));
            let benchmark = match benchmark {
                Some(benchmark) => SkillSet::from_labels(cli::parse_skill_list(&benchmark)),
                None => RoadmapGenerator::default_benchmark(),
            };

            let generator = RoadmapGenerator::new(&config);
            let analysis = generator.generate(&candidate, &benchmark);

            let report = ReadinessReport::new(candidate.to_vec()).with_analysis(analysis);
            print_report(&config, &report, format, detailed)?;
        }

        Commands::Compliance { last_date, score, now } => {
            let mut record = ProfileRecord::new();
            record.last_assessment_date = last_date;
            record.assessment_score = score.map(ScoreValue::Text);
            let assessment = record.assessment_record()?;

            let now = match now {
                Some(now) => DateTime::parse_from_rfc3339(&now)
                    .map_err(|e| CareerReadinessError::InvalidInput(format!("--now: {}", e)))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };

            // Each CLI run is a fresh session, so the prompt state starts unarmed
            let policy = CompliancePolicy::new(&config);
            let outcome = policy.evaluate_session(&assessment, now, PromptState::NotShown);

            if outcome.show_prompt {
                println!("⛔ Mandatory skill assessment required!");
                println!(
                    "   Assessments are valid for {} days and need a score of at least {}%.",
                    config.compliance.validity_days, config.compliance.min_score
                );
            }

            let report = ReadinessReport::default().with_verdict(outcome.verdict);
            print_report(&config, &report, config.output.format, false)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Compliance window: {} days", config.compliance.validity_days);
                println!("Minimum score: {}%", config.compliance.min_score);
                println!("Expiry warning at: {} days left", config.compliance.warning_days);
                println!("\nRoadmap:");
                println!("  Predictions: {}", config.roadmap.prediction_count);
                println!("  Phases: {}", config.roadmap.phases.join(" → "));
                println!("\nTrending weights:");
                println!("  Base: {}", config.scoring.base_score);
                println!(
                    "  Breadth: {} per skill (cap {})",
                    config.scoring.breadth_weight, config.scoring.breadth_cap
                );
                println!("  Registry presence: +{}", config.scoring.presence_weight);
                println!("  Registry absence: -{}", config.scoring.absence_penalty);
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

async fn load_catalog(path: &Path) -> Result<Vec<JobPosting>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

fn print_report(
    config: &Config,
    report: &ReadinessReport,
    format: config::OutputFormat,
    detailed: bool,
) -> Result<()> {
    let use_colors = config.output.color_output && format == config::OutputFormat::Console;
    let manager = OutputManager::new(use_colors, detailed || config.output.detailed);
    println!("{}", manager.generate_report(report, format)?);
    Ok(())
}
