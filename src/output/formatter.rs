//! Output formatters for readiness reports

use super::report::ReadinessReport;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use std::fmt::Write as _;

pub trait OutputFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal renderer; colors optional so output stays pipeable.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn score_label(&self, score: u8) -> String {
        let text = format!("{}/100", score);
        if !self.use_colors {
            return text;
        }
        if score > 70 {
            text.green().bold().to_string()
        } else if score >= 40 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.cyan().bold())
        } else {
            format!("\n{}\n", title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let mut out = String::new();

        if !report.candidate_skills.is_empty() {
            out.push_str(&self.header("Your Skills"));
            let _ = writeln!(out, "  {}", report.candidate_skills.join(", "));
        }

        if let Some(summary) = &report.summary {
            out.push_str(&self.header("Resume Summary"));
            let _ = writeln!(out, "  {}", summary);
            for improvement in &report.improvements {
                let _ = writeln!(out, "  - {}", improvement);
            }
        }

        if let Some(analysis) = &report.analysis {
            out.push_str(&self.header("Market Value"));
            let _ = writeln!(out, "  Trending score: {}", self.score_label(analysis.trending_score));
            let _ = writeln!(
                out,
                "  Skill gap: {}% acquired / {}% missing",
                analysis.skill_gap.acquired, analysis.skill_gap.missing
            );

            if !analysis.future_predictions.is_empty() {
                out.push_str(&self.header("Future Skills Prediction"));
                for pred in &analysis.future_predictions {
                    let _ = writeln!(out, "  {} [{:?}] - {}", pred.skill, pred.status, pred.reason);
                    if self.detailed && !pred.domains.is_empty() {
                        let _ = writeln!(out, "    Domains: {}", pred.domains.join(", "));
                    }
                }
            }

            if !analysis.roadmap.is_empty() {
                out.push_str(&self.header("Your Personalized Roadmap"));
                for step in &analysis.roadmap {
                    let _ = writeln!(out, "  Week {} [{}] {}", step.week, step.phase, step.topic);
                    if self.detailed {
                        let _ = writeln!(out, "    {}", step.description);
                        let _ = writeln!(out, "    Tip: {}", step.tip);
                        let _ = writeln!(
                            out,
                            "    Free resource: {} ({}) {}",
                            step.free_resource.title,
                            step.free_resource.resource_type,
                            step.free_resource.link
                        );
                    }
                }
            }
        }

        if !report.matches.is_empty() {
            out.push_str(&self.header("Smart Job Picks"));
            for job in &report.matches {
                let _ = writeln!(
                    out,
                    "  {:>3}% {} @ {} ({}, {})",
                    job.score, job.title, job.company, job.location, job.salary
                );
            }
        }

        if let Some(verdict) = &report.verdict {
            out.push_str(&self.header("Assessment Compliance"));
            if verdict.compliant {
                let status = if self.use_colors {
                    "compliant".green().to_string()
                } else {
                    "compliant".to_string()
                };
                let _ = writeln!(out, "  Status: {} ({} days left)", status, verdict.days_left);
                if verdict.warning {
                    let _ = writeln!(out, "  Warning: assessment expiring soon, retake to avoid interruption");
                }
            } else {
                let status = if self.use_colors {
                    "not compliant".red().bold().to_string()
                } else {
                    "not compliant".to_string()
                };
                let _ = writeln!(out, "  Status: {} - a valid assessment is required", status);
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ReadinessReport) -> Result<String> {
        let mut out = String::from("# Career Readiness Report\n");

        if !report.candidate_skills.is_empty() {
            out.push_str("\n## Skills\n\n");
            for skill in &report.candidate_skills {
                let _ = writeln!(out, "- {}", skill);
            }
        }

        if let Some(summary) = &report.summary {
            out.push_str("\n## Resume Summary\n\n");
            let _ = writeln!(out, "{}", summary);
            for improvement in &report.improvements {
                let _ = writeln!(out, "- {}", improvement);
            }
        }

        if let Some(analysis) = &report.analysis {
            out.push_str("\n## Gap Analysis\n\n");
            let _ = writeln!(out, "- Trending score: **{}**/100", analysis.trending_score);
            let _ = writeln!(
                out,
                "- Skill gap: **{}%** acquired / **{}%** missing",
                analysis.skill_gap.acquired, analysis.skill_gap.missing
            );

            if !analysis.roadmap.is_empty() {
                out.push_str("\n## Roadmap\n\n");
                out.push_str("| Week | Phase | Topic | Free Resource |\n");
                out.push_str("|------|-------|-------|---------------|\n");
                for step in &analysis.roadmap {
                    let _ = writeln!(
                        out,
                        "| {} | {} | {} | [{}]({}) |",
                        step.week, step.phase, step.topic, step.free_resource.title, step.free_resource.link
                    );
                }
            }
        }

        if !report.matches.is_empty() {
            out.push_str("\n## Job Matches\n\n");
            out.push_str("| Score | Title | Company | Location |\n");
            out.push_str("|-------|-------|---------|----------|\n");
            for job in &report.matches {
                let _ = writeln!(out, "| {}% | {} | {} | {} |", job.score, job.title, job.company, job.location);
            }
        }

        if let Some(verdict) = &report.verdict {
            out.push_str("\n## Assessment Compliance\n\n");
            if verdict.compliant {
                let _ = writeln!(out, "Compliant, {} days left.", verdict.days_left);
            } else {
                out.push_str("Not compliant. A valid assessment is required.\n");
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Picks the right formatter for a configured output format.
pub struct OutputManager {
    use_colors: bool,
    detailed: bool,
}

impl OutputManager {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn generate_report(&self, report: &ReadinessReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => ConsoleFormatter::new(self.use_colors, self.detailed).format_report(report),
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }
}
