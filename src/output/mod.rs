//! Report assembly and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, OutputManager};
pub use report::{RankedJob, ReadinessReport};
