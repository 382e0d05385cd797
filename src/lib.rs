//! Career-readiness engine library

pub mod cli;
pub mod compliance;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod output;
pub mod profile;
pub mod roadmap;
pub mod skills;

pub use config::Config;
pub use error::{CareerReadinessError, Result};
