//! CLI interface for resume insight

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-insight")]
#[command(about = "Resume intelligence: role matching, skill detection, and ATS scoring")]
#[command(
    long_about = "Analyze a resume for role fit, detected skills, a heuristic ATS score, a skill roadmap, and a synthesized job-search query"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume file
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job index to rank against (overrides the configured path)
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// How many corpus roles to report
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file instead of stdout
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Build the TF-IDF job index from a labeled role dataset
    Train {
        /// JSON array of {role, description} records
        #[arg(short, long)]
        data: PathBuf,

        /// Where to write the index (defaults to the configured path)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show or reset configuration
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
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(&PathBuf::from("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &allowed).is_err());
    }
}
