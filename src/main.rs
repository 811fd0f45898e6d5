//! Resume insight: resume analysis, role matching, and ATS scoring

mod cli;
mod config;
mod discovery;
mod engine;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use engine::analyzer::AnalysisEngine;
use engine::vectorizer::{JobCorpusEntry, JobIndex};
use error::{Result, ResumeInsightError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::OutputFormatter;
use std::path::PathBuf;
use std::process;

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
            index,
            top_k,
            output,
            save,
        } => analyze(resume, index, top_k, output, save, config).await,
        Commands::Train { data, out } => train(data, out, config),
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeInsightError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

async fn analyze(
    resume: PathBuf,
    index: Option<PathBuf>,
    top_k: Option<usize>,
    output: String,
    save: Option<PathBuf>,
    mut config: Config,
) -> Result<()> {
    cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
        .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
    let output_format = cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

    if let Some(index_path) = index {
        config.index.path = index_path;
    }
    if let Some(k) = top_k {
        config.analysis.top_k = k;
    }
    if !config.output.color_output {
        colored::control::set_override(false);
    }

    info!("Extracting text from {}", resume.display());
    let mut input_manager = InputManager::new();
    let resume_text = input_manager.extract_text(&resume).await?;

    let engine = AnalysisEngine::new(&config)?;
    let report = engine.analyze(&resume_text)?;

    let rendered = OutputFormatter::new(output_format).render(&report)?;
    match save {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn train(data: PathBuf, out: Option<PathBuf>, config: Config) -> Result<()> {
    let content = std::fs::read_to_string(&data)?;
    let entries: Vec<JobCorpusEntry> = serde_json::from_str(&content)?;
    info!("Building job index from {} role records", entries.len());

    let index = JobIndex::build(entries)?;
    let out_path = out.unwrap_or(config.index.path);
    index.save(&out_path)?;

    println!(
        "Job index written to {} ({} roles, vocabulary size {})",
        out_path.display(),
        index.len(),
        index.vectorizer.dimension()
    );
    Ok(())
}
