//! Resume insight library

pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeInsightError};
