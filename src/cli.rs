use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::engine::Mode;
use crate::error::IoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gotest-pattern")]
#[command(about = "Go test pattern resolver - turn a file and line into a `go test -run` pattern", long_about = None)]
pub struct Args {
    /// Go source file containing the tests
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 1-based line number of the cursor
    #[arg(value_name = "LINE", value_parser = clap::value_parser!(u32).range(1..))]
    pub line: u32,

    /// What to select: the construct under the cursor, its test function, or the whole file
    #[arg(value_name = "MODE", default_value = "cursor")]
    pub mode: Mode,

    /// Resolver configuration file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_file(&self.file)?;
        if let Some(ref config_path) = self.config {
            validate_file(config_path)?;
        }
        Ok(())
    }
}

pub fn validate_file(path: &Path) -> Result<(), IoError> {
    let metadata = std::fs::metadata(path).map_err(|e| IoError::from_read(path, e))?;
    if !metadata.is_file() {
        return Err(IoError::not_a_file(path));
    }
    Ok(())
}
