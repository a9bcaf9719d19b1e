use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::engine::{MissReason, Mode, Resolution};

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub file: String,
    pub line: usize,
    pub mode: Mode,
    pub pattern: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(
        resolution: &Resolution,
        file: &Path,
        line: usize,
        mode: Mode,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(resolution.pattern()),
            OutputFormat::Json => {
                let output = Self::build_output(resolution, file, line, mode);
                Ok(serde_json::to_string_pretty(&output)?)
            }
        }
    }

    pub fn build_output<'a>(
        resolution: &'a Resolution,
        file: &Path,
        line: usize,
        mode: Mode,
    ) -> JsonOutput<'a> {
        let reason = match resolution {
            Resolution::Matched(_) => None,
            Resolution::NoTestsInFile => Some("no_tests_in_file"),
            Resolution::NotFound(reason) => Some(reason.as_str()),
        };

        JsonOutput {
            file: file.display().to_string(),
            line,
            mode,
            pattern: resolution.pattern(),
            found: resolution.found(),
            reason,
        }
    }

    /// User-facing message for a resolution that produced no pattern.
    pub fn miss_message(resolution: &Resolution) -> Option<&'static str> {
        match resolution {
            Resolution::Matched(_) => None,
            Resolution::NoTestsInFile => Some("no test functions found"),
            Resolution::NotFound(MissReason::ParseFailure | MissReason::LineNotInTest) => {
                Some("cursor is not inside a test function")
            }
        }
    }
}
