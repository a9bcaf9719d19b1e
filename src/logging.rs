use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Args;

/// Log level selected with `-q` / `-v`.
///
/// Default is warnings only, so an editor calling the binary sees nothing on
/// stderr unless resolution fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::from_flags(args.verbose, args.quiet)
    }

    fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `-vv` and up tag events with the resolver source location.
    fn shows_location(self) -> bool {
        self >= Self::Debug
    }

    /// Directive scoped to this crate; tree-sitter and clap stay silent.
    fn directive(self) -> String {
        format!("gotest_pattern={}", self.level())
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the flags.
///
/// Events always go to stderr since stdout carries the pattern.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity.shows_location())
        .with_line_number(verbosity.shows_location())
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
