pub mod context;
pub mod functions;
pub mod node_types;
pub mod selector;
pub mod subtest;
pub mod table;

pub use context::{Context, LineRange};
pub use functions::TestFunction;
pub use selector::{Segment, Selector};
pub use subtest::SubtestInvocation;
pub use table::{RowField, TableRow};

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ResolverConfig;
use crate::error::{IoError, ParserError, Result};
use crate::parser::GoParser;

/// What the pattern should select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Deepest sub-test (or table row) under the line
    #[default]
    Cursor,
    /// Enclosing test function only
    Func,
    /// Every test function in the file
    File,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cursor => "cursor",
            Mode::Func => "func",
            Mode::File => "file",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The source does not parse.
    ParseFailure,
    /// The line is outside every test function.
    LineNotInTest,
}

impl MissReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissReason::ParseFailure => "parse_failure",
            MissReason::LineNotInTest => "line_not_in_test",
        }
    }
}

/// Outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Selector),
    /// File mode on a file without test functions.
    NoTestsInFile,
    NotFound(MissReason),
}

impl Resolution {
    /// Whether a pattern was produced. `NoTestsInFile` counts as found with
    /// an empty pattern.
    pub fn found(&self) -> bool {
        !matches!(self, Resolution::NotFound(_))
    }

    pub fn pattern(&self) -> String {
        match self {
            Resolution::Matched(selector) => selector.to_string(),
            Resolution::NoTestsInFile | Resolution::NotFound(_) => String::new(),
        }
    }

    pub fn into_parts(self) -> (String, bool) {
        (self.pattern(), self.found())
    }
}

pub struct Resolver {
    parser: GoParser,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new() -> std::result::Result<Self, ParserError> {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> std::result::Result<Self, ParserError> {
        Ok(Self {
            parser: GoParser::new()?,
            config,
        })
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Read `path` and resolve. Only I/O problems are errors.
    pub fn resolve_file(&mut self, path: &Path, line: usize, mode: Mode) -> Result<Resolution> {
        let source =
            std::fs::read_to_string(path).map_err(|e| IoError::from_read(path, e))?;
        debug!(path = %path.display(), line, %mode, "resolving");
        Ok(self.resolve_source(&source, line, mode))
    }

    pub fn resolve_source(&mut self, source: &str, line: usize, mode: Mode) -> Resolution {
        let tree = match self.parser.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                debug!(error = %e, "parse failed, reporting not found");
                return Resolution::NotFound(MissReason::ParseFailure);
            }
        };
        let ctx = Context::new(&tree, source, &self.config);

        let resolution = match mode {
            Mode::File => Self::resolve_file_mode(&ctx),
            Mode::Func | Mode::Cursor => Self::resolve_in_function(&ctx, line, mode),
        };
        trace!(?resolution, "resolved");
        resolution
    }

    fn resolve_file_mode(ctx: &Context) -> Resolution {
        match functions::file_segment(ctx) {
            Some(segment) => Resolution::Matched(
                Selector::new(ctx.config().separator.as_str()).with_segment(segment),
            ),
            None => Resolution::NoTestsInFile,
        }
    }

    fn resolve_in_function(ctx: &Context, line: usize, mode: Mode) -> Resolution {
        let Some(func) = functions::enclosing_test_function(ctx, line) else {
            return Resolution::NotFound(MissReason::LineNotInTest);
        };

        let mut selector =
            Selector::new(ctx.config().separator.as_str()).with_segment(func.segment());
        if mode == Mode::Func {
            return Resolution::Matched(selector);
        }

        let path = func
            .body
            .map(|body| subtest::find_subtest(ctx, body, line))
            .unwrap_or_default();

        if path.is_empty() {
            if let Some(name) = table::resolve_table_row(ctx, line) {
                selector.extend([Segment::subtest(&name)]);
            }
        } else {
            selector.extend(path);
        }

        Resolution::Matched(selector)
    }
}

pub struct ResolverBuilder {
    config: ResolverConfig,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_test_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.test_prefix = prefix.into();
        self
    }

    pub fn with_name_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.name_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> std::result::Result<Resolver, ParserError> {
        Resolver::with_config(self.config)
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `path` at `line` with the default configuration, returning the
/// pattern and whether it was found.
pub fn find_test_pattern(path: &Path, line: usize, mode: Mode) -> Result<(String, bool)> {
    let mut resolver = Resolver::new()?;
    Ok(resolver.resolve_file(path, line, mode)?.into_parts())
}
