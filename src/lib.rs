/// gotest-pattern
///
/// Resolves a position in a Go test file into a `go test -run` pattern that
/// selects the test function, sub-test or table row under the cursor. Uses
/// Tree-sitter for parsing.
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod utils;

pub use config::ResolverConfig;
pub use engine::{find_test_pattern, MissReason, Mode, Resolution, Resolver, Selector};
