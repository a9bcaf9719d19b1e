use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use gotest_pattern::cli::{self, OutputFormat};
use gotest_pattern::logging::{self, Verbosity};
use gotest_pattern::output::OutputFormatter;
use gotest_pattern::{Resolver, ResolverConfig};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_args(&args))?;
    args.validate().context("Invalid arguments")?;

    let config = match &args.config {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ResolverConfig::default(),
    };

    let mut resolver = Resolver::with_config(config).context("Failed to initialize Go parser")?;
    let line = args.line as usize;
    let resolution = resolver
        .resolve_file(&args.file, line, args.mode)
        .with_context(|| format!("Failed to resolve {}", args.file.display()))?;

    let rendered = OutputFormatter::format(&resolution, &args.file, line, args.mode, args.format)?;

    if args.format == OutputFormat::Json {
        println!("{rendered}");
        return Ok(());
    }

    if let Some(message) = OutputFormatter::miss_message(&resolution) {
        eprintln!("{message}");
        std::process::exit(1);
    }

    println!("{rendered}");
    Ok(())
}
