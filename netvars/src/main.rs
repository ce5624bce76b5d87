//! NetVars command line generator.
//!
//! Run with: `netvars <INPUT> <OUTPUT>`

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use netvars::codegen::format::DEFAULT_FORMATTER;
use netvars::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "netvars", version)]
#[command(about = "Generate a C++ device variable header from a JSON registry")]
struct Args {
    /// Registry JSON file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Header file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Client to generate for (default: first client in the registry)
    #[arg(long, value_name = "NAME")]
    client: Option<String>,

    /// Formatter executable run on the written header
    #[arg(long, value_name = "PROGRAM", env = "NETVARS_FORMATTER", default_value = DEFAULT_FORMATTER)]
    formatter: String,

    /// Leave the header unformatted
    #[arg(long)]
    no_format: bool,

    /// Accept duplicate or invalid variable names
    #[arg(long)]
    lenient: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default().with_strict(!self.lenient);
        match &self.client {
            Some(client) => config.with_client(client.clone()),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{}", Args::command().render_usage());
            return ExitCode::from(1);
        }
    };

    setup_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("generation failed: {:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config();
    let astyle = Astyle::new(args.formatter.clone());
    let formatter: &dyn Formatter = if args.no_format {
        &NoopFormatter
    } else {
        &astyle
    };

    let generation = generate_to_file(&args.input, &args.output, &config, formatter)
        .with_context(|| format!("failed to generate from '{}'", args.input.display()))?;

    tracing::info!(
        output = %args.output.display(),
        warnings = generation.diagnostics.len(),
        "header generated"
    );
    println!("Generated {}", args.output.display());
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("netvars=debug")
        } else {
            EnvFilter::new("netvars=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
