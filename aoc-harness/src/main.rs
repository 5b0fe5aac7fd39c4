//! AOC harness - select, run and time Advent of Code solutions

mod cache;
mod cli;
mod config;
mod credentials;
mod error;
mod output;
mod runner;

use aoc_http_client::AocClient;
use aoc_registry::SolutionRegistry;
use cache::InputCache;
use cli::Invocation;
use config::Config;
use credentials::CredentialLoader;
use error::CliError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let invocation = Invocation::parse_from(std::env::args_os());
    let exit_code = invocation.exit_code();
    let args = match invocation {
        Invocation::Run(args) => args,
        Invocation::Help(text) => {
            print!("{}", text);
            std::process::exit(exit_code);
        }
        Invocation::Invalid { error, help } => {
            eprintln!("{}", error);
            eprint!("{}", help);
            std::process::exit(exit_code);
        }
    };

    let config = Config::from_args(args);
    init_logging(config.quiet);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let registry = build_registry()?;
    let cache = InputCache::new(
        config.cache_dir.clone(),
        AocClient::new()?,
        CredentialLoader::new(&config.env_file),
    );

    if !config.quiet {
        println!("Advent of Code - Rust Solutions");
        println!("===============================");
        println!("{}", config.selection.describe());
    }

    let results = runner::run(&config.selection, &registry, &cache);
    debug!(
        parts = results.len(),
        total = ?output::total_elapsed(&results),
        "run complete"
    );

    if config.quiet && !results.is_empty() {
        print!("{}", output::render_answers(&results));
    } else {
        println!();
        print!("{}", output::render_table(&results));
    }
    Ok(())
}

/// Build the registry from every solution linked into this binary
fn build_registry() -> Result<SolutionRegistry, CliError> {
    let builder = aoc_solutions::register_all(SolutionRegistry::builder())?;
    Ok(builder.build())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level
fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
