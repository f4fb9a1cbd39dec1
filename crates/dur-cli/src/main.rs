use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dur_cli::commands::{format, parse, total};
use dur_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Parse {
            inputs,
            json,
            explain,
        }) => {
            let rejected = parse::run(
                &mut stdout,
                inputs,
                config.format_style,
                *json || config.json,
                *explain,
            )?;
            if rejected > 0 {
                anyhow::bail!("{rejected} of {} inputs could not be parsed", inputs.len());
            }
        }
        Some(Commands::Format { minutes, style }) => {
            format::run(&mut stdout, *minutes, style.unwrap_or(config.format_style))?;
        }
        Some(Commands::Total {
            inputs,
            budget,
            json,
        }) => {
            total::run(
                &mut stdout,
                inputs,
                budget.as_deref(),
                config.format_style,
                *json || config.json,
            )?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
