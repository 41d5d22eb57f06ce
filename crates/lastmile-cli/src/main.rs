//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the core services.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use lastmile_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Log to stderr so stdout carries only command output.
///
/// `RUST_LOG` wins when set, otherwise `-v` selects debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::new(cli.base_url, cli.timeout_secs);

    match command {
        Commands::Estimate {
            pickup,
            dropoff,
            token,
        } => {
            let ctx = bootstrap(config.with_access_token(token))?;
            handlers::estimate::execute(&ctx, pickup, dropoff).await?;
        }
        Commands::Quote {
            pickup,
            dropoff,
            server_token,
            json,
        } => {
            let ctx = bootstrap(config.with_server_token(server_token))?;
            handlers::quote::execute(&ctx, pickup, dropoff, json).await?;
        }
        Commands::Fare {
            pickup,
            dropoff,
            ac,
            json,
        } => {
            let ctx = bootstrap(config)?;
            handlers::fare::execute(&ctx, pickup, dropoff, ac, json)?;
        }
        Commands::Route {
            from,
            to,
            otp_url,
            ac,
            json,
        } => {
            let ctx = bootstrap(config.with_otp_base_url(otp_url))?;
            handlers::route::execute(&ctx, from, to, ac, json).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before parsing so env fallbacks see .env
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
