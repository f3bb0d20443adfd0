// src/main.rs

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder as LoggerBuilder;
use log::LevelFilter;

use mediacatalog::application::{execute, AppState, Cli, ErrorResponse};
use mediacatalog::config::{CatalogConfig, LOG_ENV_VAR};
use mediacatalog::db::{create_connection_pool, get_connection, initialize_database};

fn init_env_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut logger_builder = LoggerBuilder::new();
    logger_builder.filter_level(level);

    // An explicit filter overrides -v
    if let Ok(filters) = std::env::var(LOG_ENV_VAR) {
        logger_builder.parse_filters(&filters);
    }

    logger_builder.format_timestamp(None).init();
}

fn bootstrap(cli: &Cli) -> anyhow::Result<AppState> {
    // 1. CONFIGURATION
    let config = CatalogConfig::resolve(cli.database.clone())?;
    log::info!("using database {}", config.database_path.display());

    // 2. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config)
            .with_context(|| format!("opening {}", config.database_path.display()))?,
    );

    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("initializing schema")?;
    }

    // 3. SERVICES AND HANDLERS
    Ok(AppState::bootstrap(pool))
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_env_logger(cli.verbose);

    let state = bootstrap(&cli)?;

    match execute(&state, cli.command) {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            log::warn!("command failed: {}", error);
            let response = ErrorResponse::from_app_error(error);
            eprintln!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::from(response.exit_code()))
        }
    }
}
