//! lightbnb CLI - run LightBnB queries from the terminal
//!
//! Thin front end over `lightbnb-db`. Every command prints its result as
//! pretty JSON on stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB database: users, reservations, and property search"
)]
struct Cli {
    /// Enable debug logging (shows rendered SQL and parameters)
    #[arg(long, global = true)]
    debug: bool,

    /// TOML file with a [database] table (defaults to DATABASE_URL / PG* variables)
    #[arg(long, global = true, env = "LIGHTBNB_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or register users
    User(commands::user::UserArgs),
    /// List a guest's reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Search or add properties
    Properties(commands::properties::PropertiesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::User(args) => commands::run_user(args, config).await?,
        Commands::Reservations(args) => commands::run_reservations(args, config).await?,
        Commands::Properties(args) => commands::run_properties(args, config).await?,
    }
    Ok(())
}
