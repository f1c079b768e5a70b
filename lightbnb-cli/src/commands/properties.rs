//! Properties command - search and create listings

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{NewProperty, PropertySearch, PropertyStore, DEFAULT_LIMIT};
use tracing::info;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommand {
    /// Search properties, cheapest first
    Search(SearchArgs),
    /// Add a property from a JSON file
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Match cities containing this text
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum nightly price in dollars
    #[arg(long = "min-price", value_name = "DOLLARS")]
    pub minimum_price_per_night: Option<i64>,

    /// Maximum nightly price in dollars
    #[arg(long = "max-price", value_name = "DOLLARS")]
    pub maximum_price_per_night: Option<i64>,

    /// Minimum average review rating
    #[arg(long = "min-rating")]
    pub minimum_rating: Option<f64>,

    /// Maximum number of properties to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl From<&SearchArgs> for PropertySearch {
    fn from(args: &SearchArgs) -> Self {
        Self {
            city: args.city.clone(),
            owner_id: args.owner_id,
            minimum_price_per_night: args.minimum_price_per_night,
            maximum_price_per_night: args.maximum_price_per_night,
            minimum_rating: args.minimum_rating,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// JSON file describing the property (cost_per_night in cents)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Store in an in-memory mock instead of the database
    #[arg(long)]
    pub mock: bool,

    /// Seed the mock store from a properties JSON fixture
    #[arg(long, value_name = "PATH", requires = "mock")]
    pub fixture: Option<PathBuf>,
}

pub async fn run_properties(args: PropertiesArgs, config: Option<&Path>) -> Result<()> {
    match args.command {
        PropertiesCommand::Search(args) => run_search(args, config).await,
        PropertiesCommand::Add(args) => run_add(args, config).await,
    }
}

async fn run_search(args: SearchArgs, config: Option<&Path>) -> Result<()> {
    let db = connect(config).await?;
    let listings = db
        .get_all_properties(&PropertySearch::from(&args), args.limit)
        .await?;
    print_json(&listings)
}

async fn run_add(args: AddArgs, config: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let property: NewProperty = serde_json::from_str(&content)
        .with_context(|| format!("Invalid property JSON in {}", args.file.display()))?;

    if args.mock {
        let store = match &args.fixture {
            Some(path) => PropertyStore::load(path)?,
            None => PropertyStore::new(),
        };
        let stored = store.add_property(property);
        info!(id = stored.id, "stored property in mock store");
        return print_json(&stored);
    }

    let db = connect(config).await?;
    let stored = db.add_property(&property).await?;
    print_json(&stored)
}
