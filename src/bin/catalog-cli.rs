use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use fitness_catalog::catalog::{CatalogService, GuideFields, GuideId, Listing};
use fitness_catalog::config::loader::parse_config;
use fitness_catalog::config::validation::validate_config;
use fitness_catalog::config::CatalogConfig;
use fitness_catalog::observability::{logging, metrics};
use fitness_catalog::routing::RouteTable;
use fitness_catalog::store::StoreClient;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Management CLI for the fitness catalog store", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the store base URL.
    #[arg(long)]
    url: Option<String>,

    /// Override the store API key.
    #[arg(short, long)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all guides, newest first
    Guides,
    /// Create a guide from a JSON object of fields
    AddGuide { fields: String },
    /// Update a guide by id from a JSON object of fields
    UpdateGuide { id: i64, fields: String },
    /// Delete a guide by id
    DeleteGuide { id: i64 },
    /// List all categories
    Categories,
    /// Create a category with the given title
    AddCategory { title: String },
    /// Resolve a path against the route table
    Resolve { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => parse_config(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(url) = cli.url {
        config.store.url = url;
    }
    if let Some(key) = cli.key {
        config.store.api_key = key;
    }

    logging::init_logging(&config.observability);

    // Route lookup is pure; it needs neither credentials nor a backend.
    if let Commands::Resolve { path } = &cli.command {
        let table = RouteTable::catalog();
        let resolved = table.resolve(path);
        println!("{} -> {:?}", resolved.entry.name, resolved.entry.view);
        for (name, value) in resolved.params.iter() {
            println!("  {} = {}", name, value);
        }
        return Ok(());
    }

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            eprintln!("config error: {}", error);
        }
        return Err("invalid configuration".into());
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let store = Arc::new(StoreClient::new(&config.store)?);
    let service = CatalogService::new(store);

    match cli.command {
        Commands::Guides => print_listing(service.get_guides().await)?,
        Commands::AddGuide { fields } => {
            let fields: GuideFields = serde_json::from_str(&fields)?;
            service.create_guide(&fields).await?;
            println!("guide created");
        }
        Commands::UpdateGuide { id, fields } => {
            let fields: GuideFields = serde_json::from_str(&fields)?;
            service.update_guide(GuideId(id), &fields).await?;
            println!("guide {} updated", id);
        }
        Commands::DeleteGuide { id } => {
            service.delete_guide(GuideId(id)).await?;
            println!("guide {} deleted", id);
        }
        Commands::Categories => print_listing(service.get_categories().await)?,
        Commands::AddCategory { title } => match service.create_category(&title).await? {
            Some(category) => println!("{}", serde_json::to_string_pretty(&category)?),
            None => println!("store returned no created row"),
        },
        Commands::Resolve { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn print_listing<T: Serialize>(listing: Listing<T>) -> Result<(), Box<dyn std::error::Error>> {
    match listing {
        Listing::Available(rows) => println!("{}", serde_json::to_string_pretty(&rows)?),
        Listing::Unavailable(e) => eprintln!("store unavailable: {}", e),
    }
    Ok(())
}
