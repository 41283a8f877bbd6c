//! Pricing Report
//!
//! Fetches products from the remote catalog and prints each one with its
//! discount, tax and tax-inclusive total.

use clap::{Parser, Subcommand, ValueEnum};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::{CatalogResult, CatalogService, HttpCatalogClient, PricedProduct};
use eyre::Result;
use tracing::info;

mod config;
mod render;
mod report;

use config::Config;

const DEFAULT_LIMIT: u32 = 5;

fn limit_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..)
}

#[derive(Parser, Debug)]
#[command(name = "pricing-report")]
#[command(about = "Show discount and tax-adjusted prices for catalog products")]
struct Cli {
    /// Catalog base URL (overrides CATALOG_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// List the first page of products (default)
    List {
        /// Maximum number of products to fetch
        #[arg(short, long, default_value_t = DEFAULT_LIMIT, value_parser = limit_parser())]
        limit: u32,
    },

    /// Show a single product
    Get {
        /// Product id
        id: u64,
    },

    /// List products in a category
    Category {
        /// Category name, e.g. "groceries"
        name: String,

        #[arg(short, long, default_value_t = DEFAULT_LIMIT, value_parser = limit_parser())]
        limit: u32,
    },

    /// Free-text product search
    Search {
        query: String,

        #[arg(short, long, default_value_t = DEFAULT_LIMIT, value_parser = limit_parser())]
        limit: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

async fn run(config: &Config, command: Commands) -> CatalogResult<Vec<PricedProduct>> {
    let client = HttpCatalogClient::new(config.catalog.clone())?;
    let service = CatalogService::new(client);

    match command {
        Commands::List { limit } => service.list(limit).await,
        Commands::Get { id } => service.get(id).await.map(|priced| vec![priced]),
        Commands::Category { name, limit } => service.by_category(&name, limit).await,
        Commands::Search { query, limit } => service.search(&query, limit).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_base_url(cli.base_url);
    init_tracing(&config.environment);

    let command = cli.command.unwrap_or(Commands::List {
        limit: DEFAULT_LIMIT,
    });
    info!(base_url = %config.catalog.base_url, command = ?command, "Starting pricing report");

    match run(&config, command).await {
        Ok(products) => {
            let output = match cli.format {
                OutputFormat::Text => render::render_text(&products),
                OutputFormat::Json => render::render_json(&products)?,
            };
            print!("{output}");
            info!(count = products.len(), "Pricing report complete");
            Ok(())
        }
        Err(err) => {
            report::report_failure(&err, &mut std::io::stderr())?;
            std::process::exit(1);
        }
    }
}
