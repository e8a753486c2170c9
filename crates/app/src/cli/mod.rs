use clap::{Parser, Subcommand};
use galactic_app::{database, domain::catalog::PgCatalogStore};

mod destination;
mod market_item;

#[derive(Debug, Parser)]
#[command(name = "galactic-app", about = "Galactic Market admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Destination(destination::DestinationCommand),
    MarketItem(market_item::MarketItemCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Destination(command) => destination::run(command).await,
            Commands::MarketItem(command) => market_item::run(command).await,
        }
    }
}

async fn catalog_store(database_url: &str) -> Result<PgCatalogStore, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgCatalogStore::new(database::Db::new(pool)))
}
