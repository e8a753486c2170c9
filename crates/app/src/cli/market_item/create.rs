use clap::Args;
use galactic_app::domain::catalog::{CatalogStore, data::MarketItemDetails};
use rust_decimal::Decimal;

use crate::cli::catalog_store;

#[derive(Debug, Args)]
pub(crate) struct CreateMarketItemArgs {
    /// Item name
    #[arg(long)]
    name: String,

    /// Short description shown in listings
    #[arg(long)]
    description: String,

    /// Price, e.g. 49.99
    #[arg(long)]
    price: Decimal,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateMarketItemArgs) -> Result<(), String> {
    let store = catalog_store(&args.database_url).await?;

    let item = store
        .create_market_item(MarketItemDetails {
            name: args.name,
            description: args.description,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create market item: {error}"))?;

    println!("market_item_id: {}", item.id);
    println!("name: {}", item.name);
    println!("price: {}", item.price);

    Ok(())
}
