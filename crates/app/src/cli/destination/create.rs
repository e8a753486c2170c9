use clap::Args;
use galactic_app::domain::catalog::{CatalogStore, data::DestinationDetails};
use rust_decimal::Decimal;

use crate::cli::catalog_store;

#[derive(Debug, Args)]
pub(crate) struct CreateDestinationArgs {
    /// Destination name
    #[arg(long)]
    name: String,

    /// Short description shown in listings
    #[arg(long)]
    description: String,

    /// Image URL; left empty when omitted
    #[arg(long, default_value = "")]
    image_url: String,

    /// Price, e.g. 1500.00
    #[arg(long)]
    price: Decimal,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateDestinationArgs) -> Result<(), String> {
    let store = catalog_store(&args.database_url).await?;

    let destination = store
        .create_destination(DestinationDetails {
            name: args.name,
            description: args.description,
            image_url: args.image_url,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create destination: {error}"))?;

    println!("destination_id: {}", destination.id);
    println!("name: {}", destination.name);
    println!("price: {}", destination.price);

    Ok(())
}
