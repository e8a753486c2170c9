use clap::Args;
use galactic_app::domain::catalog::CatalogStore;

use crate::cli::catalog_store;

#[derive(Debug, Args)]
pub(crate) struct ListMarketItemsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListMarketItemsArgs) -> Result<(), String> {
    let store = catalog_store(&args.database_url).await?;

    let items = store
        .list_market_items()
        .await
        .map_err(|error| format!("failed to list market items: {error}"))?;

    if items.is_empty() {
        println!("no market items found");
        return Ok(());
    }

    for item in items {
        println!("market_item_id: {}", item.id);
        println!("name: {}", item.name);
        println!("description: {}", item.description);
        println!("price: {}", item.price);
        println!("updated_at: {}", item.updated_at);
        println!();
    }

    Ok(())
}
