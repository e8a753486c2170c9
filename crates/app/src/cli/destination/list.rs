use clap::Args;
use galactic_app::domain::catalog::CatalogStore;

use crate::cli::catalog_store;

#[derive(Debug, Args)]
pub(crate) struct ListDestinationsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListDestinationsArgs) -> Result<(), String> {
    let store = catalog_store(&args.database_url).await?;

    let destinations = store
        .list_destinations()
        .await
        .map_err(|error| format!("failed to list destinations: {error}"))?;

    if destinations.is_empty() {
        println!("no destinations found");
        return Ok(());
    }

    for destination in destinations {
        println!("destination_id: {}", destination.id);
        println!("name: {}", destination.name);
        println!("description: {}", destination.description);
        println!(
            "image_url: {}",
            if destination.image_url.is_empty() {
                "none"
            } else {
                &destination.image_url
            }
        );
        println!("price: {}", destination.price);
        println!("updated_at: {}", destination.updated_at);
        println!();
    }

    Ok(())
}
