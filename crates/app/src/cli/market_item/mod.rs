use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct MarketItemCommand {
    #[command(subcommand)]
    command: MarketItemSubcommand,
}

#[derive(Debug, Subcommand)]
enum MarketItemSubcommand {
    Create(create::CreateMarketItemArgs),
    List(list::ListMarketItemsArgs),
}

pub(crate) async fn run(command: MarketItemCommand) -> Result<(), String> {
    match command.command {
        MarketItemSubcommand::Create(args) => create::run(args).await,
        MarketItemSubcommand::List(args) => list::run(args).await,
    }
}
