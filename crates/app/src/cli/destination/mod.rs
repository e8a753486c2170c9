use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct DestinationCommand {
    #[command(subcommand)]
    command: DestinationSubcommand,
}

#[derive(Debug, Subcommand)]
enum DestinationSubcommand {
    Create(create::CreateDestinationArgs),
    List(list::ListDestinationsArgs),
}

pub(crate) async fn run(command: DestinationCommand) -> Result<(), String> {
    match command.command {
        DestinationSubcommand::Create(args) => create::run(args).await,
        DestinationSubcommand::List(args) => list::run(args).await,
    }
}
