mod commands;
mod state;

use clap::{Parser, Subcommand};
use commands::{
    allocate::AllocateCommand, create_set::CreateSetCommand, deregister::DeregisterCommand,
    history::HistoryCommand, register::RegisterCommand, settle::SettleCommand,
    slash::SlashCommand, status::StatusCommand,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "talion", long_about = None)]
pub struct Cli {
    /// The command to execute
    #[clap(subcommand)]
    command: Commands,
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "create-set")]
    CreateSet(CreateSetCommand),
    #[command(name = "register")]
    Register(RegisterCommand),
    #[command(name = "deregister")]
    Deregister(DeregisterCommand),
    #[command(name = "allocate")]
    Allocate(AllocateCommand),
    #[command(name = "slash")]
    Slash(SlashCommand),
    #[command(name = "settle")]
    Settle(SettleCommand),
    #[command(name = "status")]
    Status(StatusCommand),
    #[command(name = "history")]
    History(HistoryCommand),
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::CreateSet(command) => command.execute(),
        Commands::Register(command) => command.execute(),
        Commands::Deregister(command) => command.execute(),
        Commands::Allocate(command) => command.execute(),
        Commands::Slash(command) => command.execute(),
        Commands::Settle(command) => command.execute(),
        Commands::Status(command) => command.execute(),
        Commands::History(command) => command.execute(),
    }
}
