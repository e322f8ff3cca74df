mod classifier;
mod cli;
mod describer;
mod error;
mod fmt;
mod ledger;
mod models;
mod pipeline;
mod reconciler;
mod refdata;
mod settings;
mod spread;

use clap::Parser;

use cli::{Cli, Commands, RefdataCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest { files, out } => cli::ingest::run(&files, out.as_deref()),
        Commands::Classify { text, file } => cli::classify::run(&text, &file),
        Commands::Check { file, apply } => cli::check::run(&file, apply),
        Commands::Post { file } => cli::post::run(&file),
        Commands::Refdata { command } => match command {
            RefdataCommands::Suppliers => cli::refdata::suppliers(),
            RefdataCommands::Accounts => cli::refdata::accounts(),
            RefdataCommands::Vat => cli::refdata::vat(),
        },
        Commands::Demo => cli::demo::run(),
        Commands::Config { user, refdata } => cli::config::run(user.as_deref(), refdata.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
