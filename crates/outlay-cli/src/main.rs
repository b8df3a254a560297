//! Outlay CLI - Flat-file expense tracker
//!
//! Usage:
//!   outlay init                              Create the data files
//!   outlay add --amount 12.50 --category Food  Record an expense
//!   outlay budgets set Food=500              Set a category budget
//!   outlay serve --port 8000                 Start the web dashboard

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.data_dir),
        Commands::Add {
            amount,
            category,
            date,
            description,
            tags,
        } => {
            let stores = commands::open_stores(&cli.data_dir)?;
            commands::cmd_add(
                &stores,
                amount,
                &category,
                date.as_deref(),
                &description,
                &tags,
            )
        }
        Commands::List => {
            let stores = commands::open_stores(&cli.data_dir)?;
            commands::cmd_list(&stores)
        }
        Commands::Filter { category, tag } => {
            let stores = commands::open_stores(&cli.data_dir)?;
            commands::cmd_filter(&stores, category.as_deref(), tag.as_deref())
        }
        Commands::Delete { id } => {
            let stores = commands::open_stores(&cli.data_dir)?;
            commands::cmd_delete(&stores, id)
        }
        Commands::Budgets { action } => {
            let stores = commands::open_stores(&cli.data_dir)?;
            match action {
                None => commands::cmd_budgets_list(&stores),
                Some(BudgetsAction::Set { entries }) => {
                    commands::cmd_budgets_set(&stores, &entries)
                }
                Some(BudgetsAction::Status) => commands::cmd_budgets_status(&stores),
            }
        }
        Commands::Summary => {
            let stores = commands::open_stores(&cli.data_dir)?;
            commands::cmd_summary(&stores)
        }
        Commands::Seed => {
            let stores = commands::open_stores(&cli.data_dir)?;
            commands::cmd_seed(&stores)
        }
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&cli.data_dir, &host, port, static_dir.as_deref()).await,
    }
}
