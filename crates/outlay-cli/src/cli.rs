//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track expenses against category budgets
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Flat-file expense tracker with budgets and a web dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding expenses.csv and budgets.json
    #[arg(long, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data files
    Init,

    /// Record a new expense
    Add {
        /// Amount spent
        #[arg(short, long)]
        amount: f64,

        /// Category (e.g. Food, Transport)
        #[arg(short, long)]
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// What the money went on
        #[arg(long, default_value = "")]
        description: String,

        /// Tags (comma-separated, e.g. lunch,work)
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List all expenses
    List,

    /// Filter expenses by category and/or tag
    Filter {
        /// Exact category to match
        #[arg(short, long)]
        category: Option<String>,

        /// Tag the expense must carry
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID
        id: i64,
    },

    /// Manage category budgets (list, set, status)
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Show spending totals by category
    Summary,

    /// Load sample expenses and starter budgets into empty stores
    Seed,

    /// Start the web server and dashboard
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing extra static files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// Set budget limits from CATEGORY=LIMIT pairs
    Set {
        /// Pairs like Food=500 Transport=150
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Show spending against each budget
    Status,
}
