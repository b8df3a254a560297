//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `budgets` - Budget commands (list, set, status)
//! - `core` - Shared utilities (open_stores) plus init and seed
//! - `expenses` - Expense commands (add, list, filter, delete)
//! - `reports` - Spending summary
//! - `serve` - Web server command

pub mod budgets;
pub mod core;
pub mod expenses;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use budgets::*;
pub use core::*;
pub use expenses::*;
pub use reports::*;
pub use serve::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
