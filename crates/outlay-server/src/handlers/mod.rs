//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod budgets;
pub mod expenses;
pub mod pages;
pub mod reports;

// Re-export all handlers for use in router
pub use budgets::*;
pub use expenses::*;
pub use pages::*;
pub use reports::*;
