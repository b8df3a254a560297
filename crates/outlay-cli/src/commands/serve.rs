//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::open_stores;

pub async fn cmd_serve(
    data_dir: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting Outlay web server...");
    println!("   Data directory: {}", data_dir.display());
    println!("   Listening: http://{}:{}", host, port);
    println!("   Dashboard: http://{}:{}/dashboard", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let stores = open_stores(data_dir)?;

    // Allowed CORS origins from environment (comma-separated)
    let allowed_origins: Vec<String> = std::env::var("OUTLAY_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let config = outlay_server::ServerConfig { allowed_origins };

    let static_dir_str =
        static_dir.map(|p| p.to_str().expect("static_dir path must be valid UTF-8"));
    outlay_server::serve_with_config(
        stores.expenses,
        stores.budgets,
        host,
        port,
        static_dir_str,
        config,
    )
    .await?;

    Ok(())
}
