//! Database Listing Example
//!
//! A minimal example showing how to discover hosted databases.
//!
//! Run with: OBJECTROCKET_API_KEY=<key> cargo run --example list_databases

use objectrocket_rs::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("OBJECTROCKET_API_KEY")?;
    let client = Client::new(api_key)?;

    println!("Databases on this instance:\n");
    for db in client.list_databases(None).await? {
        println!("  {}", db.name());
    }

    // Exact-name filtering happens client side; an unmatched name
    // yields an empty list rather than an error
    let matched = client.list_databases(Some("test")).await?;
    println!("\nDatabases named 'test': {}", matched.len());

    Ok(())
}
