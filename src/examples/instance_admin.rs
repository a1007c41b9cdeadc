//! Instance Administration Example
//!
//! Walks the management surface of the API: instance details, server
//! status, space usage, and ACL maintenance. Initializes a tracing
//! subscriber so the SDK's per-request debug events are visible.
//!
//! Run with: OBJECTROCKET_API_KEY=<key> cargo run --example instance_admin

use objectrocket_rs::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("objectrocket_rs=debug")),
        )
        .init();

    let api_key = std::env::var("OBJECTROCKET_API_KEY")?;
    let client = Client::new(api_key)?;

    let details = client.details().await?;
    println!("Instance details: {}", serde_json::to_string_pretty(&details)?);

    let status = client.server_status(false).await?;
    println!("Server status keys: {:?}", status.keys().collect::<Vec<_>>());

    let usage = client.space_usage().await?;
    println!("Space usage: {}", serde_json::to_string_pretty(&usage)?);

    println!("\nACLs:");
    for acl in client.list_acls(None).await? {
        println!("  {} ({})", acl.cidr_mask(), acl.description().unwrap_or("-"));
    }

    let acl = client.add_acl("192.0.2.0/24", "temporary test range").await?;
    println!("Added ACL {}", acl.cidr_mask());
    acl.delete().await?;
    println!("Removed it again");

    Ok(())
}
