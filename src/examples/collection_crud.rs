//! Collection CRUD Example
//!
//! Shows document operations against one collection: add a document,
//! read it back, update it, then delete it.
//!
//! Run with: OBJECTROCKET_API_KEY=<key> cargo run --example collection_crud

use objectrocket_rs::{Client, Document};
use serde_json::json;

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("OBJECTROCKET_API_KEY")?;
    let client = Client::new(api_key)?;

    let db = client
        .list_databases(Some("test"))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no database named 'test' on this instance"))?;

    // Collection handles are built locally; the first request happens
    // on the operation call below
    let users = db.collection("users");

    users.add(&doc(json!({"login": "mthompson", "active": true}))).await?;
    println!("📝 Added one document to {}.{}", users.database(), users.name());

    let found = users.get(Some(&doc(json!({"login": "mthompson"})))).await?;
    println!("🔍 Matched {} document(s)", found.len());

    users
        .update(&doc(json!({"login": "mthompson", "active": false})))
        .await?;

    users.delete(Some(&doc(json!({"login": "mthompson"})))).await?;
    println!("🗑  Cleaned up");

    Ok(())
}
