//! ObjectRocket Client Library
//!
//! HTTP client for the ObjectRocket hosted MongoDB management API.
//!
//! ```rust,no_run
//! use objectrocket_rs::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), objectrocket_rs::ClientError> {
//!     let client = Client::new("f8f0f3c679dd8b43e9ba934f4447e0cc")?;
//!     for db in client.list_databases(Some("test")).await? {
//!         let docs = db.collection("entries").get(None).await?;
//!         println!("{}: {} documents", db.name(), docs.len());
//!     }
//!     Ok(())
//! }
//! ```

mod acl;
mod client;
mod collection;
mod database;

pub use acl::Acl;
pub use client::Client;
pub use collection::Collection;
pub use database::Database;
pub use objectrocket_core::{AclInfo, ApiEnvelope, Config, DatabaseInfo, Document};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("no API key provided")]
    MissingApiKey,

    #[error("authentication rejected: {status} - {message}")]
    Auth { status: u16, message: String },

    #[error("service error: {status} - {message}")]
    Service { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API returned rc {rc}: {message}")]
    Api { rc: i64, message: String },

    #[error("invalid response from server")]
    InvalidResponse,
}

pub type Result<T> = std::result::Result<T, ClientError>;
