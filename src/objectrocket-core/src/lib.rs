//! ObjectRocket Core Library
//!
//! This crate provides the shared types for the ObjectRocket client SDK,
//! including:
//! - The response envelope used by every API endpoint
//! - Resource descriptors for databases and access-control entries
//! - Unstructured document payloads
//! - Client configuration

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
