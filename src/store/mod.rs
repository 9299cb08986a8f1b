//! Document stores the seeder writes into

mod memory;
mod postgrest;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use memory::InMemoryStore;
pub use postgrest::PostgrestStore;

/// A store of JSON documents grouped into named collections.
///
/// Collection names passed here are physical names, already resolved
/// through the configuration.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` under `id`, fully replacing any existing document
    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()>;

    /// Add `document` as a new unkeyed row
    async fn append(&self, collection: &str, document: Value) -> Result<()>;

    /// Fetch a keyed document
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Number of documents in a collection, keyed and unkeyed
    async fn count(&self, collection: &str) -> Result<usize>;
}
