//! HashMap-backed document store for tests and dry runs.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::DocumentStore;
use crate::error::{Error, Result};

#[derive(Default)]
struct Collection {
    keyed: BTreeMap<String, Value>,
    rows: Vec<Value>,
}

impl Collection {
    fn len(&self) -> usize {
        self.keyed.len() + self.rows.len()
    }
}

#[derive(Default)]
struct State {
    collections: HashMap<String, Collection>,
    /// Collections whose writes are rejected, with the rejection message
    failing: HashMap<String, String>,
}

/// In-memory document store. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every later write to `collection` with `message`
    pub fn fail_on(&self, collection: &str, message: &str) {
        if let Ok(mut state) = self.state.write() {
            state
                .failing
                .insert(collection.to_string(), message.to_string());
        }
    }

    /// Names of collections holding at least one document, sorted
    pub fn collections(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| {
                let mut names: Vec<String> = state
                    .collections
                    .iter()
                    .filter(|(_, c)| c.len() > 0)
                    .map(|(name, _)| name.clone())
                    .collect();
                names.sort();
                names
            })
            .unwrap_or_default()
    }

    /// Unkeyed rows of a collection, in insertion order
    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.collections.get(collection).map(|c| c.rows.clone()))
            .unwrap_or_default()
    }

    fn write_with<F>(&self, collection: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Collection),
    {
        let mut state = self
            .state
            .write()
            .map_err(|_| Error::write(collection, "lock poisoned"))?;

        if let Some(message) = state.failing.get(collection) {
            return Err(Error::write(collection, message));
        }

        f(state.collections.entry(collection.to_string()).or_default());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        self.write_with(collection, |c| {
            c.keyed.insert(id.to_string(), document);
        })
    }

    async fn append(&self, collection: &str, document: Value) -> Result<()> {
        self.write_with(collection, |c| c.rows.push(document))
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let state = self
            .state
            .read()
            .map_err(|_| Error::store("lock poisoned"))?;

        Ok(state
            .collections
            .get(collection)
            .and_then(|c| c.keyed.get(id).cloned()))
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        let state = self
            .state
            .read()
            .map_err(|_| Error::store("lock poisoned"))?;

        Ok(state.collections.get(collection).map_or(0, Collection::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_upsert_replaces_whole_document() {
        let store = InMemoryStore::new();
        store
            .upsert("users", "u1", json!({ "name": "a", "extra": true }))
            .await
            .unwrap();
        store.upsert("users", "u1", json!({ "name": "b" })).await.unwrap();

        assert_eq!(store.count("users").await.unwrap(), 1);
        // no merge: "extra" is gone
        assert_eq!(store.get("users", "u1").await.unwrap(), Some(json!({ "name": "b" })));
    }

    #[tokio::test]
    async fn test_append_accumulates() {
        let store = InMemoryStore::new();
        store.append("price_history", json!({ "p": 1 })).await.unwrap();
        store.append("price_history", json!({ "p": 1 })).await.unwrap();

        assert_eq!(store.count("price_history").await.unwrap(), 2);
        assert_eq!(store.rows("price_history").len(), 2);
        assert_eq!(store.get("price_history", "p").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_fail_on_rejects_writes() {
        let store = InMemoryStore::new();
        store.fail_on("users", "quota exceeded");

        let err = store.upsert("users", "u1", json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Write { ref collection, .. } if collection == "users"));
        assert!(store.append("matches", json!({})).await.is_ok());
        assert_eq!(store.collections(), vec!["matches".to_string()]);
    }
}
