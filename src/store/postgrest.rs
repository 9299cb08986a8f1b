//! Document store on top of the PostgREST API.
//!
//! Each collection is a table with an `id text primary key` column and a
//! `data jsonb` column. Unkeyed rows leave `id` to the table default.

use async_trait::async_trait;
use reqwest::header::CONTENT_RANGE;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::DocumentStore;
use crate::config::StoreOptions;
use crate::error::{Error, Result};
use crate::fetch::RestCall;

#[derive(Debug, Deserialize)]
struct Row {
    data: Value,
}

/// Total from a `Content-Range` value such as `0-24/1200` or `*/0`
fn content_range_total(range: &str) -> Option<usize> {
    let (_, total) = range.split_once('/')?;
    total.trim().parse().ok()
}

/// Remote document store speaking PostgREST
pub struct PostgrestStore {
    options: StoreOptions,
    client: Client,
}

impl PostgrestStore {
    /// Create the store and its HTTP client. The client is reused for every request.
    pub fn new(options: StoreOptions) -> Result<Self> {
        if options.url.is_empty() {
            return Err(Error::config("store URL is empty"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            options,
            client: builder.build()?,
        })
    }

    /// Get the REST URL of a table
    fn table_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.options.url, collection)
    }

    fn authorize<'a>(&self, call: RestCall<'a>) -> RestCall<'a> {
        let call = call
            .header("apikey", &self.options.key)
            .bearer_auth(&self.options.key)
            .header("X-Client-Info", "cementcycle-seeder/0.2.0");

        if self.options.db_schema == "public" {
            call
        } else {
            call.header("Accept-Profile", &self.options.db_schema)
                .header("Content-Profile", &self.options.db_schema)
        }
    }

    fn read(&self, collection: &str) -> Result<RestCall<'_>> {
        let call = RestCall::get(&self.client, &self.table_url(collection))?;
        Ok(self.authorize(call))
    }

    /// POST `body` into a table. Any failure is reported against the collection.
    async fn write(&self, collection: &str, prefer: &str, upsert: bool, body: Value) -> Result<()> {
        let call = RestCall::post(&self.client, &self.table_url(collection))
            .map_err(|e| Error::write(collection, e))?;
        let mut call = self.authorize(call).header("Prefer", prefer).json(body);
        if upsert {
            call = call.param("on_conflict", "id");
        }

        match call.send().await {
            Ok(_) => Ok(()),
            Err(Error::Store(message)) => Err(Error::write(collection, message)),
            Err(e) => Err(Error::write(collection, e)),
        }
    }
}

#[async_trait]
impl DocumentStore for PostgrestStore {
    async fn upsert(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        debug!(collection, id, "upsert");
        let body = json!({ "id": id, "data": document });
        self.write(collection, "resolution=merge-duplicates", true, body)
            .await
    }

    async fn append(&self, collection: &str, document: Value) -> Result<()> {
        debug!(collection, "append");
        let body = json!({ "data": document });
        self.write(collection, "return=minimal", false, body).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let rows: Vec<Row> = self
            .read(collection)?
            .param("select", "data")
            .param("id", &format!("eq.{}", id))
            .fetch()
            .await?;

        Ok(rows.into_iter().next().map(|row| row.data))
    }

    /// Exact row count from the `Content-Range` total, unaffected by `max-rows`
    async fn count(&self, collection: &str) -> Result<usize> {
        let response = self
            .read(collection)?
            .header("Prefer", "count=exact")
            .param("select", "id")
            .param("limit", "1")
            .send()
            .await?;

        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                Error::store(format!("{}: response has no Content-Range", collection))
            })?;

        content_range_total(range).ok_or_else(|| {
            Error::store(format!("{}: unexpected Content-Range '{}'", collection, range))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_range_total() {
        assert_eq!(content_range_total("0-24/1200"), Some(1200));
        assert_eq!(content_range_total("*/0"), Some(0));
        assert_eq!(content_range_total("0-24/*"), None);
        assert_eq!(content_range_total("garbage"), None);
    }
}
