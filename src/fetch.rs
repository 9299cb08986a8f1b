//! Request plumbing for the PostgREST document store

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// One REST call against a table endpoint.
///
/// The target URL is parsed up front, so query parameters are appended
/// already encoded.
pub struct RestCall<'a> {
    client: &'a Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Value>,
}

impl<'a> RestCall<'a> {
    /// Create a call; fails if `url` does not parse
    pub fn new(client: &'a Client, method: Method, url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client,
            method,
            url: Url::parse(url)?,
            headers,
            body: None,
        })
    }

    /// Create a GET call
    pub fn get(client: &'a Client, url: &str) -> Result<Self> {
        Self::new(client, Method::GET, url)
    }

    /// Create a POST call
    pub fn post(client: &'a Client, url: &str) -> Result<Self> {
        Self::new(client, Method::POST, url)
    }

    /// Set a header. Names or values that are not valid HTTP are dropped.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add bearer token authentication
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Append a query parameter, e.g. `("id", "eq.w001")`
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// Set the JSON body
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Send the call and fail on any non-2xx status, keeping the response body as the reason
    pub async fn send(self) -> Result<Response> {
        let mut req = self
            .client
            .request(self.method, self.url)
            .headers(self.headers);
        if let Some(body) = &self.body {
            req = req.body(serde_json::to_vec(body)?);
        }

        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        Err(Error::store(format!("status {}: {}", status, text)))
    }

    /// Send the call and decode the JSON response body
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?;
        Ok(response.json::<T>().await?)
    }
}
