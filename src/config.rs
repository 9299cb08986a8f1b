//! Configuration for the seeder: the collection mapping file and store options

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Logical collections that the built-in mapping always names
pub const DEFAULT_COLLECTIONS: [&str; 5] = [
    "waste_listings",
    "cement_requirements",
    "matches",
    "users",
    "transactions",
];

/// Seeder configuration as read from `config.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeederConfig {
    /// Project identifier, only used for reporting
    #[serde(rename = "projectId", default = "default_project_id")]
    pub project_id: String,

    /// Database section
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// The `database` section of the configuration file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseConfig {
    /// Logical collection name to physical collection name
    #[serde(default = "default_collections")]
    pub collections: BTreeMap<String, String>,
}

fn default_project_id() -> String {
    "default".to_string()
}

fn default_collections() -> BTreeMap<String, String> {
    DEFAULT_COLLECTIONS
        .iter()
        .map(|name| (name.to_string(), name.to_string()))
        .collect()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            collections: default_collections(),
        }
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            database: DatabaseConfig::default(),
        }
    }
}

impl SeederConfig {
    /// Load the configuration from `path`.
    ///
    /// A missing, unreadable or malformed file is not an error: the built-in
    /// mapping is returned and a warning is logged.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "config not found, using default configuration"
                );
                return Self::default();
            }
        };

        match serde_json::from_str::<SeederConfig>(&raw) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "config unreadable, using default configuration"
                );
                Self::default()
            }
        }
    }

    /// Physical collection name for a logical one; unmapped names map to themselves
    pub fn collection<'a>(&'a self, logical: &'a str) -> &'a str {
        self.database
            .collections
            .get(logical)
            .map(String::as_str)
            .unwrap_or(logical)
    }
}

/// Connection options for a remote document store
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// The base URL of the project
    pub url: String,

    /// The API key sent with every request
    pub key: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// The database schema
    pub db_schema: String,
}

impl StoreOptions {
    /// Create options for the project at `url`
    pub fn new(url: &str, key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            db_schema: "public".to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the database schema
    pub fn with_db_schema(mut self, value: &str) -> Self {
        self.db_schema = value.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SeederConfig::load(dir.path().join("nope.json"));

        let expected: BTreeMap<String, String> = [
            ("waste_listings", "waste_listings"),
            ("cement_requirements", "cement_requirements"),
            ("matches", "matches"),
            ("users", "users"),
            ("transactions", "transactions"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(config.database.collections, expected);
        assert_eq!(config.project_id, "default");
    }

    #[test]
    fn test_load_custom_mapping() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"projectId": "cementcycle-demo",
                "database": {{"collections": {{
                    "waste_listings": "wl_prod",
                    "users": "people"
                }}}}}}"#
        )
        .unwrap();

        let config = SeederConfig::load(file.path());
        assert_eq!(config.project_id, "cementcycle-demo");
        assert_eq!(config.collection("waste_listings"), "wl_prod");
        assert_eq!(config.collection("users"), "people");
        // not in the file, so it maps to itself
        assert_eq!(config.collection("matches"), "matches");
        assert_eq!(config.collection("price_history"), "price_history");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert_eq!(SeederConfig::load(file.path()), SeederConfig::default());
    }

    #[test]
    fn test_store_options_builder() {
        let options = StoreOptions::new("https://example.supabase.co/", "anon")
            .with_request_timeout(None)
            .with_db_schema("seed");

        assert_eq!(options.url, "https://example.supabase.co");
        assert_eq!(options.request_timeout, None);
        assert_eq!(options.db_schema, "seed");
    }
}
