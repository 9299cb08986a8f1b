//! Typed documents of the marketplace catalog
//!
//! Field names follow the document shape the marketplace's cloud functions
//! read, so nested Rust structs are flattened where the stored document is flat.

mod listing;
mod matches;
mod metrics;
mod notification;
mod price;
mod requirement;
mod types;
mod user;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use listing::*;
pub use matches::*;
pub use metrics::*;
pub use notification::*;
pub use price::*;
pub use requirement::*;
pub use types::*;
pub use user::*;

/// A record that the seeder writes into a collection.
pub trait Document: Serialize {
    /// Logical collection name, resolved to a physical one through the config
    const COLLECTION: &'static str;

    /// Key of the document, `None` for append-only collections
    fn key(&self) -> Option<&str>;

    /// Check the record's invariants
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// One-line description reported when the document is written
    fn summary(&self) -> Option<String> {
        None
    }
}

/// Contact block of a supplier or plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub company: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

/// City and state, stored flat as `location` / `state`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "location")]
    pub city: String,
    pub state: String,
}

impl Location {
    pub fn new(city: &str, state: &str) -> Self {
        Self {
            city: city.to_string(),
            state: state.to_string(),
        }
    }
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
