//! CementCycle catalog seeder
//!
//! Seeds a document store with the sample catalog of the CementCycle
//! waste-to-cement marketplace: waste listings, cement plant requirements,
//! users, matches, price history, aggregate metrics and notification templates.
//!
//! # Example
//!
//! ```no_run
//! use cementcycle_seeder::prelude::*;
//!
//! # async fn run() -> Result<(), Error> {
//! let config = SeederConfig::load("config.json");
//! let store = InMemoryStore::new();
//! let mut seeder = Seeder::new(store, RunContext::new(config), RandomSampler::from_entropy());
//!
//! let report = seeder.initialize_all_data().await?;
//! println!("{} documents written", report.total_written());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod model;
pub mod seeder;
pub mod store;

/// A convenience module for common imports
pub mod prelude {
    pub use crate::catalog::{FixedSampler, MarketSampler, RandomSampler};
    pub use crate::config::{SeederConfig, StoreOptions};
    pub use crate::context::RunContext;
    pub use crate::error::Error;
    pub use crate::seeder::{SeedReport, Seeder, Step};
    pub use crate::store::{DocumentStore, InMemoryStore, PostgrestStore};
}
