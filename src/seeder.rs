//! Seeding run orchestration
//!
//! A run walks the nine [`Step`]s in [`Step::ORDER`]. The first failing step
//! aborts the run; collections written by earlier steps are left in place,
//! so a failed run can leave the store partially seeded.

use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{error, info};

use crate::catalog::{self, MarketSampler};
use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::model::{CementRequirement, Document, Match, WasteListing};
use crate::store::DocumentStore;

/// One collection-initialization step of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    WasteListings,
    CementRequirements,
    Users,
    ImpactMetrics,
    PriceHistory,
    MarketIntelligence,
    Matches,
    PlatformMetrics,
    NotificationTemplates,
}

impl Step {
    /// Execution order. Matches run after the listings and requirements they reference.
    pub const ORDER: [Step; 9] = [
        Step::WasteListings,
        Step::CementRequirements,
        Step::Users,
        Step::ImpactMetrics,
        Step::PriceHistory,
        Step::MarketIntelligence,
        Step::Matches,
        Step::PlatformMetrics,
        Step::NotificationTemplates,
    ];

    /// Logical collection the step writes
    pub fn collection(&self) -> &'static str {
        match self {
            Step::WasteListings => "waste_listings",
            Step::CementRequirements => "cement_requirements",
            Step::Users => "users",
            Step::ImpactMetrics => "impact_metrics",
            Step::PriceHistory => "price_history",
            Step::MarketIntelligence => "market_intelligence",
            Step::Matches => "matches",
            Step::PlatformMetrics => "platform_metrics",
            Step::NotificationTemplates => "notification_templates",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Outcome of one completed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    /// Physical collection written
    pub collection: String,
    pub written: usize,
}

/// Completed steps of a run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub steps: Vec<StepReport>,
}

impl SeedReport {
    /// Documents written across all completed steps
    pub fn total_written(&self) -> usize {
        self.steps.iter().map(|s| s.written).sum()
    }

    /// Documents written by `step`, `None` if it did not complete
    pub fn written(&self, step: Step) -> Option<usize> {
        self.steps.iter().find(|s| s.step == step).map(|s| s.written)
    }
}

/// Seeds a [`DocumentStore`] with the sample catalog
pub struct Seeder<S, M> {
    store: S,
    ctx: RunContext,
    sampler: M,
    /// Keys written during the current run, per logical collection
    seeded: HashMap<&'static str, HashSet<String>>,
}

impl<S: DocumentStore, M: MarketSampler> Seeder<S, M> {
    /// Create a seeder writing into `store`
    pub fn new(store: S, ctx: RunContext, sampler: M) -> Self {
        Self {
            store,
            ctx,
            sampler,
            seeded: HashMap::new(),
        }
    }

    /// Context of the current run
    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the seeder and hand back its store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Run every step in order, stopping at the first error.
    ///
    /// Nothing is rolled back on failure.
    pub async fn initialize_all_data(&mut self) -> Result<SeedReport> {
        self.seeded.clear();
        let mut report = SeedReport::default();

        for step in Step::ORDER {
            match self.seed(step).await {
                Ok(written) => report.steps.push(StepReport {
                    step,
                    collection: self.ctx.collection(step.collection()).to_string(),
                    written,
                }),
                Err(e) => {
                    let completed: Vec<String> =
                        report.steps.iter().map(|s| s.step.to_string()).collect();
                    error!(
                        step = %step,
                        error = %e,
                        completed = ?completed,
                        "seeding aborted, earlier collections are left as written"
                    );
                    return Err(e);
                }
            }
        }

        info!(
            steps = report.steps.len(),
            documents = report.total_written(),
            "all sample data initialized"
        );
        Ok(report)
    }

    /// Run a single step and return the number of documents written
    pub async fn seed(&mut self, step: Step) -> Result<usize> {
        info!(step = %step, "initializing");

        let written = match step {
            Step::WasteListings => {
                let listings = catalog::waste_listings(&self.ctx);
                self.write_all(&listings).await?
            }
            Step::CementRequirements => {
                let requirements = catalog::cement_requirements(&self.ctx);
                self.write_all(&requirements).await?
            }
            Step::Users => {
                let users = catalog::users(&self.ctx);
                self.write_all(&users).await?
            }
            Step::ImpactMetrics => {
                let metrics = [catalog::impact_metrics(&self.ctx)];
                self.write_all(&metrics).await?
            }
            Step::PriceHistory => {
                let history = catalog::price_history(&self.ctx, &mut self.sampler);
                self.write_all(&history).await?
            }
            Step::MarketIntelligence => {
                let market = [catalog::market_intelligence(&self.ctx)];
                self.write_all(&market).await?
            }
            Step::Matches => {
                let matches = catalog::matches(&self.ctx);
                self.check_references(&matches)?;
                self.write_all(&matches).await?
            }
            Step::PlatformMetrics => {
                let metrics = [catalog::platform_metrics(&self.ctx)];
                self.write_all(&metrics).await?
            }
            Step::NotificationTemplates => {
                let templates = catalog::notification_templates();
                self.write_all(&templates).await?
            }
        };

        info!(
            step = %step,
            collection = self.ctx.collection(step.collection()),
            count = written,
            "initialized"
        );
        Ok(written)
    }

    /// Every match must point at a listing and a requirement seeded earlier in this run
    fn check_references(&self, matches: &[Match]) -> Result<()> {
        let empty = HashSet::new();
        let listings = self
            .seeded
            .get(WasteListing::COLLECTION)
            .unwrap_or(&empty);
        let requirements = self
            .seeded
            .get(CementRequirement::COLLECTION)
            .unwrap_or(&empty);

        for m in matches {
            if !listings.contains(&m.waste_id) {
                return Err(Error::DanglingReference {
                    match_id: m.id.clone(),
                    kind: "waste listing",
                    target: m.waste_id.clone(),
                });
            }
            if !requirements.contains(&m.requirement_id) {
                return Err(Error::DanglingReference {
                    match_id: m.id.clone(),
                    kind: "cement requirement",
                    target: m.requirement_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate every document, then write them one by one
    async fn write_all<D>(&mut self, docs: &[D]) -> Result<usize>
    where
        D: Document,
    {
        for doc in docs {
            doc.validate()?;
        }

        let collection = self.ctx.collection(D::COLLECTION).to_string();
        for doc in docs {
            let value = serde_json::to_value(doc)?;
            match doc.key() {
                Some(id) => {
                    self.store.upsert(&collection, id, value).await?;
                    self.seeded
                        .entry(D::COLLECTION)
                        .or_default()
                        .insert(id.to_string());
                }
                None => self.store.append(&collection, value).await?,
            }

            if let Some(summary) = doc.summary() {
                info!("  added {}", summary);
            }
        }

        Ok(docs.len())
    }
}
