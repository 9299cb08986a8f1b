//! Singleton documents holding rolled-up platform numbers.
//!
//! Each lives under the fixed key [`SINGLETON_KEY`] of its collection and is
//! overwritten on every run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Document;
use crate::error::{Error, Result};

/// Key shared by every singleton metrics document
pub const SINGLETON_KEY: &str = "current";

fn non_negative(doc: &str, values: &[(&str, f64)]) -> Result<()> {
    match values.iter().find(|(_, value)| value.is_nan() || *value < 0.0) {
        Some((name, value)) => Err(Error::validation(format!(
            "{}: {} must be non-negative, got {}",
            doc, name, value
        ))),
        None => Ok(()),
    }
}

/// Environmental impact of the marketplace so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetrics {
    pub id: String,
    pub total_co2_saved: f64,
    pub total_waste_processed: f64,
    pub total_revenue_generated: u64,
    pub total_matches_created: u32,
    pub active_suppliers: u32,
    pub active_buyers: u32,
    pub monthly_growth: MonthlyGrowth,
    pub quarterly_targets: QuarterlyTargets,
    pub timestamp: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Month-over-month growth, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub co2_savings: f64,
    pub waste_volume: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyTargets {
    pub co2_savings: f64,
    pub waste_volume: f64,
    pub new_suppliers: u32,
}

impl Document for ImpactMetrics {
    const COLLECTION: &'static str = "impact_metrics";

    fn key(&self) -> Option<&str> {
        Some(SINGLETON_KEY)
    }

    fn validate(&self) -> Result<()> {
        non_negative(
            "impact metrics",
            &[
                ("total_co2_saved", self.total_co2_saved),
                ("total_waste_processed", self.total_waste_processed),
                ("monthly_growth.co2_savings", self.monthly_growth.co2_savings),
                ("monthly_growth.waste_volume", self.monthly_growth.waste_volume),
                ("monthly_growth.revenue", self.monthly_growth.revenue),
                ("quarterly_targets.co2_savings", self.quarterly_targets.co2_savings),
                ("quarterly_targets.waste_volume", self.quarterly_targets.waste_volume),
            ],
        )
    }
}

/// Market-wide sentiment snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIntelligence {
    pub id: String,
    pub overall_market: OverallMarket,
    pub timestamp: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMarket {
    pub growth_rate: f64,
    pub market_sentiment: String,
    pub demand_level: String,
    pub supply_constraints: String,
}

impl Document for MarketIntelligence {
    const COLLECTION: &'static str = "market_intelligence";

    fn key(&self) -> Option<&str> {
        Some(SINGLETON_KEY)
    }

    fn validate(&self) -> Result<()> {
        non_negative(
            "market intelligence",
            &[("overall_market.growth_rate", self.overall_market.growth_rate)],
        )
    }
}

/// Operational health of the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub id: String,
    pub operational_metrics: OperationalMetrics,
    pub timestamp: DateTime<Utc>,
    pub last_calculated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalMetrics {
    pub uptime_percentage: f64,
    pub avg_response_time_ms: u32,
    pub successful_matches_rate: f64,
    pub user_satisfaction: f64,
}

impl Document for PlatformMetrics {
    const COLLECTION: &'static str = "platform_metrics";

    fn key(&self) -> Option<&str> {
        Some(SINGLETON_KEY)
    }

    fn validate(&self) -> Result<()> {
        let ops = &self.operational_metrics;
        non_negative(
            "platform metrics",
            &[
                ("uptime_percentage", ops.uptime_percentage),
                ("successful_matches_rate", ops.successful_matches_rate),
                ("user_satisfaction", ops.user_satisfaction),
            ],
        )?;
        if ops.uptime_percentage > 100.0 || ops.successful_matches_rate > 100.0 {
            return Err(Error::validation("platform metrics: percentage above 100"));
        }
        Ok(())
    }
}
