use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, MarketCondition, QualityGrade, WasteType};
use crate::error::{Error, Result};

/// One historical price observation. Append-only, no key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub material: WasteType,
    pub price_per_ton: u32,
    pub region: String,
    pub quality_grade: QualityGrade,
    pub timestamp: DateTime<Utc>,
    pub market_conditions: MarketCondition,
}

impl Document for PriceRecord {
    const COLLECTION: &'static str = "price_history";

    fn key(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if self.price_per_ton == 0 {
            return Err(Error::validation(format!(
                "price record for {} at {}: price_per_ton is zero",
                self.material, self.timestamp
            )));
        }
        Ok(())
    }
}
