use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, MatchStatus};
use crate::error::{Error, Result};

/// Agreement pairing a waste listing with a plant requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub waste_id: String,
    pub requirement_id: String,
    pub status: MatchStatus,
    /// 0-100
    pub match_score: u8,
    pub quantity_agreed: u64,
    pub price_agreed: u64,
    pub total_value: u64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub co2_savings_achieved: f64,
}

impl Match {
    /// Value implied by the agreed quantity and price, `None` on overflow
    pub fn expected_total(&self) -> Option<u64> {
        self.quantity_agreed.checked_mul(self.price_agreed)
    }
}

impl Document for Match {
    const COLLECTION: &'static str = "matches";

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn summary(&self) -> Option<String> {
        Some(format!("match {} ({})", self.id, self.status.as_str()))
    }

    fn validate(&self) -> Result<()> {
        if self.match_score > 100 {
            return Err(Error::validation(format!(
                "match {}: score {} above 100",
                self.id, self.match_score
            )));
        }
        match self.expected_total() {
            Some(total) if total == self.total_value => {}
            Some(_) => {
                return Err(Error::validation(format!(
                    "match {}: total_value {} != {} x {}",
                    self.id, self.total_value, self.quantity_agreed, self.price_agreed
                )))
            }
            None => {
                return Err(Error::validation(format!(
                    "match {}: {} x {} overflows",
                    self.id, self.quantity_agreed, self.price_agreed
                )))
            }
        }
        if let Some(completed_at) = self.completed_at {
            if completed_at < self.created_at {
                return Err(Error::validation(format!(
                    "match {}: completed before it was created",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
