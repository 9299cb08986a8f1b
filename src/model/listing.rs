use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Contact, Document, ListingStatus, Location, QualityGrade, WasteType};
use crate::error::{Error, Result};

/// Waste material offered by a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteListing {
    pub id: String,
    #[serde(rename = "type")]
    pub waste_type: WasteType,
    #[serde(rename = "type_display")]
    pub display_name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(flatten)]
    pub origin: Location,
    #[serde(flatten)]
    pub supplier: Contact,
    pub quality_grade: QualityGrade,
    pub quality_certifications: Vec<String>,
    /// Oxide (or loss on ignition) to mass percentage
    pub chemical_composition: BTreeMap<String, f64>,
    pub physical_properties: PhysicalProperties,
    pub price_expected: u32,
    pub price_negotiable: bool,
    pub available_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub co2_savings_potential: f64,
    pub status: ListingStatus,
    #[serde(flatten)]
    pub logistics: ListingLogistics,
    pub testing_reports_available: bool,
    pub environmental_clearance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub seasonal_availability: String,
    pub production_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Blaine fineness, m²/kg
    pub fineness: f64,
    pub specific_gravity: f64,
    pub moisture_content: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingLogistics {
    pub storage_location: String,
    pub transportation: String,
    pub pickup_preference: String,
    pub minimum_order: f64,
    pub packaging: String,
}

impl Document for WasteListing {
    const COLLECTION: &'static str = "waste_listings";

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{} - {} {}", self.display_name, self.quantity, self.unit))
    }

    fn validate(&self) -> Result<()> {
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(Error::validation(format!(
                "listing {}: quantity must be positive, got {}",
                self.id, self.quantity
            )));
        }
        if self.expiry_date <= self.available_date {
            return Err(Error::validation(format!(
                "listing {}: expiry_date must be after available_date",
                self.id
            )));
        }
        let minimum_order = self.logistics.minimum_order;
        if minimum_order.is_nan() || minimum_order > self.quantity {
            return Err(Error::validation(format!(
                "listing {}: minimum_order {} exceeds quantity {}",
                self.id, minimum_order, self.quantity
            )));
        }
        if let Some((oxide, pct)) = self
            .chemical_composition
            .iter()
            .find(|(_, pct)| pct.is_nan() || **pct < 0.0)
        {
            return Err(Error::validation(format!(
                "listing {}: negative {} percentage {}",
                self.id, oxide, pct
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::waste_listings;
    use crate::config::SeederConfig;
    use crate::context::RunContext;

    fn fly_ash() -> WasteListing {
        let ctx = RunContext::new(SeederConfig::default());
        waste_listings(&ctx).remove(0)
    }

    fn rejected(listing: &WasteListing) -> bool {
        matches!(listing.validate(), Err(Error::Validation(_)))
    }

    #[test]
    fn test_quantity_must_be_positive_and_finite() {
        for quantity in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut listing = fly_ash();
            listing.quantity = quantity;
            assert!(rejected(&listing), "quantity {} accepted", quantity);
        }
    }

    #[test]
    fn test_expiry_must_follow_availability() {
        let mut listing = fly_ash();
        listing.expiry_date = listing.available_date;
        assert!(rejected(&listing));
    }

    #[test]
    fn test_minimum_order_bounded_by_quantity() {
        let mut listing = fly_ash();
        listing.logistics.minimum_order = listing.quantity + 1.0;
        assert!(rejected(&listing));

        listing.logistics.minimum_order = f64::NAN;
        assert!(rejected(&listing));

        listing.logistics.minimum_order = listing.quantity;
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn test_composition_rejects_negative_and_nan() {
        let mut listing = fly_ash();
        listing.chemical_composition.insert("cao".to_string(), -0.1);
        assert!(rejected(&listing));

        listing.chemical_composition.insert("cao".to_string(), f64::NAN);
        assert!(rejected(&listing));
    }
}
