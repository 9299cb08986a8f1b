use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Contact, Document, Location, QualityGrade, Urgency, WasteType};
use crate::error::{Error, Result};

/// Raw material demand posted by a cement plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CementRequirement {
    pub id: String,
    pub plant_name: String,
    #[serde(flatten)]
    pub location: Location,
    #[serde(flatten)]
    pub contact: Contact,
    pub materials_needed: Vec<WasteType>,
    pub primary_material: WasteType,
    /// Tons per month
    pub monthly_capacity: f64,
    pub current_inventory: f64,
    pub urgency: Urgency,
    pub price_offered: u32,
    pub price_range: PriceRange,
    pub quality_requirements: QualityRequirements,
    pub delivery_preferences: DeliveryPreferences,
    pub logistics_support: LogisticsSupport,
    pub payment_terms: PaymentTerms,
    pub active: bool,
    pub contract_type: String,
    pub rating: f64,
    pub total_purchases_ytd: f64,
    pub preferred_suppliers: Vec<String>,
    pub compliance_requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_purchase_date: DateTime<Utc>,
    pub sustainability_goals: SustainabilityGoals,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Whether `price` lies within the range, bounds included
    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityRequirements {
    pub grade: QualityGrade,
    pub certifications_required: Vec<String>,
    /// Thresholds keyed `<property>_min` / `<property>_max`
    pub chemical_specs: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPreferences {
    pub method: String,
    pub frequency: String,
    pub lead_time_days: u32,
    pub storage_capacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsSupport {
    pub pickup_available: bool,
    pub transport_provided: bool,
    pub loading_facilities: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub method: String,
    /// Net payment days
    pub days: u32,
    pub advance_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityGoals {
    pub co2_reduction_target: f64,
    pub waste_utilization_target: f64,
    pub circular_economy_certified: bool,
}

impl Document for CementRequirement {
    const COLLECTION: &'static str = "cement_requirements";

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn summary(&self) -> Option<String> {
        Some(format!(
            "{} - {} tons/month capacity",
            self.contact.company, self.monthly_capacity
        ))
    }

    fn validate(&self) -> Result<()> {
        if self.materials_needed.is_empty() {
            return Err(Error::validation(format!(
                "requirement {}: materials_needed is empty",
                self.id
            )));
        }
        if !self.materials_needed.contains(&self.primary_material) {
            return Err(Error::validation(format!(
                "requirement {}: primary material {} not in materials_needed",
                self.id, self.primary_material
            )));
        }
        if self.price_range.min > self.price_range.max
            || !self.price_range.contains(self.price_offered)
        {
            return Err(Error::validation(format!(
                "requirement {}: price {} outside range {}..={}",
                self.id, self.price_offered, self.price_range.min, self.price_range.max
            )));
        }
        let negative = |v: f64| v.is_nan() || v < 0.0;
        if negative(self.monthly_capacity) || negative(self.current_inventory) {
            return Err(Error::validation(format!(
                "requirement {}: capacity and inventory must be non-negative",
                self.id
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::validation(format!(
                "requirement {}: rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cement_requirements;
    use crate::config::SeederConfig;
    use crate::context::RunContext;

    fn pqr() -> CementRequirement {
        let ctx = RunContext::new(SeederConfig::default());
        cement_requirements(&ctx).remove(0)
    }

    fn rejected(req: &CementRequirement) -> bool {
        matches!(req.validate(), Err(Error::Validation(_)))
    }

    #[test]
    fn test_price_must_sit_in_range() {
        let mut req = pqr();
        req.price_offered = req.price_range.max + 1;
        assert!(rejected(&req));

        req.price_offered = req.price_range.min - 1;
        assert!(rejected(&req));

        let mut req = pqr();
        req.price_range = PriceRange { min: 3400, max: 3000 };
        assert!(rejected(&req));
    }

    #[test]
    fn test_primary_material_must_be_needed() {
        let mut req = pqr();
        req.materials_needed = vec![WasteType::SteelSlag];
        assert!(rejected(&req));

        req.materials_needed.clear();
        assert!(rejected(&req));
    }

    #[test]
    fn test_capacity_inventory_and_rating_bounds() {
        let mut req = pqr();
        req.monthly_capacity = -1.0;
        assert!(rejected(&req));

        let mut req = pqr();
        req.current_inventory = f64::NAN;
        assert!(rejected(&req));

        let mut req = pqr();
        req.rating = 5.5;
        assert!(rejected(&req));
    }
}
