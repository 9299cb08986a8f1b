use std::collections::BTreeMap;

use crate::context::RunContext;
use crate::model::{
    strings, CementRequirement, Contact, DeliveryPreferences, Location, LogisticsSupport,
    PaymentTerms, PriceRange, QualityGrade, QualityRequirements, SustainabilityGoals, Urgency,
    WasteType,
};

fn specs(values: &[(&str, f64)]) -> BTreeMap<String, f64> {
    values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Cement plant requirements c001-c002
pub fn cement_requirements(ctx: &RunContext) -> Vec<CementRequirement> {
    let now = ctx.timestamp();

    vec![
        CementRequirement {
            id: "c001".to_string(),
            plant_name: "Mumbai Manufacturing Unit".to_string(),
            location: Location::new("Mumbai", "Maharashtra"),
            contact: Contact {
                company: "PQR Cement Industries Ltd".to_string(),
                contact_person: "Vikram Singh".to_string(),
                email: "procurement@pqrcement.com".to_string(),
                phone: "+91-9876543220".to_string(),
            },
            materials_needed: vec![WasteType::FlyAsh, WasteType::BottomAsh],
            primary_material: WasteType::FlyAsh,
            monthly_capacity: 1000.0,
            current_inventory: 150.0,
            urgency: Urgency::High,
            price_offered: 3200,
            price_range: PriceRange { min: 3000, max: 3400 },
            quality_requirements: QualityRequirements {
                grade: QualityGrade::GradeA,
                certifications_required: strings(&["ASTM C618", "IS 3812"]),
                chemical_specs: specs(&[
                    ("sio2_min", 50.0),
                    ("al2o3_min", 25.0),
                    ("loss_on_ignition_max", 5.0),
                ]),
            },
            delivery_preferences: DeliveryPreferences {
                method: "bulk_pneumatic".to_string(),
                frequency: "weekly".to_string(),
                lead_time_days: 7,
                storage_capacity: 500.0,
            },
            logistics_support: LogisticsSupport {
                pickup_available: true,
                transport_provided: true,
                loading_facilities: "pneumatic_systems".to_string(),
            },
            payment_terms: PaymentTerms {
                method: "bank_transfer".to_string(),
                days: 30,
                advance_percentage: 0.0,
            },
            active: true,
            contract_type: "spot_purchase".to_string(),
            rating: 4.8,
            total_purchases_ytd: 8500.0,
            preferred_suppliers: strings(&["ABC Power Plant Ltd"]),
            compliance_requirements: strings(&["environmental_clearance", "quality_certificates"]),
            created_at: now,
            updated_at: now,
            last_purchase_date: ctx.days_ago(15),
            sustainability_goals: SustainabilityGoals {
                co2_reduction_target: 2000.0,
                waste_utilization_target: 80.0,
                circular_economy_certified: true,
            },
        },
        CementRequirement {
            id: "c002".to_string(),
            plant_name: "Chennai Coastal Plant".to_string(),
            location: Location::new("Chennai", "Tamil Nadu"),
            contact: Contact {
                company: "LMN Cement Corporation".to_string(),
                contact_person: "Meera Nair".to_string(),
                email: "sourcing@lmnindustries.com".to_string(),
                phone: "+91-9876543221".to_string(),
            },
            materials_needed: vec![WasteType::SteelSlag, WasteType::SilicaFume],
            primary_material: WasteType::SteelSlag,
            monthly_capacity: 800.0,
            current_inventory: 80.0,
            urgency: Urgency::Medium,
            price_offered: 2750,
            price_range: PriceRange { min: 2500, max: 2900 },
            quality_requirements: QualityRequirements {
                grade: QualityGrade::Grade1,
                certifications_required: strings(&["IS 383", "ASTM C989"]),
                chemical_specs: specs(&[
                    ("cao_min", 35.0),
                    ("sio2_min", 30.0),
                    ("fineness_min", 250.0),
                ]),
            },
            delivery_preferences: DeliveryPreferences {
                method: "truck_bulk".to_string(),
                frequency: "bi_weekly".to_string(),
                lead_time_days: 10,
                storage_capacity: 400.0,
            },
            logistics_support: LogisticsSupport {
                pickup_available: true,
                transport_provided: false,
                loading_facilities: "conveyor_belt".to_string(),
            },
            payment_terms: PaymentTerms {
                method: "bank_transfer".to_string(),
                days: 45,
                advance_percentage: 10.0,
            },
            active: true,
            contract_type: "annual_contract".to_string(),
            rating: 4.6,
            total_purchases_ytd: 6200.0,
            preferred_suppliers: strings(&["XYZ Steel Mills Pvt Ltd"]),
            compliance_requirements: strings(&["quality_certificates", "transport_permits"]),
            created_at: now,
            updated_at: now,
            last_purchase_date: ctx.days_ago(22),
            sustainability_goals: SustainabilityGoals {
                co2_reduction_target: 1500.0,
                waste_utilization_target: 75.0,
                circular_economy_certified: true,
            },
        },
    ]
}
