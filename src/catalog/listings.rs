use std::collections::BTreeMap;

use crate::context::RunContext;
use crate::model::{
    strings, Contact, ListingLogistics, ListingStatus, Location, PhysicalProperties,
    QualityGrade, WasteListing, WasteType,
};

fn composition(values: &[(&str, f64)]) -> BTreeMap<String, f64> {
    values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn contact(company: &str, person: &str, email: &str, phone: &str) -> Contact {
    Contact {
        company: company.to_string(),
        contact_person: person.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

/// Waste listings w001-w004
pub fn waste_listings(ctx: &RunContext) -> Vec<WasteListing> {
    let now = ctx.timestamp();

    vec![
        WasteListing {
            id: "w001".to_string(),
            waste_type: WasteType::FlyAsh,
            display_name: "Fly Ash (Grade A)".to_string(),
            quantity: 500.0,
            unit: "tons".to_string(),
            origin: Location::new("Mumbai", "Maharashtra"),
            supplier: contact(
                "ABC Power Plant Ltd",
                "Rajesh Kumar",
                "waste@abcpower.com",
                "+91-9876543210",
            ),
            quality_grade: QualityGrade::GradeA,
            quality_certifications: strings(&["ASTM C618", "IS 3812"]),
            chemical_composition: composition(&[
                ("sio2", 55.2),
                ("al2o3", 28.4),
                ("fe2o3", 6.8),
                ("cao", 3.1),
                ("loss_on_ignition", 2.8),
            ]),
            physical_properties: PhysicalProperties {
                fineness: 320.0,
                specific_gravity: 2.24,
                moisture_content: 0.5,
            },
            price_expected: 3200,
            price_negotiable: true,
            available_date: now,
            expiry_date: ctx.days_ahead(90),
            co2_savings_potential: 400.0,
            status: ListingStatus::Available,
            logistics: ListingLogistics {
                storage_location: "Covered warehouse, Port connectivity".to_string(),
                transportation: "Rail/Road accessible".to_string(),
                pickup_preference: "bulk_only".to_string(),
                minimum_order: 50.0,
                packaging: "Bulk/Pneumatic tankers".to_string(),
            },
            testing_reports_available: true,
            environmental_clearance: true,
            created_at: now,
            updated_at: now,
            tags: strings(&["power_plant", "thermal", "grade_a", "high_quality"]),
            seasonal_availability: "year_round".to_string(),
            production_rate: "100 tons/day".to_string(),
        },
        WasteListing {
            id: "w002".to_string(),
            waste_type: WasteType::SteelSlag,
            display_name: "Steel Slag (Grade 1)".to_string(),
            quantity: 300.0,
            unit: "tons".to_string(),
            origin: Location::new("Chennai", "Tamil Nadu"),
            supplier: contact(
                "XYZ Steel Mills Pvt Ltd",
                "Priya Sharma",
                "sales@xyzsteel.com",
                "+91-9876543211",
            ),
            quality_grade: QualityGrade::Grade1,
            quality_certifications: strings(&["IS 383", "ASTM C989"]),
            chemical_composition: composition(&[
                ("sio2", 35.8),
                ("al2o3", 12.4),
                ("fe2o3", 1.2),
                ("cao", 42.6),
                ("mgo", 6.8),
            ]),
            physical_properties: PhysicalProperties {
                fineness: 280.0,
                specific_gravity: 2.85,
                moisture_content: 1.0,
            },
            price_expected: 2800,
            price_negotiable: true,
            available_date: now,
            expiry_date: ctx.days_ahead(60),
            co2_savings_potential: 210.0,
            status: ListingStatus::Available,
            logistics: ListingLogistics {
                storage_location: "Open yard, covered storage available".to_string(),
                transportation: "Truck loading facility".to_string(),
                pickup_preference: "flexible".to_string(),
                minimum_order: 25.0,
                packaging: "Loose bulk".to_string(),
            },
            testing_reports_available: true,
            environmental_clearance: true,
            created_at: now,
            updated_at: now,
            tags: strings(&["steel_mill", "blast_furnace", "grade_1", "infrastructure"]),
            seasonal_availability: "year_round".to_string(),
            production_rate: "150 tons/day".to_string(),
        },
        WasteListing {
            id: "w003".to_string(),
            waste_type: WasteType::SilicaFume,
            display_name: "Silica Fume (Premium)".to_string(),
            quantity: 150.0,
            unit: "tons".to_string(),
            origin: Location::new("Bangalore", "Karnataka"),
            supplier: contact(
                "Tech Industries Corp",
                "Amit Patel",
                "waste@techindustries.com",
                "+91-9876543212",
            ),
            quality_grade: QualityGrade::Premium,
            quality_certifications: strings(&["ASTM C1240", "IS 15388"]),
            chemical_composition: composition(&[
                ("sio2", 92.8),
                ("al2o3", 1.2),
                ("fe2o3", 0.8),
                ("cao", 0.4),
                ("loss_on_ignition", 2.1),
            ]),
            physical_properties: PhysicalProperties {
                fineness: 15000.0,
                specific_gravity: 2.22,
                moisture_content: 0.3,
            },
            price_expected: 5200,
            price_negotiable: false,
            available_date: now,
            expiry_date: ctx.days_ahead(45),
            co2_savings_potential: 180.0,
            status: ListingStatus::LimitedStock,
            logistics: ListingLogistics {
                storage_location: "Climate controlled warehouse".to_string(),
                transportation: "Specialized pneumatic handling".to_string(),
                pickup_preference: "scheduled_only".to_string(),
                minimum_order: 10.0,
                packaging: "Sealed bags/Silos".to_string(),
            },
            testing_reports_available: true,
            environmental_clearance: true,
            created_at: now,
            updated_at: now,
            tags: strings(&["silicon_industry", "premium", "high_performance", "concrete"]),
            seasonal_availability: "limited".to_string(),
            production_rate: "20 tons/day".to_string(),
        },
        WasteListing {
            id: "w004".to_string(),
            waste_type: WasteType::BottomAsh,
            display_name: "Bottom Ash (Standard)".to_string(),
            quantity: 800.0,
            unit: "tons".to_string(),
            origin: Location::new("Pune", "Maharashtra"),
            supplier: contact(
                "Green Energy Solutions",
                "Sunita Reddy",
                "materials@greenenergy.com",
                "+91-9876543213",
            ),
            quality_grade: QualityGrade::Standard,
            quality_certifications: strings(&["IS 383", "Local pollution board clearance"]),
            chemical_composition: composition(&[
                ("sio2", 48.5),
                ("al2o3", 22.1),
                ("fe2o3", 8.9),
                ("cao", 4.2),
                ("loss_on_ignition", 3.8),
            ]),
            physical_properties: PhysicalProperties {
                fineness: 150.0,
                specific_gravity: 2.15,
                moisture_content: 2.0,
            },
            price_expected: 2000,
            price_negotiable: true,
            available_date: now,
            expiry_date: ctx.days_ahead(120),
            co2_savings_potential: 480.0,
            status: ListingStatus::Available,
            logistics: ListingLogistics {
                storage_location: "Large open stockyard".to_string(),
                transportation: "Conveyor/Truck loading".to_string(),
                pickup_preference: "bulk_preferred".to_string(),
                minimum_order: 100.0,
                packaging: "Bulk transport".to_string(),
            },
            testing_reports_available: true,
            environmental_clearance: true,
            created_at: now,
            updated_at: now,
            tags: strings(&["power_plant", "thermal", "aggregate", "road_construction"]),
            seasonal_availability: "year_round".to_string(),
            production_rate: "200 tons/day".to_string(),
        },
    ]
}
