use crate::context::RunContext;
use crate::model::{
    strings, BusinessDetails, NotificationChannel, PerformanceMetrics, Subscription, User,
    UserPreferences, UserRole, WasteType,
};

/// User profiles, currently the single supplier u001
pub fn users(ctx: &RunContext) -> Vec<User> {
    vec![User {
        id: "u001".to_string(),
        email: "rajesh.kumar@abcpower.com".to_string(),
        name: "Rajesh Kumar".to_string(),
        role: UserRole::WasteSupplier,
        company: "ABC Power Plant Ltd".to_string(),
        phone: "+91-9876543210".to_string(),
        location: "Mumbai".to_string(),
        verification_status: "verified".to_string(),
        profile_completeness: 95,
        joined_date: ctx.days_ago(180),
        last_active: ctx.hours_ago(2),
        preferences: UserPreferences {
            notification_channels: vec![
                NotificationChannel::Email,
                NotificationChannel::Sms,
                NotificationChannel::Platform,
            ],
            language: "english".to_string(),
            currency: "INR".to_string(),
            time_zone: "Asia/Kolkata".to_string(),
        },
        business_details: BusinessDetails {
            industry: "power_generation".to_string(),
            company_size: "large".to_string(),
            annual_waste_volume: 6000.0,
            waste_types: vec![WasteType::FlyAsh, WasteType::BottomAsh],
            certifications: strings(&["ISO 14001", "Pollution Control Board"]),
        },
        performance_metrics: PerformanceMetrics {
            total_transactions: 15,
            total_revenue: 1_800_000,
            average_rating: 4.8,
            co2_impact: 1200.0,
        },
        subscription: Subscription {
            plan: "premium".to_string(),
            started: ctx.days_ago(90),
            expires: ctx.days_ahead(275),
        },
    }]
}
