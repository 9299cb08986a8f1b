use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, NotificationChannel, UserRole, WasteType};
use crate::error::{Error, Result};

/// Platform user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company: String,
    pub phone: String,
    pub location: String,
    pub verification_status: String,
    /// Percentage, 0-100
    pub profile_completeness: u8,
    pub joined_date: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub preferences: UserPreferences,
    pub business_details: BusinessDetails,
    pub performance_metrics: PerformanceMetrics,
    pub subscription: Subscription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub notification_channels: Vec<NotificationChannel>,
    pub language: String,
    pub currency: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub industry: String,
    pub company_size: String,
    pub annual_waste_volume: f64,
    pub waste_types: Vec<WasteType>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_transactions: u32,
    pub total_revenue: u64,
    pub average_rating: f64,
    pub co2_impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub plan: String,
    pub started: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn summary(&self) -> Option<String> {
        Some(format!("user {} ({})", self.name, self.role.as_str()))
    }

    fn validate(&self) -> Result<()> {
        if self.profile_completeness > 100 {
            return Err(Error::validation(format!(
                "user {}: profile completeness {} above 100",
                self.id, self.profile_completeness
            )));
        }
        if self.subscription.expires <= self.subscription.started {
            return Err(Error::validation(format!(
                "user {}: subscription expires before it starts",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::users;
    use crate::config::SeederConfig;
    use crate::context::RunContext;

    #[test]
    fn test_profile_and_subscription_checks() {
        let ctx = RunContext::new(SeederConfig::default());

        let mut user = users(&ctx).remove(0);
        user.profile_completeness = 101;
        assert!(user.validate().is_err());

        let mut user = users(&ctx).remove(0);
        user.subscription.expires = user.subscription.started;
        assert!(matches!(user.validate(), Err(Error::Validation(_))));
    }
}
