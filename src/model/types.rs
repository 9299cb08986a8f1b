//! Enumerations shared by the catalog documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industrial by-product accepted as a cement raw material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteType {
    FlyAsh,
    SteelSlag,
    SilicaFume,
    BottomAsh,
}

impl WasteType {
    /// Every waste type, in catalog order
    pub const ALL: [WasteType; 4] = [
        WasteType::FlyAsh,
        WasteType::SteelSlag,
        WasteType::SilicaFume,
        WasteType::BottomAsh,
    ];

    /// Convert the type to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::FlyAsh => "fly_ash",
            WasteType::SteelSlag => "steel_slag",
            WasteType::SilicaFume => "silica_fume",
            WasteType::BottomAsh => "bottom_ash",
        }
    }

    /// National average price per ton used as the centre of the price history walk
    pub fn base_price(&self) -> u32 {
        match self {
            WasteType::FlyAsh => 2800,
            WasteType::SteelSlag => 2200,
            WasteType::SilicaFume => 4500,
            WasteType::BottomAsh => 1800,
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality tier of a waste material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    GradeA,
    #[serde(rename = "grade_1")]
    Grade1,
    Premium,
    Standard,
}

impl QualityGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityGrade::GradeA => "grade_a",
            QualityGrade::Grade1 => "grade_1",
            QualityGrade::Premium => "premium",
            QualityGrade::Standard => "standard",
        }
    }
}

/// Availability of a waste listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    LimitedStock,
    Reserved,
    Depleted,
}

/// How urgently a plant needs material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Role of a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    WasteSupplier,
    CementBuyer,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::WasteSupplier => "waste_supplier",
            UserRole::CementBuyer => "cement_buyer",
            UserRole::Admin => "admin",
        }
    }
}

/// Lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Proposed,
    Accepted,
    Completed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Proposed => "proposed",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

/// Qualitative market tag attached to a price observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCondition {
    HighDemand,
    Stable,
    LowDemand,
}

impl MarketCondition {
    pub const ALL: [MarketCondition; 3] = [
        MarketCondition::HighDemand,
        MarketCondition::Stable,
        MarketCondition::LowDemand,
    ];
}

/// Delivery channel of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Sms,
    Platform,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_value(QualityGrade::Grade1).unwrap(), json!("grade_1"));
        assert_eq!(serde_json::to_value(QualityGrade::GradeA).unwrap(), json!("grade_a"));
        assert_eq!(
            serde_json::to_value(ListingStatus::LimitedStock).unwrap(),
            json!("limited_stock")
        );
        assert_eq!(
            serde_json::to_value(MarketCondition::HighDemand).unwrap(),
            json!("high_demand")
        );
        for waste in WasteType::ALL {
            assert_eq!(serde_json::to_value(waste).unwrap(), json!(waste.as_str()));
        }
    }
}
