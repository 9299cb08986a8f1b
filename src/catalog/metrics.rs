use crate::context::RunContext;
use crate::model::{
    ImpactMetrics, MarketIntelligence, MonthlyGrowth, OperationalMetrics, OverallMarket,
    PlatformMetrics, QuarterlyTargets,
};

pub fn impact_metrics(ctx: &RunContext) -> ImpactMetrics {
    let now = ctx.timestamp();

    ImpactMetrics {
        id: "current_impact".to_string(),
        total_co2_saved: 12500.0,
        total_waste_processed: 8750.0,
        total_revenue_generated: 2_300_000,
        total_matches_created: 156,
        active_suppliers: 45,
        active_buyers: 32,
        monthly_growth: MonthlyGrowth {
            co2_savings: 8.5,
            waste_volume: 12.3,
            revenue: 15.7,
        },
        quarterly_targets: QuarterlyTargets {
            co2_savings: 15000.0,
            waste_volume: 12000.0,
            new_suppliers: 60,
        },
        timestamp: now,
        last_updated: now,
    }
}

pub fn market_intelligence(ctx: &RunContext) -> MarketIntelligence {
    let now = ctx.timestamp();

    MarketIntelligence {
        id: "current_market".to_string(),
        overall_market: OverallMarket {
            growth_rate: 12.5,
            market_sentiment: "positive".to_string(),
            demand_level: "high".to_string(),
            supply_constraints: "moderate".to_string(),
        },
        timestamp: now,
        last_updated: now,
    }
}

pub fn platform_metrics(ctx: &RunContext) -> PlatformMetrics {
    let now = ctx.timestamp();

    PlatformMetrics {
        id: "platform_performance".to_string(),
        operational_metrics: OperationalMetrics {
            uptime_percentage: 99.8,
            avg_response_time_ms: 450,
            successful_matches_rate: 98.5,
            user_satisfaction: 4.7,
        },
        timestamp: now,
        last_calculated: now,
    }
}
