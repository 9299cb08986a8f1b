//! Record builders for the sample catalog
//!
//! Every builder is a pure function of the [`RunContext`](crate::context::RunContext).
//! Apart from [`price_history`], which draws from a [`MarketSampler`], the
//! output is fixed hand-curated demo data.

mod listings;
mod matches;
mod metrics;
mod prices;
mod requirements;
mod templates;
mod users;

pub use listings::waste_listings;
pub use matches::matches;
pub use metrics::{impact_metrics, market_intelligence, platform_metrics};
pub use prices::{
    price_history, FixedSampler, MarketSampler, RandomSampler, PERIODS, PERIOD_DAYS, VARIATION,
};
pub use requirements::cement_requirements;
pub use templates::notification_templates;
pub use users::users;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeederConfig;
    use crate::context::RunContext;
    use crate::model::Document;
    use std::collections::HashSet;

    fn ctx() -> RunContext {
        RunContext::new(SeederConfig::default())
    }

    #[test]
    fn test_listing_invariants() {
        let listings = waste_listings(&ctx());
        assert_eq!(listings.len(), 4);

        for listing in &listings {
            assert!(listing.expiry_date > listing.available_date, "{}", listing.id);
            assert!(listing.logistics.minimum_order <= listing.quantity, "{}", listing.id);
            listing.validate().unwrap();
        }
    }

    #[test]
    fn test_requirement_invariants() {
        for req in cement_requirements(&ctx()) {
            assert!(req.price_range.min <= req.price_offered, "{}", req.id);
            assert!(req.price_offered <= req.price_range.max, "{}", req.id);
            assert!(req.materials_needed.contains(&req.primary_material), "{}", req.id);
            req.validate().unwrap();
        }
    }

    #[test]
    fn test_match_totals_are_consistent() {
        let matches = matches(&ctx());
        let m001 = matches.iter().find(|m| m.id == "m001").unwrap();
        assert_eq!(m001.total_value, 1_280_000);

        for m in &matches {
            assert_eq!(m.total_value, m.quantity_agreed * m.price_agreed);
            m.validate().unwrap();
        }
    }

    #[test]
    fn test_matches_reference_seeded_records() {
        let ctx = ctx();
        let listings: HashSet<String> = waste_listings(&ctx).into_iter().map(|l| l.id).collect();
        let requirements: HashSet<String> =
            cement_requirements(&ctx).into_iter().map(|r| r.id).collect();

        for m in matches(&ctx) {
            assert!(listings.contains(&m.waste_id));
            assert!(requirements.contains(&m.requirement_id));
        }
    }

    #[test]
    fn test_remaining_builders_validate() {
        let ctx = ctx();
        for user in users(&ctx) {
            user.validate().unwrap();
        }
        for template in notification_templates() {
            template.validate().unwrap();
        }
        impact_metrics(&ctx).validate().unwrap();
        market_intelligence(&ctx).validate().unwrap();
        platform_metrics(&ctx).validate().unwrap();
    }

    #[test]
    fn test_builders_share_the_run_timestamp() {
        let ctx = ctx();
        let listing = &waste_listings(&ctx)[0];
        let impact = impact_metrics(&ctx);
        assert_eq!(listing.created_at, ctx.timestamp());
        assert_eq!(impact.timestamp, ctx.timestamp());
    }
}
