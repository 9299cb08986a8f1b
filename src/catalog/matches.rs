use crate::context::RunContext;
use crate::model::{Match, MatchStatus};

/// Historical matches between seeded listings and requirements
pub fn matches(ctx: &RunContext) -> Vec<Match> {
    let (quantity, price) = (400, 3200);

    vec![Match {
        id: "m001".to_string(),
        waste_id: "w001".to_string(),
        requirement_id: "c001".to_string(),
        status: MatchStatus::Completed,
        match_score: 92,
        quantity_agreed: quantity,
        price_agreed: price,
        total_value: quantity * price,
        created_at: ctx.days_ago(30),
        completed_at: Some(ctx.days_ago(20)),
        co2_savings_achieved: 320.0,
    }]
}
