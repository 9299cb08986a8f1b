//! Synthetic price history, the only randomized part of the catalog

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::context::RunContext;
use crate::model::{MarketCondition, PriceRecord, QualityGrade, WasteType};

/// Observations per material
pub const PERIODS: i64 = 6;

/// Days between two observations
pub const PERIOD_DAYS: i64 = 30;

/// Spread applied to a material's base price
pub const VARIATION: RangeInclusive<f64> = 0.85..=1.15;

/// Source of the price walk's randomness.
pub trait MarketSampler {
    /// Factor applied to the base price, within [`VARIATION`]
    fn multiplier(&mut self) -> f64;

    fn condition(&mut self) -> MarketCondition;
}

/// Uniform sampling over any [`Rng`]
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    /// Sample from `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Reproducible sampler
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MarketSampler for RandomSampler<R> {
    fn multiplier(&mut self) -> f64 {
        self.rng.gen_range(VARIATION)
    }

    fn condition(&mut self) -> MarketCondition {
        MarketCondition::ALL[self.rng.gen_range(0..MarketCondition::ALL.len())]
    }
}

/// Sampler that always returns the same values
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler {
    pub multiplier: f64,
    pub condition: MarketCondition,
}

impl MarketSampler for FixedSampler {
    fn multiplier(&mut self) -> f64 {
        self.multiplier
    }

    fn condition(&mut self) -> MarketCondition {
        self.condition
    }
}

/// Six monthly observations per material, walking back from the run timestamp.
///
/// Prices are truncated to whole currency units.
pub fn price_history<S: MarketSampler>(
    ctx: &RunContext,
    sampler: &mut S,
) -> Vec<PriceRecord> {
    let mut records = Vec::with_capacity(WasteType::ALL.len() * PERIODS as usize);

    for material in WasteType::ALL {
        for period in 0..PERIODS {
            let price = f64::from(material.base_price()) * sampler.multiplier();

            records.push(PriceRecord {
                material,
                price_per_ton: price as u32,
                region: "national_average".to_string(),
                quality_grade: QualityGrade::Standard,
                timestamp: ctx.days_ago(PERIOD_DAYS * period),
                market_conditions: sampler.condition(),
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeederConfig;
    use chrono::{Duration, TimeZone, Utc};

    fn ctx() -> RunContext {
        RunContext::at(
            SeederConfig::default(),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_unit_multiplier_yields_base_price() {
        let mut sampler = FixedSampler {
            multiplier: 1.0,
            condition: MarketCondition::Stable,
        };
        let records = price_history(&ctx(), &mut sampler);

        let fly_ash: Vec<_> = records
            .iter()
            .filter(|r| r.material == WasteType::FlyAsh)
            .collect();
        assert_eq!(fly_ash.len(), 6);
        assert!(fly_ash.iter().all(|r| r.price_per_ton == 2800));
        assert!(records
            .iter()
            .all(|r| r.market_conditions == MarketCondition::Stable));
    }

    #[test]
    fn test_records_walk_back_thirty_days() {
        let ctx = ctx();
        let records = price_history(&ctx, &mut RandomSampler::seeded(7));
        assert_eq!(records.len(), 24);

        let steel: Vec<_> = records
            .iter()
            .filter(|r| r.material == WasteType::SteelSlag)
            .collect();
        for (i, record) in steel.iter().enumerate() {
            assert_eq!(record.timestamp, ctx.timestamp() - Duration::days(30 * i as i64));
        }
    }

    #[test]
    fn test_random_prices_stay_in_band() {
        let records = price_history(&ctx(), &mut RandomSampler::seeded(42));

        for record in &records {
            let base = f64::from(record.material.base_price());
            let price = f64::from(record.price_per_ton);
            assert!(price >= (base * 0.85).floor(), "{:?}", record);
            assert!(price <= base * 1.15, "{:?}", record);
        }
    }

    #[test]
    fn test_same_seed_same_history() {
        let a = price_history(&ctx(), &mut RandomSampler::seeded(99));
        let b = price_history(&ctx(), &mut RandomSampler::seeded(99));
        assert_eq!(a, b);
    }
}
