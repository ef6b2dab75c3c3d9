//! Synthetic market insights for a free-text query.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::catalog::market::{DEFAULT_INSIGHT, INSIGHT_BUCKETS};
use crate::matching::normalize::normalize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub query: String,
    pub salary_range: &'static str,
    pub growth_rate: u32,
    pub demand_level: &'static str,
    pub regional_demand: Vec<LabeledValue>,
    pub skills_demand: Vec<LabeledValue>,
    pub job_type_distribution: Vec<LabeledValue>,
    pub experience_level_distribution: Vec<LabeledValue>,
    pub company_size_distribution: Vec<LabeledValue>,
    pub timestamp: DateTime<Utc>,
}

/// (label, base, spread): values fall in `base..base + spread`.
type Distribution = [(&'static str, u32, u32)];

const REGIONAL_DEMAND: &Distribution = &[
    ("Bangalore", 500, 1000),
    ("Mumbai", 300, 800),
    ("Delhi NCR", 300, 700),
    ("Hyderabad", 200, 600),
    ("Pune", 200, 500),
];

const SKILLS_DEMAND: &Distribution = &[
    ("Technical Skills", 50, 100),
    ("Communication", 40, 80),
    ("Problem Solving", 40, 70),
    ("Leadership", 30, 60),
    ("Teamwork", 30, 50),
];

const JOB_TYPES: &Distribution = &[
    ("Full-time", 30, 70),
    ("Contract", 10, 30),
    ("Part-time", 5, 20),
    ("Freelance", 5, 15),
];

const EXPERIENCE_LEVELS: &Distribution = &[
    ("Entry", 20, 40),
    ("Mid", 30, 50),
    ("Senior", 20, 30),
    ("Lead", 10, 20),
];

const COMPANY_SIZES: &Distribution = &[
    ("Startup", 10, 30),
    ("SMB", 20, 40),
    ("Mid-size", 30, 50),
    ("Enterprise", 20, 40),
];

/// Salary, growth and demand come from the first keyword bucket the query
/// hits; the chart series are random.
pub fn insights<R: Rng + ?Sized>(query: &str, rng: &mut R) -> MarketInsights {
    let folded = normalize(query);
    let (salary_range, growth_rate, demand_level) = INSIGHT_BUCKETS
        .iter()
        .find(|(keywords, ..)| keywords.iter().any(|k| folded.contains(k)))
        .map(|(_, salary, growth, demand)| (*salary, *growth, *demand))
        .unwrap_or(DEFAULT_INSIGHT);

    MarketInsights {
        query: query.to_string(),
        salary_range,
        growth_rate,
        demand_level,
        regional_demand: sample(REGIONAL_DEMAND, rng),
        skills_demand: sample(SKILLS_DEMAND, rng),
        job_type_distribution: sample(JOB_TYPES, rng),
        experience_level_distribution: sample(EXPERIENCE_LEVELS, rng),
        company_size_distribution: sample(COMPANY_SIZES, rng),
        timestamp: Utc::now(),
    }
}

fn sample<R: Rng + ?Sized>(distribution: &Distribution, rng: &mut R) -> Vec<LabeledValue> {
    distribution
        .iter()
        .map(|&(label, base, spread)| LabeledValue {
            label,
            value: base + rng.gen_range(0..spread),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keyword_buckets() {
        let mut rng = StdRng::seed_from_u64(0);
        let dev = insights("Senior Software Engineer", &mut rng);
        assert_eq!(dev.salary_range, "₹10,00,000 - ₹25,00,000");
        assert_eq!(dev.growth_rate, 22);

        let data = insights("data analyst", &mut rng);
        assert_eq!(data.growth_rate, 28);

        let other = insights("chef", &mut rng);
        assert_eq!(other.salary_range, "₹8,00,000 - ₹15,00,000");
        assert_eq!(other.demand_level, "High");
    }

    #[test]
    fn test_first_bucket_wins() {
        let mut rng = StdRng::seed_from_u64(0);
        // "developer" (software bucket) precedes "data"
        assert_eq!(insights("data developer", &mut rng).growth_rate, 22);
    }

    #[test]
    fn test_series_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let report = insights("ux", &mut rng);
        let bangalore = &report.regional_demand[0];
        assert_eq!(bangalore.label, "Bangalore");
        assert!((500..1500).contains(&bangalore.value));
        assert_eq!(report.job_type_distribution.len(), 4);
    }

    #[test]
    fn test_seeded_series_repeat() {
        let a = insights("finance", &mut StdRng::seed_from_u64(5));
        let b = insights("finance", &mut StdRng::seed_from_u64(5));
        assert_eq!(a.skills_demand, b.skills_demand);
    }
}
