//! Per-career trend lookups with a general fallback.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::market::{IndustryOutlook, MarketCatalog};
use crate::matching::currency::{format_currency, Region};
use crate::matching::normalize::normalize;

use super::job_market::{growing_careers, GrowingCareer, INDIA_PREFIX};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTrendReport {
    pub career: &'static str,
    pub region: Region,
    pub growth: u32,
    pub demand: &'static str,
    pub top_skills: &'static [&'static str],
    pub top_locations: &'static [&'static str],
    pub average_salary: String,
    pub outlook: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralTrends {
    pub top_growing_careers: Vec<GrowingCareer>,
    pub in_demand_skills: &'static [&'static str],
    pub industry_outlook: IndustryOutlook,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TrendsReport {
    Career(CareerTrendReport),
    General(GeneralTrends),
}

/// Trend for `career` (an `indian-` prefix selects India), or general trends
/// when the career is blank or unknown.
pub fn job_trends(career: &str, market: &MarketCatalog) -> TrendsReport {
    let folded = normalize(career);
    let (region, title) = match folded.strip_prefix(INDIA_PREFIX) {
        Some(rest) => (Region::India, rest),
        None => (Region::International, folded.as_str()),
    };

    match market.career_trend(region, title) {
        Some(trend) if !title.is_empty() => TrendsReport::Career(CareerTrendReport {
            career: trend.career,
            region,
            growth: trend.growth,
            demand: trend.demand,
            top_skills: trend.top_skills,
            top_locations: trend.top_locations,
            average_salary: format_currency(trend.average_salary, region),
            outlook: trend.outlook,
            timestamp: Utc::now(),
        }),
        _ => TrendsReport::General(GeneralTrends {
            top_growing_careers: growing_careers(market, Region::International),
            in_demand_skills: market.in_demand_skills(Region::India),
            industry_outlook: market.industry_outlook(Region::India),
            timestamp: Utc::now(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_career_trend() {
        match job_trends("Data Scientist", &MarketCatalog) {
            TrendsReport::Career(report) => {
                assert_eq!(report.growth, 31);
                assert_eq!(report.average_salary, "$105,000");
            }
            other => panic!("expected career trend, got {other:?}"),
        }
    }

    #[test]
    fn test_indian_prefix_selects_india_trend() {
        match job_trends("indian-Software Developer", &MarketCatalog) {
            TrendsReport::Career(report) => {
                assert_eq!(report.career, "Software Developer");
                assert_eq!(report.average_salary, "₹12,00,000");
                assert_eq!(report.growth, 25);
            }
            other => panic!("expected career trend, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_or_blank_career_gives_general_trends() {
        for career in ["", "Astronaut", "indian-UX Designer"] {
            let report = job_trends(career, &MarketCatalog);
            assert!(matches!(report, TrendsReport::General(_)), "{career}");
        }
        let json = serde_json::to_value(job_trends("", &MarketCatalog)).unwrap();
        assert_eq!(json["topGrowingCareers"][0]["title"], "Data Scientist");
        assert_eq!(json["industryOutlook"]["technology"], "Very Strong");
    }
}
