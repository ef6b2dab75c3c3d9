//! Job-market overview for a location and industry.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::locations::GLOBAL_KEY;
use crate::catalog::market::{IndustryOutlook, MarketCatalog, Sector};
use crate::matching::currency::{format_currency, Region};
use crate::matching::location::resolve_location;
use crate::matching::normalize::normalize;

/// Legacy industry prefix that pins the India tables.
pub const INDIA_PREFIX: &str = "indian-";
pub const ALL_INDUSTRIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryQuery {
    /// Industry label without any region prefix, lowercased.
    pub label: String,
    pub sector: Sector,
    pub india_prefixed: bool,
}

impl IndustryQuery {
    pub fn parse(raw: &str) -> Self {
        let folded = normalize(raw);
        let (label, india_prefixed) = match folded.strip_prefix(INDIA_PREFIX) {
            Some(rest) => (rest.to_string(), true),
            None => (folded, false),
        };
        let label = if label.is_empty() {
            ALL_INDUSTRIES.to_string()
        } else {
            label
        };
        Self {
            sector: Sector::from_label(&label),
            label,
            india_prefixed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub title: &'static str,
    pub demand: &'static str,
    pub avg_salary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowingCareer {
    pub title: &'static str,
    pub growth: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMarketReport {
    pub industry: String,
    pub location: String,
    pub region: Region,
    pub growth_rate: u32,
    pub top_jobs: Vec<JobListing>,
    pub top_skills: &'static [&'static str],
    pub location_factor: f64,
    pub demand_trend: &'static str,
    pub currency: &'static str,
    pub top_growing_careers: Vec<GrowingCareer>,
    pub in_demand_skills: &'static [&'static str],
    pub industry_outlook: IndustryOutlook,
    pub last_updated: DateTime<Utc>,
}

/// Either the `indian-` industry prefix or an Indian location selects the
/// India tables.
pub fn job_market(location: &str, industry: &str, market: &MarketCatalog) -> JobMarketReport {
    let query = IndustryQuery::parse(industry);
    let place = resolve_location(location);
    let region = if query.india_prefixed {
        Region::India
    } else {
        place.region
    };
    let entry = market.entry(region, query.sector);

    let (location_name, factor) = match region {
        Region::India => ("India".to_string(), 1.0),
        // Unknown places keep the caller's wording at the global factor.
        Region::International
            if place.key == GLOBAL_KEY && !normalize(location).contains(GLOBAL_KEY) =>
        {
            (location.trim().to_string(), place.salary_multiplier)
        }
        Region::International => (place.name.to_string(), place.salary_multiplier),
    };

    JobMarketReport {
        industry: if query.label == ALL_INDUSTRIES {
            "All Industries".to_string()
        } else {
            query.label
        },
        location: location_name,
        region,
        growth_rate: entry.growth_rate,
        top_jobs: entry
            .top_jobs
            .iter()
            .map(|job| JobListing {
                title: job.title,
                demand: job.demand,
                avg_salary: format_currency(job.avg_salary, region),
            })
            .collect(),
        top_skills: entry.top_skills,
        location_factor: factor,
        demand_trend: "Increasing",
        currency: region.currency_label(),
        top_growing_careers: growing_careers(market, region),
        in_demand_skills: market.in_demand_skills(region),
        industry_outlook: market.industry_outlook(region),
        last_updated: Utc::now(),
    }
}

pub fn growing_careers(market: &MarketCatalog, region: Region) -> Vec<GrowingCareer> {
    market
        .top_growing(region)
        .into_iter()
        .map(|(title, growth)| GrowingCareer { title, growth })
        .collect()
}
