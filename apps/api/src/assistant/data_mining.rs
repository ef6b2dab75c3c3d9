//! Market data mining: a generated insight for a free-text query plus the
//! India market tables for the requested sector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assistant::prompts::{DATA_MINING_PROMPT_TEMPLATE, DATA_MINING_SYSTEM};
use crate::catalog::market::{MarketCatalog, Sector};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RUPEE_INSTRUCTION};
use crate::llm_client::{generate_json, TextGenerator};
use crate::market::job_market::JobListing;
use crate::matching::currency::{format_currency, Region};

pub const DEFAULT_MINING_LOCATION: &str = "India";
const ALL_SECTORS: &str = "All Sectors";
const ECONOMIC_OUTLOOK: &str = "Positive with steady growth";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalInsights {
    pub bangalore: String,
    pub mumbai: String,
    pub delhi: String,
    pub hyderabad: String,
    pub pune: String,
}

/// Shape the generator is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub summary: String,
    pub salary_range: String,
    pub demand_level: String,
    pub growth_projection: String,
    pub top_skills: Vec<String>,
    pub top_companies: Vec<String>,
    pub regional_insights: RegionalInsights,
}

impl AiInsight {
    /// Canned insight served whenever generation fails.
    pub fn fallback() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            summary: "Unable to generate AI insights at this time. Please try again later."
                .to_string(),
            salary_range: "₹5,00,000 - ₹15,00,000".to_string(),
            demand_level: "Medium".to_string(),
            growth_projection: "10-15%".to_string(),
            top_skills: owned(&["Problem Solving", "Communication", "Technical Skills"]),
            top_companies: owned(&["TCS", "Infosys", "Wipro"]),
            regional_insights: RegionalInsights {
                bangalore: "Tech hub with many opportunities".to_string(),
                mumbai: "Financial center with diverse roles".to_string(),
                delhi: "Government and private sector roles".to_string(),
                hyderabad: "Growing tech center".to_string(),
                pune: "Emerging tech and manufacturing hub".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndiaMarketData {
    pub sector: String,
    pub country: &'static str,
    pub currency: &'static str,
    pub growth_rate: u32,
    pub top_jobs: Vec<JobListing>,
    pub top_skills: &'static [&'static str],
    pub top_cities: &'static [&'static str],
    pub top_employers: &'static [&'static str],
    pub economic_outlook: &'static str,
    pub last_updated: DateTime<Utc>,
}

pub async fn generate_insight(
    query: &str,
    location: &str,
    sector: Option<&str>,
    generator: &dyn TextGenerator,
) -> AiInsight {
    let prompt = DATA_MINING_PROMPT_TEMPLATE
        .replace("{query}", query)
        .replace("{location}", location)
        .replace("{sector}", sector.unwrap_or(ALL_SECTORS))
        .replace("{rupees}", RUPEE_INSTRUCTION);
    let system = format!("{DATA_MINING_SYSTEM} {JSON_ONLY_SYSTEM}");

    match generate_json::<AiInsight>(generator, &prompt, &system).await {
        Ok(insight) => insight,
        Err(e) => {
            warn!("Data-mining insight unavailable for {query:?}, using fallback: {e}");
            AiInsight::fallback()
        }
    }
}

/// Unknown or missing sectors read the India "all" table; the label echoes
/// what was asked for.
pub fn india_market_data(sector: Option<&str>, market: &MarketCatalog) -> IndiaMarketData {
    let parsed = sector.map(Sector::from_label).unwrap_or(Sector::All);
    let entry = market.entry(Region::India, parsed);
    let label = match sector {
        Some(s) if !s.eq_ignore_ascii_case(Sector::All.label()) => s.to_string(),
        _ => ALL_SECTORS.to_string(),
    };

    IndiaMarketData {
        sector: label,
        country: "India",
        currency: Region::India.currency_label(),
        growth_rate: entry.growth_rate,
        top_jobs: entry
            .top_jobs
            .iter()
            .map(|job| JobListing {
                title: job.title,
                demand: job.demand,
                avg_salary: format_currency(job.avg_salary, Region::India),
            })
            .collect(),
        top_skills: entry.top_skills,
        top_cities: entry.top_cities,
        top_employers: entry.top_employers,
        economic_outlook: ECONOMIC_OUTLOOK,
        last_updated: Utc::now(),
    }
}
