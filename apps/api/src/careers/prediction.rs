//! Market-driven career prediction: fields ranked by interest and growth,
//! plus the skills the market wants that the interests do not cover.

use serde::Serialize;

use crate::catalog::market::FieldTrend;
use crate::catalog::skills::INTEREST_SKILLS;
use crate::catalog::Catalogs;
use crate::matching::currency::{convert_usd_to_inr, format_currency, Region};
use crate::matching::gaps::SkillGap;
use crate::matching::location::resolve_location;
use crate::matching::normalize::contains_keyword;
use crate::models::resource::{LearningResource, ResourceType};

pub const MAX_SKILL_GAPS: usize = 5;
pub const SKILLS_PER_ROUTE: usize = 3;

const INTEREST_WEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field: &'static str,
    pub match_score: f64,
    pub salary: String,
    pub growth_rate: u32,
    pub demand_level: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysis {
    pub relevant_skills: Vec<&'static str>,
    pub in_demand_skills: Vec<&'static str>,
    pub skill_gaps: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpskillingRoute {
    pub career_field: &'static str,
    pub required_skills: Vec<&'static str>,
    pub learning_paths: Vec<SkillGap>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub field: &'static str,
    pub growth: u32,
    pub demand_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPrediction {
    pub career_recommendations: Vec<FieldMatch>,
    pub skills_analysis: SkillsAnalysis,
    pub upskilling_routes: Vec<UpskillingRoute>,
    pub market_trends: Vec<MarketTrend>,
    pub location: &'static str,
}

pub fn predict(interests: &[String], location: &str, catalogs: &Catalogs, usd_to_inr: f64) -> CareerPrediction {
    let trends = catalogs.market.field_trends();
    let location = resolve_location(location);
    let analysis = analyze_skills(interests, catalogs.market.market_top_skills());
    let recommendations = rank_fields(interests, trends, location.region, usd_to_inr);

    let upskilling_routes = recommendations
        .iter()
        .map(|rec| {
            let skills: Vec<&'static str> = analysis
                .skill_gaps
                .iter()
                .take(SKILLS_PER_ROUTE)
                .copied()
                .collect();
            UpskillingRoute {
                career_field: rec.field,
                learning_paths: skills.iter().map(|s| starter_resources(s, catalogs)).collect(),
                required_skills: skills,
            }
        })
        .collect();

    CareerPrediction {
        career_recommendations: recommendations,
        skills_analysis: analysis,
        upskilling_routes,
        market_trends: trends
            .iter()
            .map(|t| MarketTrend {
                field: t.field,
                growth: t.growth,
                demand_level: t.demand_level,
            })
            .collect(),
        location: location.name,
    }
}

/// Skills implied by the interests, which of those the market wants, and the
/// market skills the interests leave uncovered.
pub fn analyze_skills(interests: &[String], market_skills: &[&'static str]) -> SkillsAnalysis {
    let mut relevant: Vec<&'static str> = Vec::new();
    for interest in interests {
        let category = INTEREST_SKILLS
            .iter()
            .find(|(key, _)| contains_keyword(interest, key));
        if let Some((_, skills)) = category {
            relevant.extend(skills.iter().copied());
        }
    }

    let skill_gaps = market_skills
        .iter()
        .filter(|s| !relevant.contains(*s))
        .take(MAX_SKILL_GAPS)
        .copied()
        .collect();
    let in_demand = dedup(relevant.iter().filter(|s| market_skills.contains(*s)).copied());

    SkillsAnalysis {
        relevant_skills: dedup(relevant.into_iter()),
        in_demand_skills: in_demand,
        skill_gaps,
    }
}

fn rank_fields(
    interests: &[String],
    trends: &'static [FieldTrend],
    region: Region,
    usd_to_inr: f64,
) -> Vec<FieldMatch> {
    let mut matches: Vec<FieldMatch> = trends
        .iter()
        .map(|trend| {
            let interest_hits = interests
                .iter()
                .filter(|i| !i.trim().is_empty() && contains_keyword(trend.field, i))
                .count() as f64;
            let salary = match region {
                Region::India => convert_usd_to_inr(trend.average_salary, usd_to_inr),
                Region::International => trend.average_salary,
            };
            FieldMatch {
                field: trend.field,
                match_score: interest_hits * INTEREST_WEIGHT + f64::from(trend.growth) / 10.0,
                salary: format_currency(salary, region),
                growth_rate: trend.growth,
                demand_level: trend.demand_level,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(crate::matching::scoring::TOP_N);
    matches
}

fn starter_resources(skill: &str, catalogs: &Catalogs) -> SkillGap {
    let resources = &catalogs.resources;
    SkillGap {
        skill: skill.to_string(),
        resources: vec![
            LearningResource::new(
                ResourceType::Course,
                format!("Introduction to {skill}"),
                "Coursera",
                resources.search_url("Coursera", skill, ResourceType::Course),
            )
            .with_duration("4 weeks"),
            LearningResource::new(
                ResourceType::Tutorial,
                format!("{skill} for Beginners"),
                "YouTube",
                resources.search_url("YouTube", skill, ResourceType::Tutorial),
            )
            .with_duration("2 hours"),
        ],
    }
}

fn dedup(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_growth_ranks_fields_without_interest_hits() {
        let catalogs = Catalogs::load().unwrap();
        let result = predict(&[], "global", &catalogs, 83.0);
        let fields: Vec<_> = result.career_recommendations.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["Cybersecurity", "Data Science", "Software Development"]);
        assert!((result.career_recommendations[0].match_score - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_interest_hit_adds_two() {
        let catalogs = Catalogs::load().unwrap();
        let result = predict(&strings(&["design"]), "global", &catalogs, 83.0);
        let top = &result.career_recommendations[0];
        assert_eq!(top.field, "UX/UI Design");
        assert!((top.match_score - 3.5).abs() < 1e-9);
        assert_eq!(top.salary, "$85,000");
    }

    #[test]
    fn test_india_salaries_are_in_rupees() {
        let catalogs = Catalogs::load().unwrap();
        let result = predict(&[], "Pune, India", &catalogs, 83.0);
        assert_eq!(result.location, "India");
        assert_eq!(result.career_recommendations[0].salary, "₹91,30,000");
    }

    #[test]
    fn test_skills_analysis_for_programming() {
        let catalogs = Catalogs::load().unwrap();
        let analysis = analyze_skills(
            &strings(&["Programming", "programming"]),
            catalogs.market.market_top_skills(),
        );
        assert_eq!(analysis.relevant_skills.len(), 5);
        assert_eq!(analysis.in_demand_skills, vec!["JavaScript", "Python"]);
        assert_eq!(
            analysis.skill_gaps,
            vec![
                "Data Analysis",
                "Cloud Computing",
                "Machine Learning",
                "UI/UX",
                "Project Management"
            ]
        );
    }

    #[test]
    fn test_upskilling_routes_take_three_gaps() {
        let catalogs = Catalogs::load().unwrap();
        let result = predict(&strings(&["writing"]), "global", &catalogs, 83.0);
        let route = &result.upskilling_routes[0];
        assert_eq!(route.required_skills, vec!["JavaScript", "Python", "Data Analysis"]);
        let first = &route.learning_paths[0].resources;
        assert_eq!(first[0].name, "Introduction to JavaScript");
        assert_eq!(first[1].provider, "YouTube");
    }
}
