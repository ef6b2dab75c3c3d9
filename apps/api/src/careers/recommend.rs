//! Catalog-based career recommendations with per-career skill gaps.

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::matching::currency::format_currency;
use crate::matching::gaps::{compute_gaps, SkillGap};
use crate::matching::scoring::score_careers;
use crate::models::career::{GrowthOutlook, ScoreBreakdown, ScoredCareer};
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub match_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub average_salary: String,
    pub growth_outlook: GrowthOutlook,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSkillGaps {
    pub career_title: String,
    pub missing_skills: Vec<String>,
    pub learning_paths: Vec<SkillGap>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommendations: Vec<CareerRecommendation>,
    /// Careers the profile already fully covers are left out.
    pub skill_gaps: Vec<CareerSkillGaps>,
}

pub fn recommend(profile: &UserProfile, catalogs: &Catalogs) -> Recommendations {
    let ranked = score_careers(profile, &catalogs.recommendation);

    let skill_gaps = ranked
        .iter()
        .filter_map(|scored| {
            let learning_paths = compute_gaps(scored.career, &profile.skills, &catalogs.resources);
            if learning_paths.is_empty() {
                return None;
            }
            Some(CareerSkillGaps {
                career_title: scored.career.title.clone(),
                missing_skills: learning_paths.iter().map(|g| g.skill.clone()).collect(),
                learning_paths,
            })
        })
        .collect();

    Recommendations {
        recommendations: ranked.iter().map(to_recommendation).collect(),
        skill_gaps,
    }
}

fn to_recommendation(scored: &ScoredCareer<'_>) -> CareerRecommendation {
    let career = scored.career;
    CareerRecommendation {
        title: career.title.clone(),
        match_score: scored.match_score,
        score_breakdown: scored.breakdown,
        average_salary: format_currency(
            career.salary_range.average(),
            career.salary_range.region,
        ),
        growth_outlook: career.growth_outlook,
        description: format!(
            "A career in {} involves using skills like {}.",
            career.title,
            career.required_skills.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::AcademicBackground;

    #[test]
    fn test_recommendation_carries_average_salary() {
        let catalogs = Catalogs::load().unwrap();
        let profile = UserProfile::new(
            vec!["technology".into()],
            vec!["javascript".into(), "html".into()],
        )
        .with_academic_background(AcademicBackground::with_field("Computer Science"));

        let result = recommend(&profile, &catalogs);
        let top = &result.recommendations[0];
        assert_eq!(top.title, "Software Developer");
        assert_eq!(top.average_salary, "$95,000");
        assert!(top.description.starts_with("A career in Software Developer involves"));

        let gaps = &result.skill_gaps[0];
        assert_eq!(gaps.career_title, "Software Developer");
        assert_eq!(gaps.missing_skills, vec!["programming", "problem solving", "css"]);
    }

    #[test]
    fn test_fully_covered_career_has_no_gap_entry() {
        let catalogs = Catalogs::load().unwrap();
        let skills = catalogs.recommendation[0].required_skills.clone();
        let profile = UserProfile::new(vec![], skills);
        let result = recommend(&profile, &catalogs);
        assert_eq!(result.recommendations[0].title, "Software Developer");
        assert!(result
            .skill_gaps
            .iter()
            .all(|g| g.career_title != "Software Developer"));
    }
}
