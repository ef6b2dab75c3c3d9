//! Career paths: cluster pre-selection, scoring, learning plan and location view.

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::matching::gaps::{compute_gaps, next_steps, NextStep, SkillGap};
use crate::matching::location::{location_specific, resolve_location, LocationSpecific};
use crate::matching::scoring::score_careers;
use crate::models::career::CareerDefinition;
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    #[serde(flatten)]
    pub career: CareerDefinition,
    pub match_score: u32,
    pub learning_path: Vec<SkillGap>,
    pub next_steps: Vec<NextStep>,
    pub location_specific: LocationSpecific,
}

/// Top career paths for a profile, each with its plan and local salary view.
pub fn career_paths(profile: &UserProfile, catalogs: &Catalogs, usd_to_inr: f64) -> Vec<CareerPath> {
    let candidates = catalogs.paths_for_interests(&profile.interests);
    let location = resolve_location(&profile.location);

    score_careers(profile, &candidates)
        .into_iter()
        .map(|scored| {
            let career = scored.career;
            CareerPath {
                learning_path: compute_gaps(career, &profile.skills, &catalogs.resources),
                next_steps: next_steps(career, profile.education_field()),
                location_specific: location_specific(&career.salary_range, location, usd_to_inr),
                match_score: scored.match_score,
                career: career.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::AcademicBackground;

    #[test]
    fn test_tech_interest_limits_to_technology_cluster() {
        let catalogs = Catalogs::load().unwrap();
        let profile = UserProfile::new(vec!["technology".into()], vec!["Python".into()])
            .with_academic_background(AcademicBackground::with_field("Statistics"));

        let paths = career_paths(&profile, &catalogs, 83.0);
        let titles: Vec<_> = paths.iter().map(|p| p.career.title.as_str()).collect();
        // Data Science: python (+2) and statistics field (+3)
        assert_eq!(titles, vec!["Data Science", "Software Development", "Cybersecurity"]);
        assert_eq!(paths[0].match_score, 5);
        assert_eq!(paths[0].location_specific.location, "Global");
    }

    #[test]
    fn test_india_location_reports_rupees() {
        let catalogs = Catalogs::load().unwrap();
        let profile = UserProfile::new(vec!["nursing care".into()], vec![])
            .with_location(Some("Mumbai, India".into()));

        let paths = career_paths(&profile, &catalogs, 83.0);
        assert_eq!(paths[0].career.title, "Nursing");
        let local = &paths[0].location_specific;
        assert_eq!(local.currency, "INR (₹)");
        assert!(local.adjusted_salary_range.starts_with('₹'));
    }

    #[test]
    fn test_serialized_path_is_flat_camel_case() {
        let catalogs = Catalogs::load().unwrap();
        let paths = career_paths(&UserProfile::default(), &catalogs, 83.0);
        let json = serde_json::to_value(&paths[0]).unwrap();
        assert!(json.get("requiredSkills").is_some());
        assert!(json.get("learningPath").is_some());
        assert_eq!(json["salaryRange"], "$70,000 - $150,000+");
    }
}
