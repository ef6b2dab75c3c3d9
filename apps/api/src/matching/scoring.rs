//! Additive career scoring.
//!
//! Weights: +2 per matched required skill, +1 per interest found in a
//! required skill, +3 for a matching field of study, and up to +3 for
//! personality traits that echo the career's trait keywords.

use crate::models::career::{CareerDefinition, ScoreBreakdown, ScoredCareer};
use crate::models::profile::UserProfile;

use super::normalize::{any_contains, contains_keyword};

pub const TOP_N: usize = 3;

const SKILL_WEIGHT: u32 = 2;
const INTEREST_WEIGHT: u32 = 1;
const EDUCATION_WEIGHT: u32 = 3;
const PERSONALITY_CAP: u32 = 3;

/// The best [`TOP_N`] careers for a profile.
pub fn score_careers<'a>(
    profile: &UserProfile,
    catalog: &'a [CareerDefinition],
) -> Vec<ScoredCareer<'a>> {
    rank_careers(profile, catalog, TOP_N)
}

/// Scores every career and keeps the best `limit`. Ties keep catalog order.
pub fn rank_careers<'a>(
    profile: &UserProfile,
    catalog: &'a [CareerDefinition],
    limit: usize,
) -> Vec<ScoredCareer<'a>> {
    let mut scored: Vec<ScoredCareer<'a>> = catalog
        .iter()
        .map(|career| {
            let breakdown = breakdown(profile, career);
            ScoredCareer {
                career,
                match_score: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(limit);
    scored
}

pub fn breakdown(profile: &UserProfile, career: &CareerDefinition) -> ScoreBreakdown {
    ScoreBreakdown {
        skills: skill_score(&profile.skills, &career.required_skills),
        interests: interest_score(&profile.interests, &career.required_skills),
        education: education_score(profile.education_field(), &career.education_path),
        personality: personality_score(&profile.personality_traits, &career.traits),
    }
}

fn skill_score(user_skills: &[String], required: &[String]) -> u32 {
    let matched = required
        .iter()
        .filter(|req| any_contains(user_skills, req))
        .count() as u32;
    matched * SKILL_WEIGHT
}

fn interest_score(interests: &[String], required: &[String]) -> u32 {
    let matched = interests
        .iter()
        .filter(|interest| required.iter().any(|req| contains_keyword(req, interest)))
        .count() as u32;
    matched * INTEREST_WEIGHT
}

/// True when the field and an education entry contain one another.
pub fn education_matches(field: &str, education_path: &[String]) -> bool {
    education_path
        .iter()
        .any(|entry| contains_keyword(entry, field) || contains_keyword(field, entry))
}

fn education_score(field: Option<&str>, education_path: &[String]) -> u32 {
    match field {
        Some(f) if education_matches(f, education_path) => EDUCATION_WEIGHT,
        _ => 0,
    }
}

fn personality_score(user_traits: &[String], career_traits: &[String]) -> u32 {
    let matched = user_traits
        .iter()
        .filter(|t| career_traits.iter().any(|kw| contains_keyword(t, kw)))
        .count() as u32;
    matched.min(PERSONALITY_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::models::profile::AcademicBackground;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_software_developer_wins_for_web_profile() {
        let catalogs = Catalogs::load().unwrap();
        let profile = UserProfile::new(strings(&["technology"]), strings(&["javascript", "html"]))
            .with_academic_background(AcademicBackground::with_field("Computer Science"));

        let ranked = score_careers(&profile, &catalogs.recommendation);
        assert_eq!(ranked[0].career.title, "Software Developer");
        assert_eq!(ranked[0].breakdown.skills, 4);
        assert_eq!(ranked[0].breakdown.education, 3);
        assert_eq!(ranked[0].match_score, 7);
    }

    #[test]
    fn test_empty_profile_scores_zero_in_catalog_order() {
        let catalogs = Catalogs::load().unwrap();
        let ranked = score_careers(&UserProfile::default(), &catalogs.recommendation);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.match_score == 0));
        let titles: Vec<_> = ranked.iter().map(|r| r.career.title.as_str()).collect();
        assert_eq!(titles, vec!["Software Developer", "Data Scientist", "UX Designer"]);
    }

    #[test]
    fn test_limit_is_capped_by_catalog_size() {
        let catalogs = Catalogs::load().unwrap();
        let ranked = rank_careers(&UserProfile::default(), &catalogs.recommendation[..2], 3);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_interest_counts_once_per_interest() {
        let catalogs = Catalogs::load().unwrap();
        let data = &catalogs.recommendation[1];
        let profile = UserProfile::new(strings(&["data", "learning"]), vec![]);
        // "data" is in "data analysis", "learning" in "machine learning"
        assert_eq!(breakdown(&profile, data).interests, 2);
    }

    #[test]
    fn test_education_matches_either_direction() {
        let path = strings(&["Computer Science Degree", "Coding Bootcamp"]);
        assert!(education_matches("computer science", &path));
        assert!(education_matches("Coding Bootcamp (online)", &path));
        assert!(!education_matches("Biology", &path));
    }

    #[test]
    fn test_personality_bonus_is_capped() {
        let catalogs = Catalogs::load().unwrap();
        let dev = &catalogs.recommendation[0];
        let profile = UserProfile::new(vec![], vec![]).with_personality_traits(strings(&[
            "Analytical",
            "very logical",
            "problem-solver",
            "detail-oriented",
        ]));
        assert_eq!(breakdown(&profile, dev).personality, 3);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let catalogs = Catalogs::load().unwrap();
        let profile = UserProfile::new(strings(&["design"]), strings(&["figma", "research"]));
        let a: Vec<_> = score_careers(&profile, &catalogs.recommendation)
            .iter()
            .map(|r| (r.career.title.clone(), r.match_score))
            .collect();
        let b: Vec<_> = score_careers(&profile, &catalogs.recommendation)
            .iter()
            .map(|r| (r.career.title.clone(), r.match_score))
            .collect();
        assert_eq!(a, b);
    }
}
