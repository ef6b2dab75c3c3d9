//! Skill-gap detection and the follow-up plan built from it.

use serde::Serialize;

use crate::catalog::resources::ResourceCatalog;
use crate::models::career::CareerDefinition;
use crate::models::resource::LearningResource;

use super::normalize::{any_contains, contains_keyword, normalize};
use super::scoring::education_matches;

/// Curated resources offered per missing skill.
pub const MAX_RESOURCES_PER_GAP: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

/// One entry per required skill not covered by any user skill, in catalog order.
pub fn compute_gaps(
    career: &CareerDefinition,
    user_skills: &[String],
    resources: &ResourceCatalog,
) -> Vec<SkillGap> {
    missing_skills(&career.required_skills, user_skills)
        .into_iter()
        .map(|skill| SkillGap {
            resources: resources_for(&skill, resources),
            skill,
        })
        .collect()
}

/// Required skills that no user skill contains.
pub fn missing_skills(required: &[String], user_skills: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|req| !any_contains(user_skills, req))
        .cloned()
        .collect()
}

fn resources_for(skill: &str, catalog: &ResourceCatalog) -> Vec<LearningResource> {
    match catalog.curated(&normalize(skill)) {
        Some(mut curated) if !curated.is_empty() => {
            curated.truncate(MAX_RESOURCES_PER_GAP);
            curated
        }
        _ => vec![catalog.fallback(skill)],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepKind {
    Education,
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    Networking,
    #[serde(rename = "Job Search")]
    JobSearch,
    Certification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub description: String,
    pub timeframe: &'static str,
    pub priority: Priority,
}

/// The ordered action plan for pursuing `career` from the given field of study.
pub fn next_steps(career: &CareerDefinition, field: Option<&str>) -> Vec<NextStep> {
    let mut steps = Vec::with_capacity(5);

    let has_education = field.is_some_and(|f| education_matches(f, &career.education_path));
    if !has_education {
        if let Some(first) = career.education_path.first() {
            steps.push(NextStep {
                kind: StepKind::Education,
                description: format!("Consider pursuing {first}"),
                timeframe: "1-4 years",
                priority: Priority::High,
            });
        }
    }

    steps.push(NextStep {
        kind: StepKind::SkillDevelopment,
        description: format!(
            "Develop key skills in {}",
            career.required_skills.join(", ")
        ),
        timeframe: "3-12 months",
        priority: Priority::High,
    });
    steps.push(NextStep {
        kind: StepKind::Networking,
        description: format!("Connect with professionals in {} field", career.title),
        timeframe: "Ongoing",
        priority: Priority::Medium,
    });
    if let Some(entry_role) = career.roles.first() {
        steps.push(NextStep {
            kind: StepKind::JobSearch,
            description: format!("Apply for {entry_role} positions"),
            timeframe: "3-6 months",
            priority: Priority::Medium,
        });
    }
    if career
        .education_path
        .iter()
        .any(|e| contains_keyword(e, "certification"))
    {
        steps.push(NextStep {
            kind: StepKind::Certification,
            description: format!("Obtain relevant certifications for {}", career.title),
            timeframe: "3-12 months",
            priority: Priority::Medium,
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn career<'a>(catalogs: &'a Catalogs, title: &str) -> &'a CareerDefinition {
        catalogs
            .recommendation
            .iter()
            .chain(catalogs.paths.iter())
            .find(|c| c.title == title)
            .unwrap()
    }

    #[test]
    fn test_superset_of_skills_leaves_no_gaps() {
        let catalogs = Catalogs::load().unwrap();
        let dev = career(&catalogs, "Software Developer");
        let mut skills = dev.required_skills.clone();
        skills.push("rust".into());
        assert!(compute_gaps(dev, &skills, &catalogs.resources).is_empty());
    }

    #[test]
    fn test_curated_and_fallback_resources() {
        let catalogs = Catalogs::load().unwrap();
        let data = career(&catalogs, "Data Scientist");
        let gaps = compute_gaps(data, &strings(&["SQL"]), &catalogs.resources);

        let skills: Vec<_> = gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(
            skills,
            vec!["statistics", "python", "machine learning", "data analysis"]
        );

        let python = &gaps[1];
        assert_eq!(python.resources.len(), 2);
        assert_eq!(python.resources[0].name, "Learn Python");

        let stats = &gaps[0];
        assert_eq!(stats.resources.len(), 1);
        assert_eq!(stats.resources[0].name, "Learn statistics");
        assert_eq!(stats.resources[0].provider, "Coursera");
    }

    #[test]
    fn test_curated_lookup_folds_case() {
        let catalogs = Catalogs::load().unwrap();
        let gaps = compute_gaps(
            career(&catalogs, "Software Development"),
            &[],
            &catalogs.resources,
        );
        assert_eq!(gaps[0].skill, "Programming");
        assert_eq!(gaps[0].resources[0].provider, "Codecademy");
    }

    #[test]
    fn test_next_steps_without_matching_education() {
        let catalogs = Catalogs::load().unwrap();
        let cyber = career(&catalogs, "Cybersecurity");
        let steps = next_steps(cyber, Some("History"));
        let kinds: Vec<_> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Education,
                StepKind::SkillDevelopment,
                StepKind::Networking,
                StepKind::JobSearch,
                StepKind::Certification,
            ]
        );
        assert_eq!(steps[0].description, "Consider pursuing Computer Science Degree");
        assert_eq!(steps[3].description, "Apply for Security Analyst positions");
    }

    #[test]
    fn test_next_steps_skip_education_when_field_matches() {
        let catalogs = Catalogs::load().unwrap();
        let nursing = career(&catalogs, "Nursing");
        let steps = next_steps(nursing, Some("nursing"));
        assert_eq!(steps[0].kind, StepKind::SkillDevelopment);
        // "Specialization Certifications" triggers the certification step
        assert_eq!(steps.last().unwrap().kind, StepKind::Certification);
    }
}
