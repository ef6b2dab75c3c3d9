//! Resume keyword extraction compared against a job title's requirements.

use serde::Serialize;

use crate::catalog::resources::ResourceCatalog;
use crate::catalog::skills::{
    JobRequirements, DEFAULT_JOB_REQUIREMENTS, JOB_REQUIREMENTS, SOFT_SKILL_KEYWORDS,
    TECHNICAL_KEYWORDS,
};
use crate::matching::gaps::SkillGap;
use crate::matching::normalize::{contains_keyword, normalize};
use crate::models::resource::{LearningResource, ResourceType};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSkills {
    pub technical: Vec<&'static str>,
    pub soft_skills: Vec<&'static str>,
    pub proficiency_level: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkills {
    pub technical: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    pub experience: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecommendations {
    pub technical_skills_to_improve: Vec<SkillGap>,
    pub soft_skills_to_improve: Vec<SkillGap>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGapAnalysis {
    pub match_percentage: u32,
    pub missing_technical_skills: Vec<&'static str>,
    pub missing_soft_skills: Vec<&'static str>,
    pub recommendations: SkillRecommendations,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysisReport {
    pub extracted_skills: ExtractedSkills,
    pub required_skills: RequiredSkills,
    pub skills_gap_analysis: SkillsGapAnalysis,
}

pub fn analyze(resume: &str, job_title: &str, catalog: &ResourceCatalog) -> SkillsAnalysisReport {
    let extracted = extract_skills(resume);
    let required = requirements_for(job_title);

    let missing_technical: Vec<&'static str> = required
        .technical
        .iter()
        .filter(|s| !extracted.technical.contains(*s))
        .copied()
        .collect();
    let missing_soft: Vec<&'static str> = required
        .soft_skills
        .iter()
        .filter(|s| !extracted.soft_skills.contains(*s))
        .copied()
        .collect();

    let total = required.technical.len() + required.soft_skills.len();
    let missing = missing_technical.len() + missing_soft.len();

    let recommendations = SkillRecommendations {
        technical_skills_to_improve: missing_technical
            .iter()
            .map(|s| technical_resources(s, catalog))
            .collect(),
        soft_skills_to_improve: missing_soft
            .iter()
            .map(|s| soft_skill_resources(s, catalog))
            .collect(),
    };

    SkillsAnalysisReport {
        extracted_skills: extracted,
        required_skills: RequiredSkills {
            technical: required.technical,
            soft_skills: required.soft_skills,
            experience: required.experience,
        },
        skills_gap_analysis: SkillsGapAnalysis {
            match_percentage: match_percentage(missing, total),
            missing_technical_skills: missing_technical,
            missing_soft_skills: missing_soft,
            recommendations,
        },
    }
}

/// Keywords found anywhere in the resume text.
pub fn extract_skills(resume: &str) -> ExtractedSkills {
    let found = |keywords: &[&'static str]| -> Vec<&'static str> {
        keywords
            .iter()
            .filter(|k| contains_keyword(resume, k))
            .copied()
            .collect()
    };
    ExtractedSkills {
        technical: found(TECHNICAL_KEYWORDS),
        soft_skills: found(SOFT_SKILL_KEYWORDS),
        proficiency_level: "Intermediate",
    }
}

/// First job whose key occurs in the title, else entry-level defaults.
pub fn requirements_for(job_title: &str) -> &'static JobRequirements {
    let folded = normalize(job_title);
    JOB_REQUIREMENTS
        .iter()
        .find(|job| folded.contains(job.key))
        .unwrap_or(&DEFAULT_JOB_REQUIREMENTS)
}

fn match_percentage(missing: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((1.0 - missing as f64 / total as f64) * 100.0).round() as u32
}

fn technical_resources(skill: &str, catalog: &ResourceCatalog) -> SkillGap {
    SkillGap {
        skill: skill.to_string(),
        resources: vec![
            LearningResource::new(
                ResourceType::Course,
                format!("Learn {skill}"),
                "Udemy",
                catalog.search_url("Udemy", skill, ResourceType::Course),
            ),
            LearningResource::new(
                ResourceType::Tutorial,
                format!("{skill} Fundamentals"),
                "freeCodeCamp",
                catalog.search_url("freeCodeCamp", skill, ResourceType::Tutorial),
            ),
        ],
    }
}

fn soft_skill_resources(skill: &str, catalog: &ResourceCatalog) -> SkillGap {
    SkillGap {
        skill: skill.to_string(),
        resources: vec![
            LearningResource::new(
                ResourceType::Article,
                format!("Developing {skill}"),
                "LinkedIn Learning",
                catalog.search_url("LinkedIn Learning", skill, ResourceType::Article),
            ),
            LearningResource::new(
                ResourceType::Book,
                format!("Mastering {skill}"),
                "Goodreads",
                catalog.search_url("Goodreads", skill, ResourceType::Book),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Frontend engineer. Built React apps in JavaScript and CSS, \
        versioned with Git. Strong communication and teamwork.";

    #[test]
    fn test_extracts_keywords_case_insensitively() {
        let skills = extract_skills("experienced in PYTHON and docker, good leadership");
        assert!(skills.technical.contains(&"Python"));
        assert!(skills.technical.contains(&"Docker"));
        assert_eq!(skills.soft_skills, vec!["Leadership"]);
    }

    #[test]
    fn test_software_developer_gap() {
        let report = analyze(RESUME, "Senior Software Developer", &ResourceCatalog);
        assert_eq!(report.required_skills.experience, "1-3 years");

        let gap = &report.skills_gap_analysis;
        // HTML and CSS are not resume keywords, so they always count as missing
        assert_eq!(gap.missing_technical_skills, vec!["HTML", "CSS", "Node.js"]);
        assert_eq!(gap.missing_soft_skills, vec!["Problem Solving"]);
        assert_eq!(gap.match_percentage, 56);

        let html = &gap.recommendations.technical_skills_to_improve[0];
        assert_eq!(html.resources[0].name, "Learn HTML");
        assert_eq!(html.resources[1].provider, "freeCodeCamp");
        let soft = &gap.recommendations.soft_skills_to_improve[0];
        assert_eq!(soft.resources[1].provider, "Goodreads");
    }

    #[test]
    fn test_unknown_title_uses_defaults() {
        let required = requirements_for("Astronaut");
        assert_eq!(required.experience, "Entry level");
        assert_eq!(requirements_for("UX Designer II").key, "ux designer");
    }

    #[test]
    fn test_match_percentage_bounds() {
        assert_eq!(match_percentage(0, 6), 100);
        assert_eq!(match_percentage(6, 6), 0);
        assert_eq!(match_percentage(0, 0), 100);
    }
}
