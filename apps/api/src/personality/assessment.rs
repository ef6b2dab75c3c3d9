//! Personality quiz scoring.
//!
//! An [`AnswerSheet`] collects answers; [`AnswerSheet::score`] consumes it and
//! produces the terminal [`PersonalityReport`].

use serde::Serialize;

use crate::catalog::personality::{Dimension, PersonalityCatalog, MAX_RAW_SCORE};

/// Answer values accepted on the 1..=5 agreement scale.
pub const MIN_ANSWER: i64 = 1;
pub const MAX_ANSWER: i64 = 5;

const PRIMARY_CAREERS: usize = 3;
const SECONDARY_CAREERS: usize = 2;
const TERTIARY_CAREERS: usize = 1;
const PRIMARY_ADJECTIVES: usize = 3;
const SECONDARY_ADJECTIVES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub name: Dimension,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityReport {
    /// Highest score first.
    pub dimensions: Vec<DimensionScore>,
    pub personality_profile: &'static str,
    pub career_recommendations: Vec<&'static str>,
    pub traits: Vec<&'static str>,
    pub primary_trait: Dimension,
    pub secondary_trait: Dimension,
}

/// Answers recorded so far. Unknown question ids add nothing.
#[derive(Debug, Clone)]
pub struct AnswerSheet {
    catalog: PersonalityCatalog,
    raw: [i64; 5],
}

impl AnswerSheet {
    pub fn new(catalog: PersonalityCatalog) -> Self {
        Self { catalog, raw: [0; 5] }
    }

    pub fn record(&mut self, question_id: &str, value: i64) {
        for dim in self.catalog.dimensions_for(question_id) {
            self.raw[dim.index()] += value;
        }
    }

    pub fn score(self) -> PersonalityReport {
        let mut dimensions: Vec<DimensionScore> = Dimension::ALL
            .iter()
            .map(|&name| DimensionScore {
                name,
                score: normalize_score(self.raw[name.index()]),
            })
            .collect();
        // stable: ties keep declaration order
        dimensions.sort_by(|a, b| b.score.cmp(&a.score));

        let primary = dimensions[0].name;
        let secondary = dimensions[1].name;
        let catalog = self.catalog;

        let mut career_recommendations: Vec<&'static str> = Vec::new();
        let picks = [
            (dimensions[0].name, PRIMARY_CAREERS),
            (dimensions[1].name, SECONDARY_CAREERS),
            (dimensions[2].name, TERTIARY_CAREERS),
        ];
        for (dim, take) in picks {
            for career in catalog.careers(dim).iter().take(take) {
                if !career_recommendations.contains(career) {
                    career_recommendations.push(*career);
                }
            }
        }

        let mut traits = vec![primary.name(), secondary.name()];
        traits.extend(catalog.adjectives(primary).iter().take(PRIMARY_ADJECTIVES));
        traits.extend(catalog.adjectives(secondary).iter().take(SECONDARY_ADJECTIVES));

        PersonalityReport {
            personality_profile: catalog.profile_text(primary, secondary),
            dimensions,
            career_recommendations,
            traits,
            primary_trait: primary,
            secondary_trait: secondary,
        }
    }
}

/// Percentage of the maximum raw score, clamped to 0..=100.
fn normalize_score(raw: i64) -> u32 {
    let pct = (raw as f64 / MAX_RAW_SCORE * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(answers: &[(&str, i64)]) -> AnswerSheet {
        let mut sheet = AnswerSheet::new(PersonalityCatalog);
        for (id, value) in answers {
            sheet.record(id, *value);
        }
        sheet
    }

    #[test]
    fn test_all_fives_scores_sixty_everywhere() {
        let answers: Vec<(String, i64)> = (1..=10).map(|i| (format!("q{i}"), 5)).collect();
        let mut s = AnswerSheet::new(PersonalityCatalog);
        for (id, v) in &answers {
            s.record(id, *v);
        }
        let report = s.score();

        assert!(report.dimensions.iter().all(|d| d.score == 60));
        assert_eq!(report.primary_trait, Dimension::Analytical);
        assert_eq!(report.secondary_trait, Dimension::Creative);
        assert_eq!(
            report.traits,
            vec![
                "Analytical",
                "Creative",
                "logical",
                "detail-oriented",
                "systematic",
                "innovative",
                "imaginative"
            ]
        );
        assert_eq!(
            report.career_recommendations,
            vec![
                "Data Scientist",
                "Software Engineer",
                "Financial Analyst",
                "UX/UI Designer",
                "Content Creator",
                "Project Manager"
            ]
        );
    }

    #[test]
    fn test_empty_sheet_uses_declaration_order() {
        let report = AnswerSheet::new(PersonalityCatalog).score();
        assert!(report.dimensions.iter().all(|d| d.score == 0));
        assert_eq!(report.primary_trait, Dimension::Analytical);
        assert_eq!(report.dimensions[4].name, Dimension::Leadership);
    }

    #[test]
    fn test_unknown_questions_are_ignored() {
        let report = sheet(&[("q99", 5), ("q4", 5)]).score();
        assert_eq!(report.primary_trait, Dimension::Social);
        assert_eq!(report.dimensions[0].score, 20);
    }

    #[test]
    fn test_scores_are_clamped() {
        let many: Vec<(&str, i64)> = std::iter::repeat(("q1", 5)).take(10).collect();
        let report = sheet(&many).score();
        assert_eq!(report.dimensions[0].score, 100);

        let negative = sheet(&[("q2", -50)]).score();
        assert!(negative.dimensions.iter().all(|d| d.score == 0));
        assert_eq!(negative.secondary_trait, Dimension::Creative);
    }

    #[test]
    fn test_profile_text_matches_top_pair() {
        let report = sheet(&[("q5", 5), ("q4", 4)]).score();
        assert_eq!(report.primary_trait, Dimension::Leadership);
        assert_eq!(report.secondary_trait, Dimension::Social);
        assert!(report.personality_profile.starts_with("You are a people-focused leader"));
    }
}
