//! Personality quiz tables: question routing, profile texts, adjectives and careers.

use serde::{Deserialize, Serialize};

/// The five scored dimensions, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Analytical,
    Creative,
    Practical,
    Social,
    Leadership,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Analytical,
        Dimension::Creative,
        Dimension::Practical,
        Dimension::Social,
        Dimension::Leadership,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Analytical => "Analytical",
            Dimension::Creative => "Creative",
            Dimension::Practical => "Practical",
            Dimension::Social => "Social",
            Dimension::Leadership => "Leadership",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

use Dimension::*;

/// Raw score that normalizes to 100.
pub const MAX_RAW_SCORE: f64 = 25.0;

const QUESTION_MAP: &[(&str, &[Dimension])] = &[
    ("q1", &[Analytical]),
    ("q2", &[Creative]),
    ("q3", &[Practical]),
    ("q4", &[Social]),
    ("q5", &[Leadership]),
    ("q6", &[Analytical, Practical]),
    ("q7", &[Creative, Social]),
    ("q8", &[Leadership, Social]),
    ("q9", &[Analytical, Creative]),
    ("q10", &[Practical, Leadership]),
];

const PROFILES: &[(Dimension, Dimension, &str)] = &[
    (Analytical, Creative, "You are a logical thinker with a creative edge. You excel at analyzing problems and finding innovative solutions. You likely enjoy work that combines systematic thinking with opportunities for innovation."),
    (Analytical, Practical, "You have a methodical and pragmatic approach to problem-solving. You excel at detailed analysis and implementing practical solutions. You likely prefer work that requires precision and has tangible outcomes."),
    (Analytical, Social, "You combine analytical thinking with strong interpersonal skills. You excel at understanding complex systems and explaining them to others. You likely enjoy work that involves both analysis and collaboration."),
    (Analytical, Leadership, "You have a strategic mind with leadership capabilities. You excel at analyzing situations and guiding others toward solutions. You likely enjoy work that involves decision-making and directing projects."),
    (Creative, Analytical, "You have an innovative mind balanced with logical thinking. You excel at generating original ideas that are also practical and feasible. You likely enjoy work that allows you to design new solutions within structured frameworks."),
    (Creative, Practical, "You combine creativity with a hands-on approach. You excel at turning ideas into reality and finding innovative solutions to everyday problems. You likely enjoy work that involves both design and implementation."),
    (Creative, Social, "You have a creative spirit with strong people skills. You excel at collaborative innovation and inspiring others. You likely enjoy work that involves group creativity and sharing ideas."),
    (Creative, Leadership, "You are an innovative visionary with leadership abilities. You excel at inspiring others with your creative ideas and leading projects in new directions. You likely enjoy work that allows you to guide creative initiatives."),
    (Practical, Analytical, "You have a pragmatic approach supported by analytical skills. You excel at implementing effective solutions based on careful analysis. You likely enjoy work that requires both planning and execution."),
    (Practical, Creative, "You combine hands-on skills with creative thinking. You excel at finding innovative yet practical solutions to problems. You likely enjoy work that allows you to improve existing systems with new ideas."),
    (Practical, Social, "You have a practical mindset with strong interpersonal skills. You excel at implementing solutions while working effectively with others. You likely enjoy collaborative work with tangible outcomes."),
    (Practical, Leadership, "You are a practical leader who gets things done. You excel at guiding teams toward efficient and effective solutions. You likely enjoy work that involves managing projects and resources."),
    (Social, Analytical, "You combine people skills with analytical thinking. You excel at understanding both people and systems. You likely enjoy work that involves analyzing social dynamics or explaining complex ideas to others."),
    (Social, Creative, "You have strong interpersonal skills paired with creativity. You excel at collaborative innovation and understanding others' needs. You likely enjoy work that involves group creativity and communication."),
    (Social, Practical, "You combine people skills with a practical approach. You excel at working with others to implement effective solutions. You likely enjoy collaborative work with tangible outcomes."),
    (Social, Leadership, "You are a people-oriented leader. You excel at understanding team dynamics and motivating others. You likely enjoy work that involves building and leading teams."),
    (Leadership, Analytical, "You are a strategic leader with analytical skills. You excel at making data-driven decisions and guiding others based on careful analysis. You likely enjoy work that involves directing projects and analyzing outcomes."),
    (Leadership, Creative, "You are an innovative leader who inspires others. You excel at guiding creative initiatives and encouraging new ideas. You likely enjoy work that involves leading teams in creative directions."),
    (Leadership, Practical, "You are a results-oriented leader. You excel at guiding teams toward efficient and effective solutions. You likely enjoy work that involves managing projects and achieving tangible outcomes."),
    (Leadership, Social, "You are a people-focused leader. You excel at understanding team dynamics and motivating others. You likely enjoy work that involves building relationships and guiding teams toward shared goals."),
];

pub const FALLBACK_PROFILE: &str = "You have a unique combination of traits that gives you versatility across different types of work. Your specific strengths will help you excel in roles that align with your personal interests and values.";

/// Indexed by `Dimension::index`.
const ADJECTIVES: [&[&str]; 5] = [
    &["logical", "detail-oriented", "systematic", "objective", "critical-thinker"],
    &["innovative", "imaginative", "original", "artistic", "visionary"],
    &["hands-on", "efficient", "organized", "reliable", "resourceful"],
    &["empathetic", "communicative", "collaborative", "supportive", "personable"],
    &["decisive", "motivating", "strategic", "confident", "influential"],
];

/// Indexed by `Dimension::index`.
const CAREERS: [&[&str]; 5] = [
    &["Data Scientist", "Software Engineer", "Financial Analyst", "Research Scientist", "Business Analyst"],
    &["UX/UI Designer", "Content Creator", "Marketing Specialist", "Product Designer", "Art Director"],
    &["Project Manager", "Operations Manager", "Civil Engineer", "Healthcare Administrator", "Supply Chain Manager"],
    &["Human Resources Specialist", "Customer Success Manager", "Social Worker", "Teacher/Trainer", "Community Manager"],
    &["Product Manager", "Team Lead", "Entrepreneur", "Program Director", "Executive"],
];

/// Read-only view over the personality tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalityCatalog;

impl PersonalityCatalog {
    /// Dimensions fed by a question; empty for unknown ids.
    pub fn dimensions_for(&self, question_id: &str) -> &'static [Dimension] {
        QUESTION_MAP
            .iter()
            .find(|(id, _)| *id == question_id)
            .map(|(_, dims)| *dims)
            .unwrap_or(&[])
    }

    pub fn profile_text(&self, primary: Dimension, secondary: Dimension) -> &'static str {
        PROFILES
            .iter()
            .find(|(p, s, _)| *p == primary && *s == secondary)
            .map(|(_, _, text)| *text)
            .unwrap_or(FALLBACK_PROFILE)
    }

    pub fn adjectives(&self, dimension: Dimension) -> &'static [&'static str] {
        ADJECTIVES[dimension.index()]
    }

    pub fn careers(&self, dimension: Dimension) -> &'static [&'static str] {
        CAREERS[dimension.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table_has_every_off_diagonal_pair() {
        let catalog = PersonalityCatalog;
        for p in Dimension::ALL {
            for s in Dimension::ALL {
                let text = catalog.profile_text(p, s);
                if p == s {
                    assert_eq!(text, FALLBACK_PROFILE);
                } else {
                    assert_ne!(text, FALLBACK_PROFILE, "missing {p:?}/{s:?}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_question_has_no_dimensions() {
        assert!(PersonalityCatalog.dimensions_for("q42").is_empty());
        assert_eq!(
            PersonalityCatalog.dimensions_for("q8"),
            &[Dimension::Leadership, Dimension::Social]
        );
    }

    #[test]
    fn test_each_dimension_reaches_three_questions() {
        let catalog = PersonalityCatalog;
        for dim in Dimension::ALL {
            let count = QUESTION_MAP
                .iter()
                .filter(|(id, _)| catalog.dimensions_for(id).contains(&dim))
                .count();
            assert_eq!(count, 3, "{dim:?}");
        }
        assert_eq!(QUESTION_MAP.len(), 10);
    }
}
