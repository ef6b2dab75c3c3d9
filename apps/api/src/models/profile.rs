use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "global";

/// Field of study and level, both free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicBackground {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl AcademicBackground {
    pub fn with_field(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            level: None,
        }
    }
}

/// What one request tells us about a user. Lives for a single scoring pass.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub academic_background: AcademicBackground,
    pub personality_traits: Vec<String>,
    pub location: String,
}

impl UserProfile {
    /// Blank entries are dropped; they would otherwise match every keyword.
    pub fn new(interests: Vec<String>, skills: Vec<String>) -> Self {
        Self {
            interests: non_blank(interests),
            skills: non_blank(skills),
            academic_background: AcademicBackground::default(),
            personality_traits: Vec::new(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    pub fn with_academic_background(mut self, background: AcademicBackground) -> Self {
        self.academic_background = background;
        self
    }

    pub fn with_personality_traits(mut self, traits: Vec<String>) -> Self {
        self.personality_traits = non_blank(traits);
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        if let Some(loc) = location.filter(|l| !l.trim().is_empty()) {
            self.location = loc;
        }
        self
    }

    /// The field of study, if one was given and is not blank.
    pub fn education_field(&self) -> Option<&str> {
        self.academic_background
            .field
            .as_deref()
            .filter(|f| !f.trim().is_empty())
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.trim().is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entries_are_dropped() {
        let profile = UserProfile::new(
            vec!["tech".into(), "  ".into()],
            vec!["".into(), "python".into()],
        );
        assert_eq!(profile.interests, vec!["tech"]);
        assert_eq!(profile.skills, vec!["python"]);
    }

    #[test]
    fn test_location_defaults_to_global() {
        let profile = UserProfile::new(vec![], vec![]).with_location(None);
        assert_eq!(profile.location, "global");
        let profile = profile.with_location(Some("Seattle".into()));
        assert_eq!(profile.location, "Seattle");
    }

    #[test]
    fn test_blank_field_is_absent() {
        let profile = UserProfile::new(vec![], vec![])
            .with_academic_background(AcademicBackground::with_field(" "));
        assert_eq!(profile.education_field(), None);
    }
}
