use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Tutorial,
    Book,
    Article,
    Video,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Course,
        ResourceType::Tutorial,
        ResourceType::Book,
        ResourceType::Article,
        ResourceType::Video,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Course => "Course",
            ResourceType::Tutorial => "Tutorial",
            ResourceType::Book => "Book",
            ResourceType::Article => "Article",
            ResourceType::Video => "Video",
        }
    }
}

/// A pointer to somewhere a skill can be learned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub name: String,
    pub provider: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl LearningResource {
    pub fn new(
        resource_type: ResourceType,
        name: impl Into<String>,
        provider: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            resource_type,
            name: name.into(),
            provider: provider.into(),
            url: url.into(),
            level: None,
            duration: None,
            cost: None,
            rating: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

/// Appends `param=value` to `base`, URL-encoded.
pub fn search_url(base: &str, param: &str, value: &str) -> String {
    match reqwest::Url::parse_with_params(base, &[(param, value)]) {
        Ok(url) => url.to_string(),
        Err(_) => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_value() {
        let url = search_url("https://www.coursera.org/search", "query", "data analysis");
        assert_eq!(url, "https://www.coursera.org/search?query=data+analysis");
    }

    #[test]
    fn test_resource_serializes_type_field() {
        let r = LearningResource::new(ResourceType::Course, "Learn SQL", "Coursera", "https://x");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "Course");
        assert!(json.get("duration").is_none());
    }
}
