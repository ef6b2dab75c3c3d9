//! Learning-resource tables: curated per-skill links and provider directories.

use crate::models::resource::{search_url, LearningResource, ResourceType};

pub(crate) struct ResourceSeed {
    pub name: &'static str,
    pub provider: &'static str,
    pub url: &'static str,
}

/// Curated resources keyed by lowercase skill.
pub(crate) const SKILL_RESOURCES: &[(&str, &[ResourceSeed])] = &[
    (
        "programming",
        &[
            ResourceSeed {
                name: "Introduction to Programming",
                provider: "Codecademy",
                url: "https://www.codecademy.com/learn/introduction-to-programming",
            },
            ResourceSeed {
                name: "Programming Fundamentals",
                provider: "edX",
                url: "https://www.edx.org/search?q=programming+fundamentals",
            },
        ],
    ),
    (
        "python",
        &[
            ResourceSeed {
                name: "Learn Python",
                provider: "Codecademy",
                url: "https://www.codecademy.com/learn/learn-python-3",
            },
            ResourceSeed {
                name: "Python for Everybody",
                provider: "Coursera",
                url: "https://www.coursera.org/specializations/python",
            },
        ],
    ),
    (
        "javascript",
        &[
            ResourceSeed {
                name: "JavaScript Basics",
                provider: "freeCodeCamp",
                url: "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/",
            },
            ResourceSeed {
                name: "JavaScript Essential Training",
                provider: "LinkedIn Learning",
                url: "https://www.linkedin.com/learning/javascript-essential-training",
            },
        ],
    ),
    (
        "design",
        &[
            ResourceSeed {
                name: "Intro to UX Design",
                provider: "Coursera",
                url: "https://www.coursera.org/learn/ux-design-fundamentals",
            },
            ResourceSeed {
                name: "Design Basics",
                provider: "Udemy",
                url: "https://www.udemy.com/topic/graphic-design/",
            },
        ],
    ),
    (
        "data analysis",
        &[
            ResourceSeed {
                name: "Data Analysis with Python",
                provider: "freeCodeCamp",
                url: "https://www.freecodecamp.org/learn/data-analysis-with-python/",
            },
            ResourceSeed {
                name: "Data Analysis Fundamentals",
                provider: "edX",
                url: "https://www.edx.org/search?q=data+analysis",
            },
        ],
    ),
];

/// Providers offered for each resource type, in listing order.
const PROVIDERS: &[(ResourceType, &[&str])] = &[
    (
        ResourceType::Course,
        &["Coursera", "Udemy", "edX", "LinkedIn Learning", "Pluralsight"],
    ),
    (
        ResourceType::Tutorial,
        &["freeCodeCamp", "W3Schools", "MDN Web Docs", "TutorialsPoint", "GeeksforGeeks"],
    ),
    (
        ResourceType::Book,
        &["O'Reilly", "Manning", "Packt", "Apress", "No Starch Press"],
    ),
    (
        ResourceType::Article,
        &["Medium", "Dev.to", "Smashing Magazine", "HackerNoon", "CSS-Tricks"],
    ),
    (
        ResourceType::Video,
        &["YouTube", "Udemy", "Pluralsight", "Frontend Masters", "egghead.io"],
    ),
];

/// Search endpoint and query parameter per provider.
const PROVIDER_SEARCH: &[(&str, &str, &str)] = &[
    ("Coursera", "https://www.coursera.org/search", "query"),
    ("Udemy", "https://www.udemy.com/courses/search/", "q"),
    ("edX", "https://www.edx.org/search", "q"),
    ("LinkedIn Learning", "https://www.linkedin.com/learning/search", "keywords"),
    ("Pluralsight", "https://www.pluralsight.com/search", "q"),
    ("freeCodeCamp", "https://www.freecodecamp.org/news/search", "query"),
    ("W3Schools", "https://www.w3schools.com/search/search.php", "q"),
    ("MDN Web Docs", "https://developer.mozilla.org/en-US/search", "q"),
    ("TutorialsPoint", "https://www.tutorialspoint.com/index.htm", "search"),
    ("GeeksforGeeks", "https://www.geeksforgeeks.org/search", "q"),
    ("Medium", "https://medium.com/search", "q"),
    ("Dev.to", "https://dev.to/search", "q"),
    ("Smashing Magazine", "https://www.smashingmagazine.com/search/", "q"),
    ("HackerNoon", "https://hackernoon.com/search", "query"),
    ("CSS-Tricks", "https://css-tricks.com/", "s"),
    ("Frontend Masters", "https://frontendmasters.com/search/", "q"),
    ("Goodreads", "https://www.goodreads.com/search", "q"),
];

/// Providers whose material is always free.
const FREE_PROVIDERS: &[&str] = &["freeCodeCamp", "W3Schools", "MDN Web Docs", "YouTube"];

pub const FALLBACK_PROVIDER: &str = "Coursera";

/// Read-only access to the resource tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceCatalog;

impl ResourceCatalog {
    /// Curated resources for a skill (matched on the folded name), if any.
    pub fn curated(&self, skill_key: &str) -> Option<Vec<LearningResource>> {
        SKILL_RESOURCES
            .iter()
            .find(|(key, _)| *key == skill_key)
            .map(|(_, seeds)| {
                seeds
                    .iter()
                    .map(|s| LearningResource::new(ResourceType::Course, s.name, s.provider, s.url))
                    .collect()
            })
    }

    /// The single resource offered when nothing is curated for a skill.
    pub fn fallback(&self, skill: &str) -> LearningResource {
        LearningResource::new(
            ResourceType::Course,
            format!("Learn {skill}"),
            FALLBACK_PROVIDER,
            self.search_url(FALLBACK_PROVIDER, skill, ResourceType::Course),
        )
    }

    pub fn providers(&self, resource_type: ResourceType) -> &'static [&'static str] {
        PROVIDERS
            .iter()
            .find(|(t, _)| *t == resource_type)
            .map(|(_, p)| *p)
            .unwrap_or(&[])
    }

    /// Search link for `skill` on a provider. YouTube searches for tutorials;
    /// unknown providers fall back to a web search.
    pub fn search_url(&self, provider: &str, skill: &str, resource_type: ResourceType) -> String {
        if provider == "YouTube" {
            return search_url(
                "https://www.youtube.com/results",
                "search_query",
                &format!("{skill} tutorial"),
            );
        }
        if provider == "egghead.io" {
            return format!("https://egghead.io/q/{}", path_segment(skill));
        }
        match PROVIDER_SEARCH.iter().find(|(name, _, _)| *name == provider) {
            Some((_, base, param)) => search_url(base, param, skill),
            None => search_url(
                "https://www.google.com/search",
                "q",
                &format!("{skill} {} {provider}", resource_type.label()),
            ),
        }
    }

    pub fn is_free_provider(&self, provider: &str) -> bool {
        FREE_PROVIDERS.contains(&provider)
    }
}

/// Percent-encodes a value for use as a single path segment.
fn path_segment(value: &str) -> String {
    let encoded = search_url("https://x.invalid/", "v", value);
    encoded
        .split_once("v=")
        .map(|(_, v)| v.replace('+', "%20"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_lookup_uses_folded_key() {
        let catalog = ResourceCatalog;
        let python = catalog.curated("python").unwrap();
        assert_eq!(python.len(), 2);
        assert_eq!(python[0].provider, "Codecademy");
        assert!(catalog.curated("Python").is_none());
    }

    #[test]
    fn test_fallback_is_templated_search() {
        let r = ResourceCatalog.fallback("Risk Assessment");
        assert_eq!(r.name, "Learn Risk Assessment");
        assert_eq!(r.provider, "Coursera");
        assert_eq!(r.url, "https://www.coursera.org/search?query=Risk+Assessment");
    }

    #[test]
    fn test_every_resource_type_has_providers() {
        for t in ResourceType::ALL {
            assert_eq!(ResourceCatalog.providers(t).len(), 5);
        }
    }

    #[test]
    fn test_search_url_special_cases() {
        let catalog = ResourceCatalog;
        assert_eq!(
            catalog.search_url("YouTube", "rust", ResourceType::Video),
            "https://www.youtube.com/results?search_query=rust+tutorial"
        );
        assert_eq!(
            catalog.search_url("egghead.io", "react hooks", ResourceType::Video),
            "https://egghead.io/q/react%20hooks"
        );
        assert!(catalog
            .search_url("O'Reilly", "sql", ResourceType::Book)
            .starts_with("https://www.google.com/search?q="));
    }
}
