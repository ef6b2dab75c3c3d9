//! Learning-resource listings for a skill and level.
//!
//! Listings are mock data: counts, providers, durations, ratings and prices
//! are drawn from the injected RNG, so a seeded RNG gives stable output.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::resources::ResourceCatalog;
use crate::models::resource::{LearningResource, ResourceType};

pub const DEFAULT_LEVEL: &str = "beginner";
const FREE: &str = "Free";

#[derive(Debug, Clone, Serialize)]
pub struct PathStep {
    pub order: u32,
    #[serde(rename = "type")]
    pub step_type: &'static str,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedPath {
    pub steps: Vec<PathStep>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResources {
    pub skill: String,
    pub level: String,
    pub resources: Vec<LearningResource>,
    pub recommended_path: RecommendedPath,
}

pub fn learning_resources<R: Rng + ?Sized>(
    skill: &str,
    level: &str,
    catalog: &ResourceCatalog,
    rng: &mut R,
) -> LearningResources {
    let mut resources = Vec::new();
    for resource_type in ResourceType::ALL {
        let count = rng.gen_range(1..=3);
        for _ in 0..count {
            let Some(provider) = catalog.providers(resource_type).choose(rng).copied() else {
                continue;
            };
            let mut resource = LearningResource::new(
                resource_type,
                format!("{} {skill} {}", capitalize(level), resource_type.label()),
                provider,
                catalog.search_url(provider, skill, resource_type),
            )
            .with_duration(duration(resource_type, rng));
            resource.level = Some(level.to_string());
            resource.rating = Some(rating(rng));
            resource.cost = Some(cost(resource_type, provider, catalog, rng));
            resources.push(resource);
        }
    }

    LearningResources {
        skill: skill.to_string(),
        level: level.to_string(),
        resources,
        recommended_path: recommended_path(skill),
    }
}

fn recommended_path(skill: &str) -> RecommendedPath {
    let steps = [
        ("Article", format!("Introduction to {skill}")),
        ("Course", format!("{skill} Fundamentals")),
        ("Tutorial", format!("Building with {skill}")),
        ("Project", format!("{skill} Practical Application")),
    ];
    RecommendedPath {
        steps: steps
            .into_iter()
            .zip(1..)
            .map(|((step_type, title), order)| PathStep {
                order,
                step_type,
                title,
            })
            .collect(),
    }
}

fn duration<R: Rng + ?Sized>(resource_type: ResourceType, rng: &mut R) -> String {
    match resource_type {
        ResourceType::Course => format!("{} weeks", rng.gen_range(4..12)),
        ResourceType::Tutorial => format!("{} minutes", rng.gen_range(30..150)),
        ResourceType::Book => format!("{} pages", rng.gen_range(200..600)),
        ResourceType::Article => format!("{} minutes", rng.gen_range(5..25)),
        ResourceType::Video => format!("{} minutes", rng.gen_range(10..130)),
    }
}

/// One decimal place in 3.0..=5.0.
fn rating<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(30..=50) as f32 / 10.0
}

fn cost<R: Rng + ?Sized>(
    resource_type: ResourceType,
    provider: &str,
    catalog: &ResourceCatalog,
    rng: &mut R,
) -> String {
    if catalog.is_free_provider(provider) || rng.gen_bool(0.3) {
        return FREE.to_string();
    }
    let (free_chance, low, high) = match resource_type {
        ResourceType::Course => (0.0, 50, 200),
        ResourceType::Tutorial => (0.7, 10, 40),
        ResourceType::Book => (0.0, 20, 70),
        ResourceType::Article => (0.8, 5, 15),
        ResourceType::Video => (0.6, 10, 30),
    };
    if rng.gen_bool(free_chance) {
        FREE.to_string()
    } else {
        format!("${}", rng.gen_range(low..high))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
