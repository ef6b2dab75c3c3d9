//! Static lookup tables, built once at start-up and shared read-only.

pub mod careers;
pub mod locations;
pub mod market;
pub mod personality;
pub mod resources;
pub mod skills;

use std::collections::HashSet;

use thiserror::Error;

use crate::matching::normalize::contains_keyword;
use crate::models::career::{CareerDefinition, Cluster, SalaryParseError};

use careers::{CareerSeed, CLUSTER_KEYWORDS, PATH_SEEDS, RECOMMENDATION_SEEDS};
use market::MarketCatalog;
use personality::PersonalityCatalog;
use resources::ResourceCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("career '{title}' has an invalid salary range: {source}")]
    Salary {
        title: &'static str,
        #[source]
        source: SalaryParseError,
    },

    #[error("duplicate career title '{0}'")]
    DuplicateTitle(String),
}

/// Every table the service consults.
#[derive(Debug, Clone)]
pub struct Catalogs {
    /// Flat catalog behind career recommendations.
    pub recommendation: Vec<CareerDefinition>,
    /// Clustered catalog behind career paths.
    pub paths: Vec<CareerDefinition>,
    pub personality: PersonalityCatalog,
    pub resources: ResourceCatalog,
    pub market: MarketCatalog,
}

impl Catalogs {
    /// Parses salary strings and checks title uniqueness.
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            recommendation: build_careers(RECOMMENDATION_SEEDS)?,
            paths: build_careers(PATH_SEEDS)?,
            personality: PersonalityCatalog,
            resources: ResourceCatalog,
            market: MarketCatalog,
        })
    }

    /// Career paths for the clusters picked by `interests`, in cluster order.
    pub fn paths_for_interests<S: AsRef<str>>(&self, interests: &[S]) -> Vec<CareerDefinition> {
        let clusters = select_clusters(interests);
        clusters
            .iter()
            .flat_map(|c| self.paths.iter().filter(move |p| p.cluster == Some(*c)))
            .cloned()
            .collect()
    }
}

/// Clusters named by any interest keyword, deduplicated in first-occurrence
/// order. No match selects every cluster.
pub fn select_clusters<S: AsRef<str>>(interests: &[S]) -> Vec<Cluster> {
    let mut selected = Vec::new();
    for interest in interests {
        let interest = interest.as_ref();
        for (cluster, keywords) in CLUSTER_KEYWORDS {
            if selected.contains(cluster) {
                continue;
            }
            if keywords.iter().any(|k| contains_keyword(interest, k)) {
                selected.push(*cluster);
            }
        }
    }
    if selected.is_empty() {
        Cluster::ALL.to_vec()
    } else {
        selected
    }
}

fn build_careers(seeds: &[CareerSeed]) -> Result<Vec<CareerDefinition>, CatalogError> {
    let mut seen = HashSet::new();
    seeds
        .iter()
        .map(|seed| {
            if !seen.insert(seed.title.to_lowercase()) {
                return Err(CatalogError::DuplicateTitle(seed.title.to_string()));
            }
            let salary_range = seed
                .salary_range
                .parse()
                .map_err(|source| CatalogError::Salary {
                    title: seed.title,
                    source,
                })?;
            Ok(CareerDefinition {
                title: seed.title.to_string(),
                required_skills: to_strings(seed.required_skills),
                education_path: to_strings(seed.education_path),
                salary_range,
                growth_outlook: seed.growth_outlook,
                roles: to_strings(seed.roles),
                traits: to_strings(seed.traits),
                cluster: seed.cluster,
            })
        })
        .collect()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
