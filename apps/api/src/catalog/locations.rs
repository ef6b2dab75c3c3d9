use serde::Serialize;

use crate::matching::currency::Region;

/// A known location and how it moves salaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    /// Lowercase lookup key matched against user input.
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub salary_multiplier: f64,
    pub demand_level: &'static str,
    pub top_employers: &'static [&'static str],
    pub region: Region,
}

pub const GLOBAL_KEY: &str = "global";

/// Declaration order decides ambiguous inputs: the first contained key wins.
pub(crate) const LOCATIONS: &[LocationInfo] = &[
    LocationInfo {
        key: "san francisco",
        name: "San Francisco, CA",
        salary_multiplier: 1.5,
        demand_level: "Very High",
        top_employers: &["Google", "Apple", "Salesforce", "Uber", "Airbnb"],
        region: Region::International,
    },
    LocationInfo {
        key: "new york",
        name: "New York, NY",
        salary_multiplier: 1.4,
        demand_level: "High",
        top_employers: &["JPMorgan Chase", "Google", "Facebook", "IBM", "Amazon"],
        region: Region::International,
    },
    LocationInfo {
        key: "austin",
        name: "Austin, TX",
        salary_multiplier: 1.1,
        demand_level: "High",
        top_employers: &["Dell", "IBM", "Apple", "Amazon", "Facebook"],
        region: Region::International,
    },
    LocationInfo {
        key: "seattle",
        name: "Seattle, WA",
        salary_multiplier: 1.3,
        demand_level: "Very High",
        top_employers: &["Amazon", "Microsoft", "Boeing", "T-Mobile", "Expedia"],
        region: Region::International,
    },
    LocationInfo {
        key: "chicago",
        name: "Chicago, IL",
        salary_multiplier: 1.1,
        demand_level: "Medium",
        top_employers: &["Boeing", "United Airlines", "Walgreens", "Allstate", "McDonald's"],
        region: Region::International,
    },
    LocationInfo {
        key: "india",
        name: "India",
        salary_multiplier: 1.0,
        demand_level: "High",
        top_employers: &["TCS", "Infosys", "Wipro", "HCL", "Reliance"],
        region: Region::India,
    },
    LocationInfo {
        key: GLOBAL_KEY,
        name: "Global",
        salary_multiplier: 1.0,
        demand_level: "Varies",
        top_employers: &["Varies by location"],
        region: Region::International,
    },
];
