//! Job-market tables keyed by region and sector, plus per-career trends.

use serde::{Deserialize, Serialize};

use crate::matching::currency::Region;
use crate::matching::normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    Education,
    All,
}

impl Sector {
    /// Unknown labels map to `All`.
    pub fn from_label(label: &str) -> Self {
        match normalize(label).as_str() {
            "technology" => Sector::Technology,
            "healthcare" => Sector::Healthcare,
            "finance" => Sector::Finance,
            "education" => Sector::Education,
            _ => Sector::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sector::Technology => "technology",
            Sector::Healthcare => "healthcare",
            Sector::Finance => "finance",
            Sector::Education => "education",
            Sector::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JobSeed {
    pub title: &'static str,
    pub demand: &'static str,
    pub avg_salary: u64,
}

#[derive(Debug)]
pub struct MarketEntry {
    pub region: Region,
    pub sector: Sector,
    pub growth_rate: u32,
    pub top_jobs: &'static [JobSeed],
    pub top_skills: &'static [&'static str],
    pub top_cities: &'static [&'static str],
    pub top_employers: &'static [&'static str],
}

const fn job(title: &'static str, demand: &'static str, avg_salary: u64) -> JobSeed {
    JobSeed {
        title,
        demand,
        avg_salary,
    }
}

const INDIA_TECH_JOBS: &[JobSeed] = &[
    job("Software Developer", "Very High", 1_200_000),
    job("Data Scientist", "High", 1_500_000),
    job("Cloud Architect", "High", 2_000_000),
    job("DevOps Engineer", "High", 1_800_000),
    job("Cybersecurity Analyst", "Very High", 1_600_000),
];

const INDIA_HEALTH_JOBS: &[JobSeed] = &[
    job("Medical Officer", "Very High", 1_000_000),
    job("Healthcare Administrator", "High", 1_200_000),
    job("Pharmacist", "High", 800_000),
    job("Medical Technologist", "Medium", 600_000),
    job("Nursing Specialist", "High", 900_000),
];

const INDIA_FINANCE_JOBS: &[JobSeed] = &[
    job("Financial Analyst", "High", 1_000_000),
    job("Investment Banker", "Medium", 2_000_000),
    job("Chartered Accountant", "High", 1_200_000),
    job("Risk Manager", "High", 1_500_000),
    job("Financial Planner", "Medium", 900_000),
];

const FINANCE_SKILLS: &[&str] = &[
    "Financial Analysis",
    "Risk Management",
    "Investment Management",
    "Accounting",
    "Financial Modeling",
];

const TECH_SKILLS: &[&str] = &["Cloud Computing", "AI/ML", "DevOps", "Cybersecurity", "JavaScript"];

const GENERAL_SKILLS: &[&str] = &[
    "Digital Literacy",
    "Data Analysis",
    "Communication",
    "Problem Solving",
    "Project Management",
];

pub(crate) const MARKET_ENTRIES: &[MarketEntry] = &[
    MarketEntry {
        region: Region::International,
        sector: Sector::Technology,
        growth_rate: 15,
        top_jobs: &[
            job("Software Developer", "Very High", 95_000),
            job("Data Scientist", "High", 105_000),
            job("Cloud Architect", "High", 120_000),
            job("DevOps Engineer", "High", 110_000),
            job("Cybersecurity Analyst", "Very High", 100_000),
        ],
        top_skills: TECH_SKILLS,
        top_cities: &["San Francisco", "Seattle", "New York", "Austin", "Boston"],
        top_employers: &["Google", "Microsoft", "Amazon", "Apple", "Meta"],
    },
    MarketEntry {
        region: Region::International,
        sector: Sector::Healthcare,
        growth_rate: 18,
        top_jobs: &[
            job("Registered Nurse", "Very High", 75_000),
            job("Healthcare Administrator", "High", 85_000),
            job("Physical Therapist", "High", 90_000),
            job("Medical Technologist", "Medium", 65_000),
            job("Physician Assistant", "High", 115_000),
        ],
        top_skills: &[
            "Patient Care",
            "Electronic Health Records",
            "Medical Terminology",
            "Healthcare Management",
            "Clinical Research",
        ],
        top_cities: &[],
        top_employers: &[],
    },
    MarketEntry {
        region: Region::International,
        sector: Sector::Finance,
        growth_rate: 10,
        top_jobs: &[
            job("Financial Analyst", "High", 85_000),
            job("Investment Banker", "Medium", 120_000),
            job("Financial Advisor", "Medium", 90_000),
            job("Risk Manager", "High", 100_000),
            job("Accountant", "Medium", 75_000),
        ],
        top_skills: FINANCE_SKILLS,
        top_cities: &[],
        top_employers: &[],
    },
    MarketEntry {
        region: Region::International,
        sector: Sector::All,
        growth_rate: 12,
        top_jobs: &[
            job("Software Developer", "Very High", 95_000),
            job("Registered Nurse", "Very High", 75_000),
            job("Data Scientist", "High", 105_000),
            job("Financial Analyst", "High", 85_000),
            job("Digital Marketing Specialist", "High", 70_000),
        ],
        top_skills: &[
            "Data Analysis",
            "Digital Literacy",
            "Project Management",
            "Communication",
            "Problem Solving",
        ],
        top_cities: &[],
        top_employers: &[],
    },
    MarketEntry {
        region: Region::India,
        sector: Sector::Technology,
        growth_rate: 18,
        top_jobs: INDIA_TECH_JOBS,
        top_skills: TECH_SKILLS,
        top_cities: &["Bangalore", "Hyderabad", "Pune", "Delhi NCR", "Chennai"],
        top_employers: &["TCS", "Infosys", "Wipro", "HCL", "Tech Mahindra"],
    },
    MarketEntry {
        region: Region::India,
        sector: Sector::Healthcare,
        growth_rate: 15,
        top_jobs: INDIA_HEALTH_JOBS,
        top_skills: &[
            "Patient Care",
            "Medical Knowledge",
            "Healthcare Management",
            "Clinical Research",
            "Electronic Health Records",
        ],
        top_cities: &["Delhi", "Mumbai", "Chennai", "Bangalore", "Kolkata"],
        top_employers: &[
            "Apollo Hospitals",
            "Fortis Healthcare",
            "Max Healthcare",
            "Manipal Hospitals",
            "AIIMS",
        ],
    },
    MarketEntry {
        region: Region::India,
        sector: Sector::Finance,
        growth_rate: 12,
        top_jobs: INDIA_FINANCE_JOBS,
        top_skills: FINANCE_SKILLS,
        top_cities: &["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata"],
        top_employers: &["HDFC Bank", "ICICI Bank", "SBI", "Axis Bank", "Kotak Mahindra Bank"],
    },
    MarketEntry {
        region: Region::India,
        sector: Sector::Education,
        growth_rate: 10,
        top_jobs: &[
            job("Teacher", "High", 600_000),
            job("Professor", "Medium", 1_000_000),
            job("Educational Consultant", "Medium", 800_000),
            job("Instructional Designer", "Medium", 700_000),
            job("Education Administrator", "Medium", 900_000),
        ],
        top_skills: &[
            "Teaching",
            "Curriculum Development",
            "Educational Technology",
            "Student Assessment",
            "Classroom Management",
        ],
        top_cities: &["Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata"],
        top_employers: &["CBSE Schools", "ICSE Schools", "State Universities", "IITs", "IIMs"],
    },
    MarketEntry {
        region: Region::India,
        sector: Sector::All,
        growth_rate: 14,
        top_jobs: &[
            job("Software Developer", "Very High", 1_200_000),
            job("Medical Officer", "Very High", 1_000_000),
            job("Data Scientist", "High", 1_500_000),
            job("Financial Analyst", "High", 1_000_000),
            job("Digital Marketing Specialist", "High", 800_000),
        ],
        top_skills: GENERAL_SKILLS,
        top_cities: &["Bangalore", "Mumbai", "Delhi NCR", "Hyderabad", "Pune"],
        top_employers: &["TCS", "Infosys", "Wipro", "HCL", "Reliance"],
    },
];

#[derive(Debug)]
pub struct CareerTrend {
    pub region: Region,
    pub career: &'static str,
    pub growth: u32,
    pub demand: &'static str,
    pub top_skills: &'static [&'static str],
    pub top_locations: &'static [&'static str],
    pub average_salary: u64,
    pub outlook: &'static str,
}

pub(crate) const CAREER_TRENDS: &[CareerTrend] = &[
    CareerTrend {
        region: Region::International,
        career: "Software Developer",
        growth: 22,
        demand: "Very High",
        top_skills: &["JavaScript", "React", "Node.js", "Python", "Cloud Computing"],
        top_locations: &["San Francisco", "Seattle", "New York", "Austin", "Boston"],
        average_salary: 95_000,
        outlook: "The demand for software developers is expected to grow 22% by 2030, much faster than average. Remote work opportunities are abundant.",
    },
    CareerTrend {
        region: Region::International,
        career: "Data Scientist",
        growth: 31,
        demand: "Very High",
        top_skills: &["Python", "R", "SQL", "Machine Learning", "Statistics"],
        top_locations: &["San Francisco", "New York", "Seattle", "Boston", "Chicago"],
        average_salary: 105_000,
        outlook: "Data science is one of the fastest-growing fields with a projected 31% growth by 2030. Companies across all industries are seeking data professionals.",
    },
    CareerTrend {
        region: Region::International,
        career: "UX Designer",
        growth: 13,
        demand: "High",
        top_skills: &["User Research", "Wireframing", "Figma", "Adobe XD", "Prototyping"],
        top_locations: &["San Francisco", "New York", "Seattle", "Austin", "Los Angeles"],
        average_salary: 85_000,
        outlook: "UX design continues to grow in importance as companies focus on user experience. The field is projected to grow 13% by 2030.",
    },
    CareerTrend {
        region: Region::International,
        career: "Digital Marketer",
        growth: 10,
        demand: "Medium",
        top_skills: &["Social Media", "SEO", "Content Marketing", "Analytics", "Email Marketing"],
        top_locations: &["New York", "Los Angeles", "Chicago", "San Francisco", "Miami"],
        average_salary: 75_000,
        outlook: "Digital marketing continues to evolve with new platforms and technologies. The field is projected to grow 10% by 2030.",
    },
    CareerTrend {
        region: Region::International,
        career: "Project Manager",
        growth: 8,
        demand: "Medium",
        top_skills: &["Agile", "Scrum", "Communication", "Leadership", "Risk Management"],
        top_locations: &["New York", "Chicago", "San Francisco", "Atlanta", "Dallas"],
        average_salary: 90_000,
        outlook: "Project management remains important across industries with a steady growth projection of 8% by 2030.",
    },
    CareerTrend {
        region: Region::India,
        career: "Software Developer",
        growth: 25,
        demand: "Very High",
        top_skills: &["JavaScript", "React", "Node.js", "Python", "Cloud Computing"],
        top_locations: &["Bangalore", "Hyderabad", "Pune", "Delhi NCR", "Chennai"],
        average_salary: 1_200_000,
        outlook: "The demand for software developers in India is growing rapidly with a 25% annual increase. Major tech hubs like Bangalore and Hyderabad offer numerous opportunities.",
    },
    CareerTrend {
        region: Region::India,
        career: "Data Scientist",
        growth: 35,
        demand: "Very High",
        top_skills: &["Python", "R", "SQL", "Machine Learning", "Statistics"],
        top_locations: &["Bangalore", "Hyderabad", "Pune", "Delhi NCR", "Mumbai"],
        average_salary: 1_500_000,
        outlook: "Data science is one of the fastest-growing fields in India with a projected 35% growth. Companies across all industries are seeking data professionals.",
    },
];

/// Growth figures for the "top growing careers" panel: (title, international, india).
pub(crate) const TOP_GROWING: &[(&str, u32, u32)] = &[
    ("Data Scientist", 31, 35),
    ("Software Developer", 22, 25),
    ("Cybersecurity Analyst", 33, 30),
    ("Healthcare Professional", 16, 18),
    ("UX Designer", 13, 15),
];

pub(crate) const IN_DEMAND_SKILLS_INDIA: &[&str] = &[
    "Programming",
    "Data Analysis",
    "Cloud Computing",
    "Artificial Intelligence",
    "Digital Marketing",
    "Cybersecurity",
];

pub(crate) const IN_DEMAND_SKILLS_INTERNATIONAL: &[&str] = &[
    "Data Analysis",
    "Digital Literacy",
    "Project Management",
    "Communication",
    "Problem Solving",
];

/// Outlook per industry for the market overview panels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndustryOutlook {
    pub technology: &'static str,
    pub healthcare: &'static str,
    pub finance: &'static str,
    pub retail: &'static str,
    pub manufacturing: &'static str,
}

const OUTLOOK_INTERNATIONAL: IndustryOutlook = IndustryOutlook {
    technology: "Strong",
    healthcare: "Strong",
    finance: "Moderate",
    retail: "Changing",
    manufacturing: "Evolving",
};

const OUTLOOK_INDIA: IndustryOutlook = IndustryOutlook {
    technology: "Very Strong",
    ..OUTLOOK_INTERNATIONAL
};

/// Field-level snapshot used by the career-prediction flow.
#[derive(Debug)]
pub struct FieldTrend {
    pub field: &'static str,
    pub growth: u32,
    pub demand_level: &'static str,
    pub average_salary: u64,
}

pub(crate) const FIELD_TRENDS: &[FieldTrend] = &[
    FieldTrend {
        field: "Software Development",
        growth: 22,
        demand_level: "High",
        average_salary: 95_000,
    },
    FieldTrend {
        field: "Data Science",
        growth: 28,
        demand_level: "Very High",
        average_salary: 105_000,
    },
    FieldTrend {
        field: "UX/UI Design",
        growth: 15,
        demand_level: "Medium",
        average_salary: 85_000,
    },
    FieldTrend {
        field: "Digital Marketing",
        growth: 18,
        demand_level: "High",
        average_salary: 75_000,
    },
    FieldTrend {
        field: "Cybersecurity",
        growth: 32,
        demand_level: "Very High",
        average_salary: 110_000,
    },
];

pub(crate) const MARKET_TOP_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Data Analysis",
    "Cloud Computing",
    "Machine Learning",
    "UI/UX",
    "Project Management",
];

/// Keyword buckets for synthetic insights: (keywords, salary range, growth, demand).
pub(crate) const INSIGHT_BUCKETS: &[(&[&str], &str, u32, &str)] = &[
    (&["software", "developer", "engineer"], "₹10,00,000 - ₹25,00,000", 22, "Very High"),
    (&["data", "scientist", "analyst"], "₹12,00,000 - ₹28,00,000", 28, "Very High"),
    (&["design", "ux", "ui"], "₹8,00,000 - ₹18,00,000", 18, "High"),
    (&["market", "sales"], "₹6,00,000 - ₹15,00,000", 12, "Medium"),
    (&["finance", "account"], "₹7,00,000 - ₹20,00,000", 10, "Medium"),
];

pub(crate) const DEFAULT_INSIGHT: (&str, u32, &str) = ("₹8,00,000 - ₹15,00,000", 15, "High");

/// Read-only access to the market tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketCatalog;

impl MarketCatalog {
    /// The entry for (region, sector), falling back to the region's `All` entry.
    pub fn entry(&self, region: Region, sector: Sector) -> &'static MarketEntry {
        MARKET_ENTRIES
            .iter()
            .find(|e| e.region == region && e.sector == sector)
            .or_else(|| {
                MARKET_ENTRIES
                    .iter()
                    .find(|e| e.region == region && e.sector == Sector::All)
            })
            .unwrap_or(&MARKET_ENTRIES[0])
    }

    /// Trend for a career title (case-insensitive) in a region.
    pub fn career_trend(&self, region: Region, career: &str) -> Option<&'static CareerTrend> {
        let wanted = normalize(career);
        CAREER_TRENDS
            .iter()
            .find(|t| t.region == region && normalize(t.career) == wanted)
    }

    pub fn top_growing(&self, region: Region) -> Vec<(&'static str, u32)> {
        TOP_GROWING
            .iter()
            .map(|(title, intl, india)| match region {
                Region::India => (*title, *india),
                Region::International => (*title, *intl),
            })
            .collect()
    }

    pub fn in_demand_skills(&self, region: Region) -> &'static [&'static str] {
        match region {
            Region::India => IN_DEMAND_SKILLS_INDIA,
            Region::International => IN_DEMAND_SKILLS_INTERNATIONAL,
        }
    }

    pub fn industry_outlook(&self, region: Region) -> IndustryOutlook {
        match region {
            Region::India => OUTLOOK_INDIA,
            Region::International => OUTLOOK_INTERNATIONAL,
        }
    }

    pub fn field_trends(&self) -> &'static [FieldTrend] {
        FIELD_TRENDS
    }

    pub fn market_top_skills(&self) -> &'static [&'static str] {
        MARKET_TOP_SKILLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_has_an_all_entry() {
        for region in [Region::India, Region::International] {
            assert_eq!(MarketCatalog.entry(region, Sector::All).sector, Sector::All);
        }
    }

    #[test]
    fn test_missing_sector_falls_back_to_all() {
        let entry = MarketCatalog.entry(Region::International, Sector::Education);
        assert_eq!(entry.sector, Sector::All);
        assert_eq!(entry.region, Region::International);
    }

    #[test]
    fn test_india_tech_entry() {
        let entry = MarketCatalog.entry(Region::India, Sector::Technology);
        assert_eq!(entry.growth_rate, 18);
        assert_eq!(entry.top_jobs[0].avg_salary, 1_200_000);
    }

    #[test]
    fn test_sector_from_label() {
        assert_eq!(Sector::from_label("Finance"), Sector::Finance);
        assert_eq!(Sector::from_label("retail"), Sector::All);
    }

    #[test]
    fn test_career_trend_lookup_is_case_insensitive() {
        let trend = MarketCatalog
            .career_trend(Region::International, "data scientist")
            .unwrap();
        assert_eq!(trend.growth, 31);
        assert!(MarketCatalog
            .career_trend(Region::India, "UX Designer")
            .is_none());
    }
}
