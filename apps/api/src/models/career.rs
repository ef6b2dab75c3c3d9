use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::matching::currency::{format_currency, Region};

/// Projected growth label carried by every career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthOutlook {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Interest cluster used to pre-select career paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Technology,
    Business,
    Healthcare,
    Creative,
}

impl Cluster {
    pub const ALL: [Cluster; 4] = [
        Cluster::Technology,
        Cluster::Business,
        Cluster::Healthcare,
        Cluster::Creative,
    ];
}

#[derive(Debug, Error, PartialEq)]
pub enum SalaryParseError {
    #[error("salary range is empty")]
    Empty,
    #[error("unknown currency symbol in '{0}'")]
    UnknownCurrency(String),
    #[error("no amount in '{0}'")]
    MissingAmount(String),
    #[error("low bound exceeds high bound in '{0}'")]
    Inverted(String),
}

/// A salary band such as `$70,000 - $150,000+`.
/// A single figure (`$95,000`) parses as a band with equal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub low: u64,
    pub high: u64,
    pub region: Region,
    /// Trailing `+`: the high bound is not a ceiling.
    pub open_ended: bool,
}

impl SalaryRange {
    pub fn average(&self) -> u64 {
        (self.low + self.high) / 2
    }

    /// Scales both bounds and rounds each to the nearest thousand.
    pub fn scaled(&self, multiplier: f64) -> SalaryRange {
        let scale = |v: u64| ((v as f64 * multiplier / 1000.0).round().max(0.0) as u64) * 1000;
        SalaryRange {
            low: scale(self.low),
            high: scale(self.high),
            ..*self
        }
    }
}

impl FromStr for SalaryRange {
    type Err = SalaryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let first = trimmed.chars().next().ok_or(SalaryParseError::Empty)?;
        let region = match first {
            '$' => Region::International,
            '₹' => Region::India,
            _ => return Err(SalaryParseError::UnknownCurrency(trimmed.to_string())),
        };
        let open_ended = trimmed.ends_with('+');

        let amount = |part: &str| -> Result<u64, SalaryParseError> {
            let digits: String = part.chars().filter(char::is_ascii_digit).collect();
            digits
                .parse::<u64>()
                .map_err(|_| SalaryParseError::MissingAmount(trimmed.to_string()))
        };

        let (low, high) = match trimmed.split_once(" - ") {
            Some((lo, hi)) => (amount(lo)?, amount(hi)?),
            None => {
                let v = amount(trimmed)?;
                (v, v)
            }
        };
        if low > high {
            return Err(SalaryParseError::Inverted(trimmed.to_string()));
        }

        Ok(SalaryRange {
            low,
            high,
            region,
            open_ended,
        })
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plus = if self.open_ended { "+" } else { "" };
        if self.low == self.high {
            write!(f, "{}{plus}", format_currency(self.low, self.region))
        } else {
            write!(
                f,
                "{} - {}{plus}",
                format_currency(self.low, self.region),
                format_currency(self.high, self.region)
            )
        }
    }
}

impl Serialize for SalaryRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A career entry in a static catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDefinition {
    pub title: String,
    pub required_skills: Vec<String>,
    /// Ordered from the most basic route.
    pub education_path: Vec<String>,
    pub salary_range: SalaryRange,
    pub growth_outlook: GrowthOutlook,
    pub roles: Vec<String>,
    /// Personality keywords that earn the personality bonus.
    #[serde(skip)]
    pub traits: Vec<String>,
    #[serde(skip)]
    pub cluster: Option<Cluster>,
}

/// Per-factor contributions to a match score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub interests: u32,
    pub education: u32,
    pub personality: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.skills + self.interests + self.education + self.personality
    }
}

/// A catalog career ranked against one profile.
#[derive(Debug, Clone)]
pub struct ScoredCareer<'a> {
    pub career: &'a CareerDefinition,
    pub match_score: u32,
    pub breakdown: ScoreBreakdown,
}
