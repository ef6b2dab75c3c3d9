//! Location lookup and location-adjusted salaries.

use serde::Serialize;

use crate::catalog::locations::{LocationInfo, GLOBAL_KEY, LOCATIONS};
use crate::models::career::SalaryRange;

use super::currency::{convert_usd_to_inr, Region};
use super::normalize::normalize;

/// The first known location whose key occurs in `raw`, else the global entry.
pub fn resolve_location(raw: &str) -> &'static LocationInfo {
    let folded = normalize(raw);
    LOCATIONS
        .iter()
        .filter(|l| l.key != GLOBAL_KEY)
        .find(|l| folded.contains(l.key))
        .unwrap_or_else(global)
}

fn global() -> &'static LocationInfo {
    // The table always carries the global entry last.
    &LOCATIONS[LOCATIONS.len() - 1]
}

/// Career facts adjusted for a location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSpecific {
    pub location: &'static str,
    pub demand_level: &'static str,
    pub adjusted_salary_range: String,
    pub top_employers: &'static [&'static str],
    pub job_market_outlook: String,
    pub currency: &'static str,
}

/// Scales `salary` for `location`. India-region locations get the bounds
/// converted to rupees first.
pub fn adjust_salary(salary: &SalaryRange, location: &LocationInfo, usd_to_inr: f64) -> SalaryRange {
    let base = match (location.region, salary.region) {
        (Region::India, Region::International) => SalaryRange {
            low: convert_usd_to_inr(salary.low, usd_to_inr),
            high: convert_usd_to_inr(salary.high, usd_to_inr),
            region: Region::India,
            open_ended: salary.open_ended,
        },
        _ => *salary,
    };
    base.scaled(location.salary_multiplier)
}

pub fn location_specific(
    salary: &SalaryRange,
    location: &'static LocationInfo,
    usd_to_inr: f64,
) -> LocationSpecific {
    let adjusted = adjust_salary(salary, location, usd_to_inr);
    LocationSpecific {
        location: location.name,
        demand_level: location.demand_level,
        adjusted_salary_range: adjusted.to_string(),
        top_employers: location.top_employers,
        job_market_outlook: format!("{} demand in this location", location.demand_level),
        currency: adjusted.region.currency_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(s: &str) -> SalaryRange {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve_known_locations() {
        assert_eq!(resolve_location("Seattle, WA").name, "Seattle, WA");
        assert_eq!(resolve_location("  NEW YORK city").salary_multiplier, 1.4);
        assert_eq!(resolve_location("Bangalore, India").region, Region::India);
    }

    #[test]
    fn test_unknown_location_is_global() {
        let loc = resolve_location("Lisbon");
        assert_eq!(loc.key, GLOBAL_KEY);
        assert_eq!(loc.salary_multiplier, 1.0);
        assert_eq!(resolve_location("").key, GLOBAL_KEY);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // both keys present; san francisco is declared first
        assert_eq!(
            resolve_location("seattle or san francisco").key,
            "san francisco"
        );
    }

    #[test]
    fn test_adjusted_salary_for_san_francisco() {
        let info = location_specific(
            &range("$70,000 - $150,000+"),
            resolve_location("San Francisco"),
            83.0,
        );
        assert_eq!(info.adjusted_salary_range, "$105,000 - $225,000+");
        assert_eq!(info.job_market_outlook, "Very High demand in this location");
        assert_eq!(info.currency, "USD ($)");
    }

    #[test]
    fn test_india_converts_to_rupees() {
        let info = location_specific(&range("$10,000 - $20,000"), resolve_location("India"), 83.0);
        assert_eq!(info.adjusted_salary_range, "₹8,30,000 - ₹16,60,000");
        assert_eq!(info.currency, "INR (₹)");
    }
}
