//! Salary display per regional convention.

use serde::{Deserialize, Serialize};

/// Regional convention for salaries and market tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    India,
    #[default]
    International,
}

impl Region {
    pub fn symbol(self) -> char {
        match self {
            Region::India => '₹',
            Region::International => '$',
        }
    }

    pub fn currency_label(self) -> &'static str {
        match self {
            Region::India => "INR (₹)",
            Region::International => "USD ($)",
        }
    }
}

/// Formats a whole-currency amount with the region's symbol and digit grouping.
///
/// India groups the last three digits, then pairs: `₹12,00,000`.
/// International uses thousands: `$1,200,000`.
pub fn format_currency(amount: u64, region: Region) -> String {
    let digits = amount.to_string();
    let grouped = match region {
        Region::India => group_indian(&digits),
        Region::International => group_thousands(&digits),
    };
    format!("{}{grouped}", region.symbol())
}

/// Converts a USD figure to whole rupees at the given rate.
pub fn convert_usd_to_inr(usd: u64, rate: f64) -> u64 {
    (usd as f64 * rate).round().max(0.0) as u64
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, b) in head_bytes.iter().enumerate() {
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(1_200_000, Region::India), "₹12,00,000");
        assert_eq!(format_currency(15_000_000, Region::India), "₹1,50,00,000");
        assert_eq!(format_currency(800_000, Region::India), "₹8,00,000");
        assert_eq!(format_currency(5_000, Region::India), "₹5,000");
    }

    #[test]
    fn test_international_grouping() {
        assert_eq!(format_currency(1_200_000, Region::International), "$1,200,000");
        assert_eq!(format_currency(95_000, Region::International), "$95,000");
        assert_eq!(format_currency(100, Region::International), "$100");
    }

    #[test]
    fn test_small_amounts_are_ungrouped() {
        assert_eq!(format_currency(0, Region::India), "₹0");
        assert_eq!(format_currency(999, Region::International), "$999");
    }

    #[test]
    fn test_convert_usd_to_inr() {
        assert_eq!(convert_usd_to_inr(1_000, 83.0), 83_000);
        assert_eq!(convert_usd_to_inr(0, 83.0), 0);
    }
}
