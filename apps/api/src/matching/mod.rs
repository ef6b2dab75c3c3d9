//! Deterministic matching: normalization, scoring, gaps, location and currency.

pub mod currency;
pub mod gaps;
pub mod location;
pub mod normalize;
pub mod scoring;
