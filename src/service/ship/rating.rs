//! Derived rating computation.

use chrono::{Datelike, NaiveDateTime};

/// Final calendar year a ship can be produced in; anchors the age term of
/// the rating formula.
const RATING_HORIZON_YEAR: i32 = 3019;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the catalog rating for a ship.
///
/// `rating = round2(80 * speed * k / (3019 - production_year + 1))` where
/// `k` is 0.5 for a used ship and 1.0 otherwise. The denominator is at
/// least 1 for any production date that passes validation, so the division
/// is always defined.
pub fn ship_rating(speed: f64, is_used: bool, prod_date: NaiveDateTime) -> f64 {
    let condition_factor = if is_used { 0.5 } else { 1.0 };
    let age_years = (RATING_HORIZON_YEAR - prod_date.year() + 1) as f64;

    round2(80.0 * speed * condition_factor / age_years)
}
