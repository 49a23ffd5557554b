//! Field-level validation for create and partial-update payloads.
//!
//! Creation requires every field to be present and in range; update checks
//! only the fields the caller supplied. Both are pure predicates over the
//! payload and the configured production window.

use std::ops::RangeInclusive;

use crate::{
    model::ship::{timestamp_from_millis, ProductionWindow, ShipPayload},
    service::ship::rating::round2,
};

/// Longest accepted name or planet, in characters.
const MAX_TEXT_LEN: usize = 50;
/// Inclusive crew size bounds.
const CREW_SIZE_RANGE: RangeInclusive<i32> = 1..=9999;
/// Inclusive speed bounds, applied after rounding to two decimals.
const SPEED_RANGE: RangeInclusive<f64> = 0.01..=0.99;

/// Full-record validity for creation.
///
/// A missing required field fails on its own, independent of the other
/// fields; present fields must each pass their range check.
pub fn is_valid_for_create(ship: &ShipPayload, window: &ProductionWindow) -> bool {
    let (Some(name), Some(planet), Some(_), Some(prod_date), Some(speed), Some(crew_size)) = (
        ship.name.as_deref(),
        ship.planet.as_deref(),
        ship.ship_type,
        ship.prod_date,
        ship.speed,
        ship.crew_size,
    ) else {
        return false;
    };

    valid_text(name)
        && valid_text(planet)
        && valid_prod_date(prod_date, window)
        && valid_speed(speed)
        && valid_crew_size(crew_size)
}

/// Partial-payload validity for update.
///
/// Absent fields impose no constraint; each present field must pass the
/// same per-field rule as creation. An all-absent payload is valid.
pub fn is_valid_for_update(ship: &ShipPayload, window: &ProductionWindow) -> bool {
    ship.name.as_deref().is_none_or(valid_text)
        && ship.planet.as_deref().is_none_or(valid_text)
        && ship
            .prod_date
            .is_none_or(|millis| valid_prod_date(millis, window))
        && ship.speed.is_none_or(valid_speed)
        && ship.crew_size.is_none_or(valid_crew_size)
}

fn valid_text(value: &str) -> bool {
    !value.is_empty() && value.chars().count() <= MAX_TEXT_LEN
}

fn valid_prod_date(millis: i64, window: &ProductionWindow) -> bool {
    timestamp_from_millis(millis).is_some_and(|prod_date| window.contains(prod_date))
}

fn valid_speed(speed: f64) -> bool {
    SPEED_RANGE.contains(&round2(speed))
}

fn valid_crew_size(crew_size: i32) -> bool {
    CREW_SIZE_RANGE.contains(&crew_size)
}
