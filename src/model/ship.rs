//! Ship DTOs: wire representations, filter criteria, and listing parameters.
//!
//! Wire field names are camelCase; production dates travel as epoch
//! milliseconds interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub use entity::ship::ShipType;

/// Wire representation of a stored catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipDto {
    /// Store-assigned identifier.
    pub id: i32,
    /// Ship name, 1-50 characters.
    pub name: String,
    /// Home planet, 1-50 characters.
    pub planet: String,
    /// Category of the ship.
    pub ship_type: ShipType,
    /// Production date as epoch milliseconds.
    pub prod_date: i64,
    /// Speed in [0.01, 0.99] after rounding to two decimals.
    pub speed: f64,
    /// Crew size in [1, 9999].
    pub crew_size: i32,
    /// Whether the ship is second-hand.
    pub is_used: bool,
    /// Server-derived rating, rounded to two decimals.
    pub rating: f64,
}

impl From<entity::ship::Model> for ShipDto {
    fn from(ship: entity::ship::Model) -> Self {
        Self {
            id: ship.id,
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type,
            prod_date: ship.prod_date.and_utc().timestamp_millis(),
            speed: ship.speed,
            crew_size: ship.crew_size,
            is_used: ship.is_used,
            rating: ship.rating,
        }
    }
}

/// Request body for create and partial update.
///
/// Every field is optional so that presence and absence are explicit:
/// creation validates that the required fields are present, update applies
/// only the fields the caller supplied. A `rating` key in the body is
/// ignored; the rating is always derived server-side.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipPayload {
    /// Ship name, 1-50 characters.
    pub name: Option<String>,
    /// Home planet, 1-50 characters.
    pub planet: Option<String>,
    /// Category of the ship.
    pub ship_type: Option<ShipType>,
    /// Production date as epoch milliseconds.
    pub prod_date: Option<i64>,
    /// Speed in [0.01, 0.99] after rounding to two decimals.
    pub speed: Option<f64>,
    /// Crew size in [1, 9999].
    pub crew_size: Option<i32>,
    /// Whether the ship is second-hand; creation defaults this to false.
    pub is_used: Option<bool>,
}

impl ShipPayload {
    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.planet.is_none()
            && self.ship_type.is_none()
            && self.prod_date.is_none()
            && self.speed.is_none()
            && self.crew_size.is_none()
            && self.is_used.is_none()
    }
}

/// Validated, fully-populated attributes handed to the repository for a
/// write, rating included.
#[derive(Clone, Debug)]
pub struct NewShip {
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Category of the ship.
    pub ship_type: ShipType,
    /// Production timestamp (UTC).
    pub prod_date: NaiveDateTime,
    /// Speed.
    pub speed: f64,
    /// Crew size.
    pub crew_size: i32,
    /// Whether the ship is second-hand.
    pub is_used: bool,
    /// Derived rating to store.
    pub rating: f64,
}

/// Optional listing criteria; absent criteria impose no constraint.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct ShipFilters {
    /// Substring of the ship name.
    pub name: Option<String>,
    /// Substring of the planet name.
    pub planet: Option<String>,
    /// Exact ship category.
    pub ship_type: Option<ShipType>,
    /// Earliest production date, epoch milliseconds.
    pub after: Option<i64>,
    /// Latest production date, epoch milliseconds.
    pub before: Option<i64>,
    /// Exact second-hand flag.
    pub is_used: Option<bool>,
    /// Minimum speed.
    pub min_speed: Option<f64>,
    /// Maximum speed.
    pub max_speed: Option<f64>,
    /// Minimum crew size.
    pub min_crew_size: Option<i32>,
    /// Maximum crew size.
    pub max_crew_size: Option<i32>,
    /// Minimum rating.
    pub min_rating: Option<f64>,
    /// Maximum rating.
    pub max_rating: Option<f64>,
}

/// Pagination and ordering for listings.
#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct ShipListParams {
    /// Zero-based page number.
    pub page_number: u64,
    /// Records per page.
    pub page_size: u64,
    /// Sort field, always ascending.
    pub order: ShipOrder,
}

impl Default for ShipListParams {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: 3,
            order: ShipOrder::Id,
        }
    }
}

/// Sort field selector for listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    /// Order by identifier (the default).
    #[default]
    Id,
    /// Order by ship name.
    Name,
    /// Order by planet name.
    Planet,
    /// Order by production date.
    Date,
    /// Order by speed.
    Speed,
    /// Order by crew size.
    CrewSize,
    /// Order by rating.
    Rating,
}

/// Inclusive calendar bounds for a ship's production date.
///
/// Constructed once at startup and carried in
/// [`AppState`](crate::model::app::AppState); validation receives it
/// explicitly rather than consulting process globals.
#[derive(Clone, Copy, Debug)]
pub struct ProductionWindow {
    /// First accepted production day.
    pub earliest: NaiveDate,
    /// Last accepted production day.
    pub latest: NaiveDate,
}

impl ProductionWindow {
    /// Whether `prod_date` falls on an accepted calendar day.
    pub fn contains(&self, prod_date: NaiveDateTime) -> bool {
        let date = prod_date.date();
        date >= self.earliest && date <= self.latest
    }
}

impl Default for ProductionWindow {
    fn default() -> Self {
        Self {
            earliest: NaiveDate::from_ymd_opt(2800, 1, 1).expect("valid calendar date"),
            latest: NaiveDate::from_ymd_opt(3019, 12, 31).expect("valid calendar date"),
        }
    }
}

/// Interpret an epoch-millisecond wire timestamp as a UTC calendar timestamp.
///
/// Returns `None` for values outside chrono's representable range.
pub fn timestamp_from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|timestamp| timestamp.naive_utc())
}
