//! Ship fixture data for tests.

use chrono::{NaiveDate, NaiveDateTime};
use entity::ship::{self, ShipType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Fixture values for one catalog row.
///
/// `Default` yields a valid transport whose stored rating matches what the
/// service would derive for it (80 * 0.5 / 120 rounded to two decimals).
/// Override individual fields with struct update syntax:
///
/// ```ignore
/// let ship = MockShip {
///     name: "Voyager".to_string(),
///     speed: 0.25,
///     rating: 0.17,
///     ..MockShip::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct MockShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: NaiveDateTime,
    pub speed: f64,
    pub crew_size: i32,
    pub is_used: bool,
    pub rating: f64,
}

impl Default for MockShip {
    fn default() -> Self {
        Self {
            name: "Atlas".to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            prod_date: midnight(2900, 1, 1),
            speed: 0.5,
            crew_size: 10,
            is_used: false,
            rating: 0.33,
        }
    }
}

/// Start of the given calendar day, panicking on an invalid date.
pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Insert a fixture row and return the stored model.
pub async fn insert_ship(
    db: &DatabaseConnection,
    ship: MockShip,
) -> Result<ship::Model, TestError> {
    let ship = ship::ActiveModel {
        name: ActiveValue::Set(ship.name),
        planet: ActiveValue::Set(ship.planet),
        ship_type: ActiveValue::Set(ship.ship_type),
        prod_date: ActiveValue::Set(ship.prod_date),
        speed: ActiveValue::Set(ship.speed),
        crew_size: ActiveValue::Set(ship.crew_size),
        is_used: ActiveValue::Set(ship.is_used),
        rating: ActiveValue::Set(ship.rating),
        ..Default::default()
    };

    Ok(ship.insert(db).await?)
}
