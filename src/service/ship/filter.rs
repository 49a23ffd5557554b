//! Filter-and-sort query building.
//!
//! Turns the open set of optional listing criteria into a single
//! conjunctive [`Condition`]: one predicate term per present, non-empty
//! criterion. No OR/NOT composition is supported.

use entity::ship;
use sea_orm::{ColumnTrait, Condition};

use crate::model::ship::{timestamp_from_millis, ShipFilters, ShipOrder};

/// Build the conjunctive match condition for `filters`.
///
/// Absent criteria contribute no term, so an empty filter set matches every
/// record. Substring terms compare with the backend's `LIKE` collation.
pub fn condition(filters: &ShipFilters) -> Condition {
    let mut condition = Condition::all();

    if let Some(name) = filters.name.as_deref().filter(|name| !name.is_empty()) {
        condition = condition.add(ship::Column::Name.contains(name));
    }
    if let Some(planet) = filters.planet.as_deref().filter(|planet| !planet.is_empty()) {
        condition = condition.add(ship::Column::Planet.contains(planet));
    }
    if let Some(ship_type) = filters.ship_type {
        condition = condition.add(ship::Column::ShipType.eq(ship_type));
    }
    if let Some(after) = filters.after.and_then(timestamp_from_millis) {
        condition = condition.add(ship::Column::ProdDate.gte(after));
    }
    if let Some(before) = filters.before.and_then(timestamp_from_millis) {
        condition = condition.add(ship::Column::ProdDate.lte(before));
    }
    if let Some(is_used) = filters.is_used {
        condition = condition.add(ship::Column::IsUsed.eq(is_used));
    }
    if let Some(min_speed) = filters.min_speed {
        condition = condition.add(ship::Column::Speed.gte(min_speed));
    }
    if let Some(max_speed) = filters.max_speed {
        condition = condition.add(ship::Column::Speed.lte(max_speed));
    }
    if let Some(min_crew_size) = filters.min_crew_size {
        condition = condition.add(ship::Column::CrewSize.gte(min_crew_size));
    }
    if let Some(max_crew_size) = filters.max_crew_size {
        condition = condition.add(ship::Column::CrewSize.lte(max_crew_size));
    }
    if let Some(min_rating) = filters.min_rating {
        condition = condition.add(ship::Column::Rating.gte(min_rating));
    }
    if let Some(max_rating) = filters.max_rating {
        condition = condition.add(ship::Column::Rating.lte(max_rating));
    }

    condition
}

/// Column backing each sort selector; listings always order ascending.
pub fn sort_column(order: ShipOrder) -> ship::Column {
    match order {
        ShipOrder::Id => ship::Column::Id,
        ShipOrder::Name => ship::Column::Name,
        ShipOrder::Planet => ship::Column::Planet,
        ShipOrder::Date => ship::Column::ProdDate,
        ShipOrder::Speed => ship::Column::Speed,
        ShipOrder::CrewSize => ship::Column::CrewSize,
        ShipOrder::Rating => ship::Column::Rating,
    }
}
