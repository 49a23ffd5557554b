//! Ship catalog service layer.
//!
//! [`ShipService`] orchestrates every catalog operation: it validates
//! payloads, derives ratings, builds filter conditions, and delegates
//! persistence to [`ShipRepository`].

pub mod filter;
pub mod rating;
pub mod validation;

use sea_orm::DatabaseConnection;

use crate::{
    data::ship::ShipRepository,
    error::{ship::ShipError, Error},
    model::ship::{
        timestamp_from_millis, NewShip, ProductionWindow, ShipDto, ShipFilters, ShipListParams,
        ShipPayload,
    },
};

/// Service for catalog operations on ship records.
pub struct ShipService<'a> {
    db: &'a DatabaseConnection,
    window: ProductionWindow,
}

impl<'a> ShipService<'a> {
    /// Creates a new instance of [`ShipService`]
    pub fn new(db: &'a DatabaseConnection, window: ProductionWindow) -> Self {
        Self { db, window }
    }

    /// Look up one record by id.
    ///
    /// The stored rating is returned as persisted by the last write; it is
    /// not recomputed on read.
    pub async fn get(&self, id: i32) -> Result<ShipDto, Error> {
        if id <= 0 {
            return Err(ShipError::InvalidId(id).into());
        }

        let repository = ShipRepository::new(self.db);
        let ship = repository
            .get_by_id(id)
            .await?
            .ok_or(ShipError::NotFound(id))?;

        Ok(ship.into())
    }

    /// Validate and store a new record with a freshly derived rating.
    ///
    /// A missing usage flag defaults to false before validation. Nothing is
    /// persisted when validation fails.
    pub async fn create(&self, payload: ShipPayload) -> Result<ShipDto, Error> {
        let payload = ShipPayload {
            is_used: Some(payload.is_used.unwrap_or(false)),
            ..payload
        };

        if !validation::is_valid_for_create(&payload, &self.window) {
            return Err(ShipError::InvalidShip.into());
        }

        // Validation guarantees presence; destructuring re-checks it without
        // panicking paths.
        let ShipPayload {
            name: Some(name),
            planet: Some(planet),
            ship_type: Some(ship_type),
            prod_date: Some(prod_date),
            speed: Some(speed),
            crew_size: Some(crew_size),
            is_used: Some(is_used),
        } = payload
        else {
            return Err(ShipError::InvalidShip.into());
        };
        let Some(prod_date) = timestamp_from_millis(prod_date) else {
            return Err(ShipError::InvalidShip.into());
        };

        let rating = rating::ship_rating(speed, is_used, prod_date);

        let repository = ShipRepository::new(self.db);
        let ship = repository
            .create(NewShip {
                name,
                planet,
                ship_type,
                prod_date,
                speed,
                crew_size,
                is_used,
                rating,
            })
            .await?;

        Ok(ship.into())
    }

    /// Merge present payload fields over an existing record, re-derive the
    /// rating, and store the result.
    ///
    /// A payload with no fields set is a no-op success: the stored record
    /// is returned without a write.
    pub async fn update(&self, id: i32, payload: ShipPayload) -> Result<ShipDto, Error> {
        if id <= 0 {
            return Err(ShipError::InvalidId(id).into());
        }
        if !validation::is_valid_for_update(&payload, &self.window) {
            return Err(ShipError::InvalidShip.into());
        }

        let repository = ShipRepository::new(self.db);
        let existing = repository
            .get_by_id(id)
            .await?
            .ok_or(ShipError::NotFound(id))?;

        if payload.is_empty() {
            return Ok(existing.into());
        }

        let prod_date = match payload.prod_date {
            Some(millis) => match timestamp_from_millis(millis) {
                Some(prod_date) => prod_date,
                None => return Err(ShipError::InvalidShip.into()),
            },
            None => existing.prod_date,
        };
        let speed = payload.speed.unwrap_or(existing.speed);
        let is_used = payload.is_used.unwrap_or(existing.is_used);

        let rating = rating::ship_rating(speed, is_used, prod_date);

        let ship = repository
            .update(
                id,
                NewShip {
                    name: payload.name.unwrap_or(existing.name),
                    planet: payload.planet.unwrap_or(existing.planet),
                    ship_type: payload.ship_type.unwrap_or(existing.ship_type),
                    prod_date,
                    speed,
                    crew_size: payload.crew_size.unwrap_or(existing.crew_size),
                    is_used,
                    rating,
                },
            )
            .await?;

        Ok(ship.into())
    }

    /// Remove one record by id.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        if id <= 0 {
            return Err(ShipError::InvalidId(id).into());
        }

        let repository = ShipRepository::new(self.db);
        let result = repository.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(ShipError::NotFound(id).into());
        }

        Ok(())
    }

    /// One ascending page of records matching `filters`.
    pub async fn list(
        &self,
        filters: &ShipFilters,
        params: ShipListParams,
    ) -> Result<Vec<ShipDto>, Error> {
        let condition = filter::condition(filters);
        let order_by = filter::sort_column(params.order);

        let repository = ShipRepository::new(self.db);
        let (ships, _total) = repository
            .find_matching(condition, order_by, params.page_number, params.page_size)
            .await?;

        Ok(ships.into_iter().map(ShipDto::from).collect())
    }

    /// Number of records matching `filters`, ignoring pagination.
    pub async fn count(&self, filters: &ShipFilters) -> Result<u64, Error> {
        let condition = filter::condition(filters);

        let repository = ShipRepository::new(self.db);
        Ok(repository.count_matching(condition).await?)
    }
}
