//! Ship repository.

use entity::ship;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::ship::NewShip;

/// Data access for the `ship` table.
pub struct ShipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShipRepository<'a> {
    /// Creates a new instance of [`ShipRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch one record by primary key.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ship::Model>, DbErr> {
        entity::prelude::Ship::find_by_id(id).one(self.db).await
    }

    /// Insert a new record, returning the stored row with its assigned id.
    pub async fn create(&self, ship: NewShip) -> Result<ship::Model, DbErr> {
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

        ship.insert(self.db).await
    }

    /// Overwrite every column of an existing record.
    pub async fn update(&self, id: i32, ship: NewShip) -> Result<ship::Model, DbErr> {
        let ship = ship::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(ship.name),
            planet: ActiveValue::Set(ship.planet),
            ship_type: ActiveValue::Set(ship.ship_type),
            prod_date: ActiveValue::Set(ship.prod_date),
            speed: ActiveValue::Set(ship.speed),
            crew_size: ActiveValue::Set(ship.crew_size),
            is_used: ActiveValue::Set(ship.is_used),
            rating: ActiveValue::Set(ship.rating),
        };

        ship.update(self.db).await
    }

    /// Delete a record.
    ///
    /// Returns OK regardless of the record existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ship::delete_by_id(id).exec(self.db).await
    }

    /// One ascending page of records matching `condition`, plus the total
    /// match count.
    pub async fn find_matching(
        &self,
        condition: Condition,
        order_by: ship::Column,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ship::Model>, u64), DbErr> {
        // The paginator divides by the page size; a size below 1 is meaningless.
        let paginator = entity::prelude::Ship::find()
            .filter(condition)
            .order_by_asc(order_by)
            .paginate(self.db, page_size.max(1));

        let total = paginator.num_items().await?;
        let ships = paginator.fetch_page(page).await?;

        Ok((ships, total))
    }

    /// Number of records matching `condition`.
    pub async fn count_matching(&self, condition: Condition) -> Result<u64, DbErr> {
        entity::prelude::Ship::find()
            .filter(condition)
            .count(self.db)
            .await
    }
}
