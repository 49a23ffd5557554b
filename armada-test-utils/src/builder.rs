//! Declarative test builder.
//!
//! Configures a test environment before execution: chained configuration
//! methods queue work that runs during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, fixtures::ship::MockShip};

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_ship_table()
///     .with_ship(MockShip::default())
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    ships: Vec<MockShip>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            ships: Vec::new(),
        }
    }

    /// Add the ship catalog table to the test database.
    pub fn with_ship_table(self) -> Self {
        self.with_table(entity::prelude::Ship)
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a ship fixture row to insert during `build()`.
    pub fn with_ship(mut self, ship: MockShip) -> Self {
        self.ships.push(ship);
        self
    }

    /// Execute all queued setup and return the ready test context.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        context.with_tables(self.tables).await?;

        for ship in self.ships {
            crate::fixtures::ship::insert_ship(&context.db, ship).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
