//! Test context structure and utilities.
//!
//! Provides the `TestContext` returned by `TestBuilder`: an in-memory SQLite
//! database with whichever tables the builder was asked to create.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder)
/// rather than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_ship_table().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Insert a fixture row
/// ship::insert_ship(&test.db, ship::MockShip::default()).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any state type constructible from it.
    ///
    /// This allows conversion to the application's `AppState` without creating
    /// a circular dependency between the test-utils crate and the main crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// Executes CREATE TABLE statements for all provided table schemas. Used
    /// internally by TestBuilder during test initialization.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
