//! Shared application state.

use sea_orm::DatabaseConnection;

use crate::model::ship::ProductionWindow;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the catalog database.
    pub db: DatabaseConnection,
    /// Accepted production-date range, fixed for the process lifetime.
    pub production_window: ProductionWindow,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            production_window: ProductionWindow::default(),
        }
    }
}
