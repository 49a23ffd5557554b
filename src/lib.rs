//! Armada server library.
//!
//! Catalog service for interstellar ship records: create, read, update,
//! delete, and filterable paginated listing over a PostgreSQL store, served
//! as a JSON HTTP API with OpenAPI documentation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
