//! Service layer for business logic and orchestration.
//!
//! Services own the catalog's decision logic (validation, rating
//! derivation, filter building) and coordinate the repositories.

pub mod ship;
