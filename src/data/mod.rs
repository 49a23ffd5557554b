//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations; the
//! service layer never touches sea-orm query building for writes directly.

pub mod ship;
