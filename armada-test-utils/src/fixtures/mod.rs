//! Database fixtures for tests.

pub mod ship;
