//! Test fixtures for the shop tables.
//!
//! - `factory` - in-memory models with standard test values, no database access
//! - `shop` - inserts customers, users, costumes, rentals and sales into the test database

pub mod factory;
pub mod shop;
