//! MaskNGo data layer.
//!
//! Storage and business services for a costume rental and sales shop: customers, employees,
//! inventory, rentals, sales and shop configuration. The schema lives in the `migration`
//! crate and the table models in `entity`. This crate adds the repositories, the services that
//! keep the invariants the schema leaves to the application, and the bootstrap used by the
//! `maskngo` binary.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
