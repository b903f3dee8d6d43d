//! Helpers shared by the services: password hashing, folio numbering, field validation and
//! the clock.

pub mod folio;
pub mod password;
pub mod time;
pub mod validation;
