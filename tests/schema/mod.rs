//! Storage-level guarantees of the migrated schema, exercised with plain entity inserts so no
//! service validation stands in front of the database.

mod cascade;
mod defaults;
mod referential;
mod scenario;
mod uniqueness;
