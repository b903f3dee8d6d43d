use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Rejections coming from the schema's unique and foreign key constraints.
#[derive(Error, Debug)]
pub enum ConstraintError {
    #[error("Duplicate value rejected by unique constraint: {0}")]
    Unique(String),
    #[error("Reference rejected by foreign key constraint: {0}")]
    ForeignKey(String),
    #[error("Cannot delete {entity} {key}: it is still referenced by {referenced_by}")]
    StillReferenced {
        entity: &'static str,
        key: String,
        referenced_by: &'static str,
    },
}

impl ConstraintError {
    /// Classify a database error as a constraint violation.
    ///
    /// Returns `None` for every other kind of database error.
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        match err.sql_err()? {
            SqlErr::UniqueConstraintViolation(message) => Some(Self::Unique(message)),
            SqlErr::ForeignKeyConstraintViolation(message) => Some(Self::ForeignKey(message)),
            _ => None,
        }
    }
}
