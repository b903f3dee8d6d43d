//! Error types for the MaskNGo data layer.
//!
//! Repositories return [`sea_orm::DbErr`]; services return [`Error`]. Converting a `DbErr` into
//! an `Error` classifies unique and foreign key violations as [`ConstraintError`] so callers
//! can tell a duplicate folio from a lost connection.

pub mod auth;
pub mod config;
pub mod constraint;
pub mod validation;

use sea_orm::DbErr;
use thiserror::Error;

use crate::error::{
    auth::AuthError, config::ConfigError, constraint::ConstraintError,
    validation::ValidationError,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    ConstraintError(#[from] ConstraintError),
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(DbErr),
}

impl Error {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match ConstraintError::from_db_err(&err) {
            Some(constraint) => Self::ConstraintError(constraint),
            None => Self::DbErr(err),
        }
    }
}
