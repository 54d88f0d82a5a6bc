//! Entity repositories bound to one database resource.
//!
//! # Responsibility
//! - Map entity fields to statements issued through an `Executor`.
//! - Work identically against the root handle and an open transaction.
//!
//! # Invariants
//! - A repository is bound to exactly one resource for its whole lifetime.
//! - Repositories never begin, commit or roll back transactions.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod otpx_repo;
pub mod xpto_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of a single repository operation.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
