//! SQLite storage bootstrap, schema migrations and the resource seam.
//!
//! # Responsibility
//! - Open and configure SQLite connections for repository coordination.
//! - Apply schema migrations in deterministic order.
//! - Describe the minimal capabilities repositories and the coordinator need
//!   from a database handle (`Executor`, `Database`, `DbTransaction`).
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Repositories must not read/write application data before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod executor;
pub mod migrations;
mod open;

pub use executor::{Database, DbTransaction, Executor, QueryRow};
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A root-bound statement was issued while a transaction was open on the
    /// same connection.
    RootBusyInTransaction,
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::RootBusyInTransaction => write!(
                f,
                "root connection has an open transaction; use the transaction scope repositories"
            ),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::RootBusyInTransaction | Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
