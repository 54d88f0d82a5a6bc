//! Failure outcomes of one transaction attempt.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TransactionResult<T, E> = Result<T, TransactionError<E>>;

/// Error returned by `RepositoryCoordinator::run_in_transaction`.
///
/// `E` is the error type returned by the caller's work function.
#[derive(Debug)]
pub enum TransactionError<E> {
    /// The transaction could not be started; work was never invoked.
    Begin(DbError),
    /// Work failed and the transaction was rolled back.
    Work(E),
    /// Work failed and the rollback failed too. Both failures are kept.
    Rollback { work: E, rollback: DbError },
    /// Work succeeded but the commit failed.
    Commit(DbError),
}

impl<E> TransactionError<E> {
    /// Returns the work error, if the attempt failed inside work.
    pub fn work_error(&self) -> Option<&E> {
        match self {
            Self::Work(err) | Self::Rollback { work: err, .. } => Some(err),
            Self::Begin(_) | Self::Commit(_) => None,
        }
    }

    /// Consumes the error and returns the work error, if any.
    pub fn into_work_error(self) -> Option<E> {
        match self {
            Self::Work(err) | Self::Rollback { work: err, .. } => Some(err),
            Self::Begin(_) | Self::Commit(_) => None,
        }
    }

    /// Returns the database error raised by the transaction lifecycle itself.
    pub fn lifecycle_error(&self) -> Option<&DbError> {
        match self {
            Self::Begin(err) | Self::Commit(err) | Self::Rollback { rollback: err, .. } => {
                Some(err)
            }
            Self::Work(_) => None,
        }
    }
}

impl<E: Display> Display for TransactionError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Begin(err) => write!(f, "failed to begin transaction: {err}"),
            Self::Work(err) => write!(f, "{err}"),
            Self::Rollback { work, rollback } => write!(
                f,
                "failed to roll back transaction: {rollback} (rollback attempted after: {work})"
            ),
            Self::Commit(err) => write!(f, "failed to commit transaction: {err}"),
        }
    }
}

impl<E: Error + 'static> Error for TransactionError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Begin(err) | Self::Commit(err) => Some(err),
            Self::Work(err) => err.source(),
            Self::Rollback { work, .. } => Some(work),
        }
    }
}
