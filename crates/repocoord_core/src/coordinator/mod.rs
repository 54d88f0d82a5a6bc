//! Repository coordination and transaction lifecycle.
//!
//! # Responsibility
//! - Vend repositories bound to the root database handle.
//! - Run caller-supplied work inside one transaction and conclude it by
//!   commit or rollback based on the work outcome.
//!
//! # Invariants
//! - Repositories are created lazily and memoized per binding; an instance is
//!   never shared between the root handle and a transaction, or between two
//!   transaction attempts.
//! - Every begun transaction is concluded exactly once: commit after
//!   successful work, rollback after failed work.
//! - Every lifecycle failure reaches the caller; none is logged and dropped.

use crate::db::{Database, DbTransaction, Executor};
use crate::repo::otpx_repo::OtpxRepository;
use crate::repo::xpto_repo::XptoRepository;
use log::{debug, error, warn};
use std::time::Instant;

mod error;
mod registry;
mod scope;

pub use error::{TransactionError, TransactionResult};
pub use scope::TransactionScope;

use registry::RepositoryRegistry;

/// Source of repositories bound to a single resource.
///
/// Implemented by both `RepositoryCoordinator` (root handle) and
/// `TransactionScope` (open transaction), so the same logic can run inside or
/// outside a transaction.
pub trait RepositoryProvider {
    type Executor: Executor + ?Sized;

    fn xpto_repository(&self) -> &XptoRepository<'_, Self::Executor>;
    fn otpx_repository(&self) -> &OtpxRepository<'_, Self::Executor>;
}

/// Long-lived entry point owning the transaction lifecycle.
///
/// The root handle is injected by the composition root and shared; the
/// coordinator never closes it.
pub struct RepositoryCoordinator<'db, D: Database> {
    db: &'db D,
    repositories: RepositoryRegistry<'db, D>,
}

impl<'db, D: Database> RepositoryCoordinator<'db, D> {
    pub fn new(db: &'db D) -> Self {
        Self {
            db,
            repositories: RepositoryRegistry::new(db),
        }
    }

    /// Returns the XPTO repository bound to the root handle.
    ///
    /// Statements issued through it are not part of any coordinator
    /// transaction.
    pub fn xpto_repository(&self) -> &XptoRepository<'db, D> {
        self.repositories.xpto()
    }

    /// Returns the OTPX repository bound to the root handle.
    pub fn otpx_repository(&self) -> &OtpxRepository<'db, D> {
        self.repositories.otpx()
    }

    /// Runs `work` inside a new transaction.
    ///
    /// # Contract
    /// - Begin failure returns `TransactionError::Begin`; `work` is not invoked.
    /// - `Ok` from `work` commits; commit failure returns
    ///   `TransactionError::Commit`.
    /// - `Err` from `work` rolls back and returns `TransactionError::Work`, or
    ///   `TransactionError::Rollback` carrying both errors when rollback fails.
    /// - No retries, savepoints or nesting.
    pub fn run_in_transaction<T, E, F>(&self, work: F) -> TransactionResult<T, E>
    where
        F: FnOnce(&TransactionScope<'_, D::Tx<'db>>) -> Result<T, E>,
    {
        let started_at = Instant::now();

        let tx = match self.db.begin() {
            Ok(tx) => tx,
            Err(err) => {
                error!(
                    "event=tx_begin module=coordinator status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(TransactionError::Begin(err));
            }
        };
        debug!("event=tx_begin module=coordinator status=ok");

        let outcome = {
            let scope = TransactionScope::new(&tx);
            work(&scope)
        };

        match outcome {
            Ok(value) => match tx.commit() {
                Ok(()) => {
                    debug!(
                        "event=tx_commit module=coordinator status=ok duration_ms={}",
                        started_at.elapsed().as_millis()
                    );
                    Ok(value)
                }
                Err(err) => {
                    error!(
                        "event=tx_commit module=coordinator status=error duration_ms={} error={}",
                        started_at.elapsed().as_millis(),
                        err
                    );
                    Err(TransactionError::Commit(err))
                }
            },
            Err(work_err) => match tx.rollback() {
                Ok(()) => {
                    warn!(
                        "event=tx_rollback module=coordinator status=ok duration_ms={}",
                        started_at.elapsed().as_millis()
                    );
                    Err(TransactionError::Work(work_err))
                }
                Err(rollback_err) => {
                    error!(
                        "event=tx_rollback module=coordinator status=error duration_ms={} error={}",
                        started_at.elapsed().as_millis(),
                        rollback_err
                    );
                    Err(TransactionError::Rollback {
                        work: work_err,
                        rollback: rollback_err,
                    })
                }
            },
        }
    }
}

impl<D: Database> RepositoryProvider for RepositoryCoordinator<'_, D> {
    type Executor = D;

    fn xpto_repository(&self) -> &XptoRepository<'_, D> {
        self.repositories.xpto()
    }

    fn otpx_repository(&self) -> &OtpxRepository<'_, D> {
        self.repositories.otpx()
    }
}
