//! Transaction-scoped repository access.

use super::registry::RepositoryRegistry;
use super::RepositoryProvider;
use crate::db::Executor;
use crate::repo::otpx_repo::OtpxRepository;
use crate::repo::xpto_repo::XptoRepository;

/// Passive accessor vending repositories bound to one open transaction.
///
/// Lives for exactly one `run_in_transaction` attempt. Commit and rollback
/// belong to the coordinator; this type cannot conclude the transaction.
pub struct TransactionScope<'t, T: Executor + ?Sized> {
    repositories: RepositoryRegistry<'t, T>,
}

impl<'t, T: Executor + ?Sized> TransactionScope<'t, T> {
    pub(crate) fn new(tx: &'t T) -> Self {
        Self {
            repositories: RepositoryRegistry::new(tx),
        }
    }

    /// Returns the XPTO repository bound to this transaction, creating it on
    /// first access.
    pub fn xpto_repository(&self) -> &XptoRepository<'t, T> {
        self.repositories.xpto()
    }

    /// Returns the OTPX repository bound to this transaction, creating it on
    /// first access.
    pub fn otpx_repository(&self) -> &OtpxRepository<'t, T> {
        self.repositories.otpx()
    }
}

impl<T: Executor + ?Sized> RepositoryProvider for TransactionScope<'_, T> {
    type Executor = T;

    fn xpto_repository(&self) -> &XptoRepository<'_, T> {
        self.repositories.xpto()
    }

    fn otpx_repository(&self) -> &OtpxRepository<'_, T> {
        self.repositories.otpx()
    }
}
