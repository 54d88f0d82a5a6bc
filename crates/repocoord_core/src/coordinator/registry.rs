//! Lazily memoized repository instances for one bound resource.

use crate::db::Executor;
use crate::repo::otpx_repo::OtpxRepository;
use crate::repo::xpto_repo::XptoRepository;
use once_cell::sync::OnceCell;

/// Repository cache shared by the coordinator and transaction scopes.
///
/// # Invariants
/// - Each repository kind is constructed at most once per registry.
/// - Every cached repository is bound to the registry's executor.
pub(crate) struct RepositoryRegistry<'r, E: Executor + ?Sized> {
    executor: &'r E,
    xpto: OnceCell<XptoRepository<'r, E>>,
    otpx: OnceCell<OtpxRepository<'r, E>>,
}

impl<'r, E: Executor + ?Sized> RepositoryRegistry<'r, E> {
    pub(crate) fn new(executor: &'r E) -> Self {
        Self {
            executor,
            xpto: OnceCell::new(),
            otpx: OnceCell::new(),
        }
    }

    pub(crate) fn xpto(&self) -> &XptoRepository<'r, E> {
        self.xpto.get_or_init(|| XptoRepository::new(self.executor))
    }

    pub(crate) fn otpx(&self) -> &OtpxRepository<'r, E> {
        self.otpx.get_or_init(|| OtpxRepository::new(self.executor))
    }
}
