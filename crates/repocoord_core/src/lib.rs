//! Repository coordination over a single relational-database transaction.
//!
//! Callers obtain repositories from a `RepositoryCoordinator` for standalone
//! statements, or call `run_in_transaction` to get a `TransactionScope` whose
//! repositories all write through one transaction that commits or rolls back
//! as a unit.

pub mod coordinator;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use coordinator::{
    RepositoryCoordinator, RepositoryProvider, TransactionError, TransactionResult,
    TransactionScope,
};
pub use db::{Database, DbError, DbResult, DbTransaction, Executor, QueryRow};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::otpx::OtpxEntity;
pub use model::xpto::{XptoEntity, XptoId};
pub use repo::otpx_repo::OtpxRepository;
pub use repo::xpto_repo::XptoRepository;
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
