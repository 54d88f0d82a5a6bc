//! OTPX repository.

use crate::db::Executor;
use crate::model::otpx::OtpxEntity;
use crate::repo::RepoResult;
use rusqlite::types::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Repository for `OtpxEntity` bound to one executor.
pub struct OtpxRepository<'r, E: Executor + ?Sized> {
    executor: &'r E,
    statements: AtomicU64,
}

impl<'r, E: Executor + ?Sized> OtpxRepository<'r, E> {
    pub fn new(executor: &'r E) -> Self {
        Self {
            executor,
            statements: AtomicU64::new(0),
        }
    }

    /// Number of statements issued through this instance.
    pub fn statement_count(&self) -> u64 {
        self.statements.load(Ordering::Relaxed)
    }

    /// Stores `entity` as the current OTPX record.
    ///
    /// Takes the entity by value; the caller's copy is never touched.
    pub fn update(&self, entity: OtpxEntity) -> RepoResult<()> {
        self.statements.fetch_add(1, Ordering::Relaxed);
        self.executor.execute(
            "INSERT INTO otpx (slot, note) VALUES (1, ?1)
             ON CONFLICT(slot) DO UPDATE SET
                note = excluded.note,
                updated_at = (strftime('%s', 'now') * 1000);",
            &[Value::Text(entity.note)],
        )?;
        Ok(())
    }
}
