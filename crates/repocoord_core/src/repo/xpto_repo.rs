//! XPTO repository.
//!
//! # Invariants
//! - `create` writes the generated id back into the caller's entity only
//!   after the insert succeeded.

use crate::db::Executor;
use crate::model::xpto::{XptoEntity, XptoId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Repository for `XptoEntity` bound to one executor.
pub struct XptoRepository<'r, E: Executor + ?Sized> {
    executor: &'r E,
    statements: AtomicU64,
}

impl<'r, E: Executor + ?Sized> XptoRepository<'r, E> {
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

    /// Inserts `entity` and assigns the generated identifier in place.
    pub fn create(&self, entity: &mut XptoEntity) -> RepoResult<()> {
        self.statements.fetch_add(1, Ordering::Relaxed);
        let rows = self.executor.query(
            "INSERT INTO xpto (label) VALUES (?1) RETURNING id;",
            &[Value::Text(entity.label.clone())],
        )?;

        entity.id = parse_generated_id(rows.first().and_then(|row| row.first()))?;
        Ok(())
    }
}

fn parse_generated_id(value: Option<&Value>) -> RepoResult<XptoId> {
    match value {
        Some(Value::Integer(id)) => XptoId::try_from(*id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| RepoError::InvalidData(format!("invalid generated xpto id `{id}`"))),
        Some(other) => Err(RepoError::InvalidData(format!(
            "unexpected generated xpto id value `{other:?}`"
        ))),
        None => Err(RepoError::InvalidData(
            "insert into xpto returned no id".to_string(),
        )),
    }
}
