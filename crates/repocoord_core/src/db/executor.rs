//! Capabilities required from a database handle.
//!
//! # Responsibility
//! - Abstract statement execution over a root handle or an open transaction.
//! - Let the coordinator begin, commit and roll back without knowing the driver.
//!
//! # Invariants
//! - `commit` and `rollback` consume the transaction; a concluded transaction
//!   can never be used again.
//! - A `rusqlite::Transaction` dropped without being concluded rolls back.
//! - Statements issued on a root `Connection` never join an open transaction;
//!   they fail with `DbError::RootBusyInTransaction` instead.

use super::{DbError, DbResult};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Transaction};

/// One result row, with columns in select order.
pub type QueryRow = Vec<Value>;

/// Statement execution against a bound resource.
pub trait Executor {
    /// Executes one statement and returns the number of affected rows.
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize>;

    /// Runs one statement and collects every returned row.
    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<QueryRow>>;
}

/// Root database handle able to start independent transactions.
pub trait Database: Executor {
    type Tx<'a>: DbTransaction
    where
        Self: 'a;

    /// Starts a new transaction borrowing this handle.
    fn begin(&self) -> DbResult<Self::Tx<'_>>;
}

/// In-flight atomic unit of work.
pub trait DbTransaction: Executor {
    fn commit(self) -> DbResult<()>;
    fn rollback(self) -> DbResult<()>;
}

impl Executor for Connection {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize> {
        ensure_autocommit(self)?;
        execute_on(self, sql, params)
    }

    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<QueryRow>> {
        ensure_autocommit(self)?;
        query_on(self, sql, params)
    }
}

impl Database for Connection {
    type Tx<'a>
        = Transaction<'a>
    where
        Self: 'a;

    // `unchecked_transaction` borrows `&self`; while it is open, root-bound
    // statements are rejected by `ensure_autocommit`.
    fn begin(&self) -> DbResult<Transaction<'_>> {
        Ok(self.unchecked_transaction()?)
    }
}

impl Executor for Transaction<'_> {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize> {
        execute_on(self, sql, params)
    }

    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<QueryRow>> {
        query_on(self, sql, params)
    }
}

impl DbTransaction for Transaction<'_> {
    fn commit(self) -> DbResult<()> {
        Transaction::commit(self)?;
        Ok(())
    }

    fn rollback(self) -> DbResult<()> {
        Transaction::rollback(self)?;
        Ok(())
    }
}

/// Root statements must stay standalone: a connection with an open
/// transaction would silently enlist them.
fn ensure_autocommit(conn: &Connection) -> DbResult<()> {
    if conn.is_autocommit() {
        Ok(())
    } else {
        Err(DbError::RootBusyInTransaction)
    }
}

fn execute_on(conn: &Connection, sql: &str, params: &[Value]) -> DbResult<usize> {
    let changed = conn.execute(sql, params_from_iter(params.iter()))?;
    Ok(changed)
}

fn query_on(conn: &Connection, sql: &str, params: &[Value]) -> DbResult<Vec<QueryRow>> {
    let mut stmt = conn.prepare(sql)?;
    let column_count = stmt.column_count();
    let mut rows = stmt.query(params_from_iter(params.iter()))?;
    let mut collected = Vec::new();

    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for index in 0..column_count {
            values.push(row.get::<_, Value>(index)?);
        }
        collected.push(values);
    }

    Ok(collected)
}
