//! Entity records persisted through the repository layer.
//!
//! # Responsibility
//! - Define plain data structures mapped to and from storage rows.
//!
//! # Invariants
//! - Identifiers are assigned by the database, never by callers.

pub mod otpx;
pub mod xpto;
