//! # Store — the remote read-only collections behind an abstract interface
//!
//! [`GreetingStore`] is the async interface over the two collections the app
//! reads (`users` and `quotes`). All verification and resolution logic goes
//! through it, so the same code runs against Postgres in production
//! ([`PgStore`], server builds only) and against an in-memory store in tests
//! ([`MemoryStore`]).
//!
//! Every method is a single point lookup expecting zero or one row. A lookup
//! that matches more than one row is an error state
//! ([`StoreError::MultipleRows`]), not a silent first-row pick.

use thiserror::Error;

use crate::models::{Credential, Quote};

/// Failure of a store lookup. Callers never surface these to the user; the
/// verify path collapses them into a rejection and the daily path falls
/// through to the next tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Query(String),
    #[error("expected at most one row, found {0}")]
    MultipleRows(usize),
}

/// Async interface over the read-only collections.
pub trait GreetingStore {
    /// Point lookup of a credential by its (already lower-cased) code.
    async fn credential_by_code(&self, code: &str) -> Result<Option<Credential>, StoreError>;

    /// The quote whose `date` column equals `date_key` (`YYYY-MM-DD`).
    async fn quote_for_date(&self, date_key: &str) -> Result<Option<Quote>, StoreError>;

    /// The most recently added quote (highest id), if any.
    async fn latest_quote(&self) -> Result<Option<Quote>, StoreError>;
}

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "server")]
mod postgres;
#[cfg(feature = "server")]
pub use postgres::PgStore;

/// Collapse a multi-row result into the single expected row.
fn single_row<T>(mut rows: Vec<T>) -> Result<Option<T>, StoreError> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        n => Err(StoreError::MultipleRows(n)),
    }
}
