use crate::db::get_pool;
use crate::models::{Credential, Quote};

use super::{single_row, GreetingStore, StoreError};

/// GreetingStore backed by the shared Postgres pool.
///
/// Acquires the pool lazily per lookup, so constructing a `PgStore` is free
/// and a lookup that never runs (e.g. empty input) never touches the
/// database. `sqlx` failures of any kind, including an unreachable database,
/// surface as [`StoreError::Query`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PgStore;

impl GreetingStore for PgStore {
    async fn credential_by_code(&self, code: &str) -> Result<Option<Credential>, StoreError> {
        let pool = get_pool()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let rows: Vec<Credential> =
            sqlx::query_as("SELECT id, password, name FROM users WHERE password = $1")
                .bind(code)
                .fetch_all(pool)
                .await
                .map_err(|e| StoreError::Query(e.to_string()))?;

        single_row(rows)
    }

    async fn quote_for_date(&self, date_key: &str) -> Result<Option<Quote>, StoreError> {
        let pool = get_pool()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let rows: Vec<Quote> = sqlx::query_as("SELECT id, date, quote FROM quotes WHERE date = $1")
            .bind(date_key)
            .fetch_all(pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        single_row(rows)
    }

    async fn latest_quote(&self) -> Result<Option<Quote>, StoreError> {
        let pool = get_pool()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        sqlx::query_as("SELECT id, date, quote FROM quotes ORDER BY id DESC LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}
