//! # Daily Content Resolver
//!
//! Produces the love note for "today". Three tiers, degrading gracefully:
//!
//! 1. the quote whose `date` equals today's `YYYY-MM-DD` key;
//! 2. otherwise the most recently added quote (highest id);
//! 3. otherwise [`DEFAULT_NOTE`].
//!
//! The resolver never fails and never surfaces an error: store faults are
//! logged and absorbed by the next tier. The date key uses the local
//! wall-clock date, matching the format the `quotes` rows are stored in;
//! a format mismatch would silently land every day on the fallback tier.

use crate::store::GreetingStore;

/// Shown when both lookups come up empty or fail.
pub const DEFAULT_NOTE: &str = "You are loved more than you know 💕";

/// Today's date key in the stored `YYYY-MM-DD` format (local wall clock).
pub fn today_key() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Resolve the note for today. Always returns a displayable string.
pub async fn resolve_today<S: GreetingStore>(store: &S) -> String {
    resolve_for(store, &today_key()).await
}

/// Resolve the note for an explicit date key.
pub async fn resolve_for<S: GreetingStore>(store: &S, date_key: &str) -> String {
    match store.quote_for_date(date_key).await {
        Ok(Some(quote)) => return quote.quote,
        Ok(None) => {}
        Err(e) => tracing::warn!("daily quote lookup failed: {e}"),
    }

    match store.latest_quote().await {
        Ok(Some(quote)) => quote.quote,
        Ok(None) => DEFAULT_NOTE.to_string(),
        Err(e) => {
            tracing::warn!("fallback quote lookup failed: {e}");
            DEFAULT_NOTE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_exact_date_wins_and_skips_fallback() {
        let store = MemoryStore::new();
        store.add_quote("2024-02-13", "A");
        store.add_quote("2024-02-14", "B");

        assert_eq!(resolve_for(&store, "2024-02-14").await, "B");
        assert_eq!(store.calls().latest_quote, 0);
    }

    #[tokio::test]
    async fn test_date_miss_falls_back_to_latest() {
        let store = MemoryStore::new();
        store.add_quote("2024-02-13", "A");
        store.add_quote("2024-02-14", "B");

        // Highest id, never the hardcoded default.
        assert_eq!(resolve_for(&store, "2024-03-01").await, "B");
    }

    #[tokio::test]
    async fn test_empty_store_yields_default() {
        let store = MemoryStore::new();
        assert_eq!(resolve_for(&store, "2024-03-01").await, DEFAULT_NOTE);
    }

    #[tokio::test]
    async fn test_total_store_failure_yields_default() {
        let store = MemoryStore::new();
        store.add_quote("2024-02-14", "B");
        store.set_failing(true);

        let note = resolve_for(&store, "2024-02-14").await;
        assert_eq!(note, DEFAULT_NOTE);
        assert!(!note.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_dates_fall_back_to_latest() {
        let store = MemoryStore::new();
        store.add_quote("2024-02-14", "B1");
        store.add_quote("2024-02-14", "B2");

        // The single-row lookup errors on duplicates; the fallback still
        // produces an existing quote.
        assert_eq!(resolve_for(&store, "2024-02-14").await, "B2");
    }

    #[test]
    fn test_today_key_format() {
        let key = today_key();
        assert_eq!(key.len(), 10);
        let bytes = key.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert!(key
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-'));
    }
}
