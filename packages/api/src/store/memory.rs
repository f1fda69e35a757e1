use std::sync::{Arc, Mutex};

use crate::models::{Credential, Quote};

use super::{single_row, GreetingStore, StoreError};

/// In-memory GreetingStore for tests.
///
/// Records how often each lookup ran (so tests can assert that the empty-input
/// path makes no store call and that an exact-date hit never touches the
/// fallback query) and can be switched into a failing mode where every lookup
/// returns [`StoreError::Query`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    users: Arc<Mutex<Vec<Credential>>>,
    quotes: Arc<Mutex<Vec<Quote>>>,
    failing: Arc<Mutex<bool>>,
    calls: Arc<Mutex<CallCounts>>,
}

/// Number of times each lookup has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub credential_by_code: usize,
    pub quote_for_date: usize,
    pub latest_quote: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.credential_by_code + self.quote_for_date + self.latest_quote
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a credential row, assigning the next id.
    pub fn add_user(&self, password: &str, name: &str) {
        let mut users = self.users.lock().unwrap();
        let id = users.len() as i64 + 1;
        users.push(Credential {
            id,
            password: password.to_string(),
            name: name.to_string(),
        });
    }

    /// Insert a quote row, assigning the next id (insertion order == id order).
    pub fn add_quote(&self, date: &str, quote: &str) {
        let mut quotes = self.quotes.lock().unwrap();
        let id = quotes.len() as i64 + 1;
        quotes.push(Quote {
            id,
            date: date.to_string(),
            quote: quote.to_string(),
        });
    }

    /// Make every subsequent lookup fail with [`StoreError::Query`].
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn calls(&self) -> CallCounts {
        *self.calls.lock().unwrap()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.failing.lock().unwrap() {
            Err(StoreError::Query("injected store failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl GreetingStore for MemoryStore {
    async fn credential_by_code(&self, code: &str) -> Result<Option<Credential>, StoreError> {
        self.calls.lock().unwrap().credential_by_code += 1;
        self.check_available()?;
        let rows: Vec<Credential> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.password == code)
            .cloned()
            .collect();
        single_row(rows)
    }

    async fn quote_for_date(&self, date_key: &str) -> Result<Option<Quote>, StoreError> {
        self.calls.lock().unwrap().quote_for_date += 1;
        self.check_available()?;
        let rows: Vec<Quote> = self
            .quotes
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.date == date_key)
            .cloned()
            .collect();
        single_row(rows)
    }

    async fn latest_quote(&self) -> Result<Option<Quote>, StoreError> {
        self.calls.lock().unwrap().latest_quote += 1;
        self.check_available()?;
        Ok(self
            .quotes
            .lock()
            .unwrap()
            .iter()
            .max_by_key(|q| q.id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookups_and_counts() {
        let store = MemoryStore::new();
        store.add_user("lovebug", "Ada");
        store.add_quote("2024-02-13", "A");
        store.add_quote("2024-02-14", "B");

        let found = store.credential_by_code("lovebug").await.unwrap().unwrap();
        assert_eq!(found.name, "Ada");
        assert!(store.credential_by_code("nope").await.unwrap().is_none());

        let q = store.quote_for_date("2024-02-13").await.unwrap().unwrap();
        assert_eq!(q.quote, "A");

        // Highest id wins.
        let latest = store.latest_quote().await.unwrap().unwrap();
        assert_eq!(latest.quote, "B");

        let calls = store.calls();
        assert_eq!(calls.credential_by_code, 2);
        assert_eq!(calls.quote_for_date, 1);
        assert_eq!(calls.latest_quote, 1);
    }

    #[tokio::test]
    async fn test_duplicate_rows_are_an_error() {
        let store = MemoryStore::new();
        store.add_quote("2024-02-14", "B1");
        store.add_quote("2024-02-14", "B2");

        assert_eq!(
            store.quote_for_date("2024-02-14").await,
            Err(StoreError::MultipleRows(2))
        );
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let store = MemoryStore::new();
        store.add_quote("2024-02-14", "B");
        store.set_failing(true);

        assert!(matches!(
            store.latest_quote().await,
            Err(StoreError::Query(_))
        ));
    }
}
